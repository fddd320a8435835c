//! Domain error contract.
//!
//! # Invariants
//! - Every failing operation returns before mutating registry state.

use crate::model::ids::PetId;
use crate::model::pet_type::supported_pet_type_strings;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PetResult<T> = Result<T, PetError>;

/// Errors raised by pet construction and ownership updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetError {
    /// Pet type id outside the fixed vocabulary.
    InvalidPetType(String),
    /// Handle does not identify a pet in the registry it was used with.
    NotAPet(PetId),
    /// Nil UUID supplied as a caller-provided owner id.
    NilOwnerId,
}

impl Display for PetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPetType(value) => write!(
                f,
                "invalid pet type: {value}. must be one of [{}]",
                supported_pet_type_strings().join(", ")
            ),
            Self::NotAPet(id) => {
                write!(f, "argument must be a pet registered in this registry: {id}")
            }
            Self::NilOwnerId => write!(f, "owner id must not be the nil uuid"),
        }
    }
}

impl Error for PetError {}
