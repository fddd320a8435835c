//! Pet domain model.
//!
//! # Invariants
//! - `pet_type` is one of the fixed vocabulary for the whole lifetime; there
//!   is no setter.
//! - `owner` is a back-reference only. Owners never hold pets.
//! - Pets are constructed exclusively by `PetRegistry`.

use crate::model::ids::{OwnerId, PetId};
use crate::model::pet_type::PetType;
use serde::Serialize;

/// One registered pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    id: PetId,
    name: String,
    pet_type: PetType,
    owner: Option<OwnerId>,
}

impl Pet {
    /// Builds an unregistered pet; only `PetRegistry` calls this.
    pub(crate) fn new(name: String, pet_type: PetType, owner: Option<OwnerId>) -> Self {
        Self {
            id: PetId::new(),
            name,
            pet_type,
            owner,
        }
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    /// Current owner back-reference, if any.
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// Returns whether this pet points at `owner`.
    pub fn is_owned_by(&self, owner: OwnerId) -> bool {
        self.owner == Some(owner)
    }

    pub(crate) fn set_owner(&mut self, owner: OwnerId) {
        self.owner = Some(owner);
    }
}
