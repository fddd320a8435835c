//! Fixed pet type vocabulary.

use crate::error::PetError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of pet kinds a registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
    Rodent,
    Bird,
    Reptile,
    Exotic,
}

/// String id for [`PetType::Dog`].
pub const PET_TYPE_DOG: &str = "dog";
/// String id for [`PetType::Cat`].
pub const PET_TYPE_CAT: &str = "cat";
/// String id for [`PetType::Rodent`].
pub const PET_TYPE_RODENT: &str = "rodent";
/// String id for [`PetType::Bird`].
pub const PET_TYPE_BIRD: &str = "bird";
/// String id for [`PetType::Reptile`].
pub const PET_TYPE_REPTILE: &str = "reptile";
/// String id for [`PetType::Exotic`].
pub const PET_TYPE_EXOTIC: &str = "exotic";

const SUPPORTED_PET_TYPE_STRINGS: &[&str] = &[
    PET_TYPE_DOG,
    PET_TYPE_CAT,
    PET_TYPE_RODENT,
    PET_TYPE_BIRD,
    PET_TYPE_REPTILE,
    PET_TYPE_EXOTIC,
];

impl PetType {
    /// All variants in canonical order.
    pub const ALL: [PetType; 6] = [
        Self::Dog,
        Self::Cat,
        Self::Rodent,
        Self::Bird,
        Self::Reptile,
        Self::Exotic,
    ];

    /// Stable lowercase id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => PET_TYPE_DOG,
            Self::Cat => PET_TYPE_CAT,
            Self::Rodent => PET_TYPE_RODENT,
            Self::Bird => PET_TYPE_BIRD,
            Self::Reptile => PET_TYPE_REPTILE,
            Self::Exotic => PET_TYPE_EXOTIC,
        }
    }

    /// Parses one pet type id.
    ///
    /// Matching is exact: no trimming, no case folding.
    pub fn parse(value: &str) -> Result<Self, PetError> {
        match value {
            PET_TYPE_DOG => Ok(Self::Dog),
            PET_TYPE_CAT => Ok(Self::Cat),
            PET_TYPE_RODENT => Ok(Self::Rodent),
            PET_TYPE_BIRD => Ok(Self::Bird),
            PET_TYPE_REPTILE => Ok(Self::Reptile),
            PET_TYPE_EXOTIC => Ok(Self::Exotic),
            other => Err(PetError::InvalidPetType(other.to_string())),
        }
    }
}

impl FromStr for PetType {
    type Err = PetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for PetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns accepted pet type ids in canonical order.
pub fn supported_pet_type_strings() -> &'static [&'static str] {
    SUPPORTED_PET_TYPE_STRINGS
}
