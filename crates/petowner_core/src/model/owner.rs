//! Owner domain model and ownership queries.
//!
//! # Responsibility
//! - Hold owner identity and display name.
//! - Derive the owned-pet set from a registry on every call.
//!
//! # Invariants
//! - Owners store no pet list; `pets()` is always recomputed.
//! - Identity is `OwnerId`. Two owners with equal names stay distinct.

use crate::error::{PetError, PetResult};
use crate::model::ids::{OwnerId, PetId};
use crate::model::pet::Pet;
use crate::registry::PetRegistry;
use serde::{Deserialize, Serialize};

/// Named entity that can be linked to pets.
///
/// Deserialization goes through [`Owner::with_id`], so imported records obey
/// the same identity rules as in-process construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OwnerRecord")]
pub struct Owner {
    id: OwnerId,
    name: String,
}

/// Unvalidated wire shape of an [`Owner`].
#[derive(Deserialize)]
struct OwnerRecord {
    id: OwnerId,
    name: String,
}

impl TryFrom<OwnerRecord> for Owner {
    type Error = PetError;

    fn try_from(record: OwnerRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name)
    }
}

impl Owner {
    /// Creates an owner with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(),
            name: name.into(),
        }
    }

    /// Creates an owner with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `PetError::NilOwnerId` for the nil uuid.
    pub fn with_id(id: OwnerId, name: impl Into<String>) -> PetResult<Self> {
        if id.is_nil() {
            return Err(PetError::NilOwnerId);
        }
        Ok(Self {
            id,
            name: name.into(),
        })
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns pets linked to this owner in registry insertion order.
    pub fn pets<'r>(&self, registry: &'r PetRegistry) -> Vec<&'r Pet> {
        registry.pets_owned_by(self.id).collect()
    }

    /// Links `pet` to this owner, replacing any previous owner.
    ///
    /// Calling it again for the same pet and owner is a no-op.
    ///
    /// # Errors
    /// - Returns `PetError::NotAPet` when `pet` is not registered in
    ///   `registry`. Nothing is changed in that case.
    pub fn add_pet(&self, registry: &mut PetRegistry, pet: PetId) -> PetResult<()> {
        registry.assign_owner(pet, self.id)
    }

    /// Returns `pets()` stably sorted ascending by name.
    ///
    /// Pets with equal names keep registry insertion order.
    pub fn get_sorted_pets<'r>(&self, registry: &'r PetRegistry) -> Vec<&'r Pet> {
        let mut pets = self.pets(registry);
        pets.sort_by(|left, right| left.name().cmp(right.name()));
        pets
    }
}
