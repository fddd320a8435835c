//! Append-only pet registry.
//!
//! # Responsibility
//! - Own every pet constructed by the application.
//! - Validate pet types before anything is appended.
//! - Serve insertion-ordered scans for ownership queries.
//!
//! # Invariants
//! - Insertion order is preserved; pets are never removed.
//! - `index` maps every stored `PetId` to its position in `pets`.
//! - Failed calls leave both collections untouched.

use crate::error::{PetError, PetResult};
use crate::logging;
use crate::model::ids::{OwnerId, PetId};
use crate::model::owner::Owner;
use crate::model::pet::Pet;
use crate::model::pet_type::PetType;
use std::collections::HashMap;

/// Explicit container for all pets of one application context.
#[derive(Debug, Default)]
pub struct PetRegistry {
    pets: Vec<Pet>,
    index: HashMap<PetId, usize>,
}

impl PetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `pet_type`, then registers a new pet.
    ///
    /// # Errors
    /// - Returns `PetError::InvalidPetType` when `pet_type` is outside the
    ///   fixed vocabulary. The registry is unchanged.
    pub fn create_pet(
        &mut self,
        name: impl Into<String>,
        pet_type: &str,
        owner: Option<&Owner>,
    ) -> PetResult<PetId> {
        let kind =
            PetType::parse(pet_type).inspect_err(|_| logging::pet_type_rejected(pet_type))?;
        Ok(self.register_pet(name, kind, owner))
    }

    /// Registers a new pet with an already typed `pet_type`.
    pub fn register_pet(
        &mut self,
        name: impl Into<String>,
        pet_type: PetType,
        owner: Option<&Owner>,
    ) -> PetId {
        let pet = Pet::new(name.into(), pet_type, owner.map(Owner::id));
        let id = pet.id();
        self.index.insert(id, self.pets.len());
        self.pets.push(pet);
        logging::pet_registered(pet_type, owner.is_some(), self.pets.len());
        id
    }

    /// Points `pet` at `owner`, overwriting any previous owner.
    pub(crate) fn assign_owner(&mut self, pet: PetId, owner: OwnerId) -> PetResult<()> {
        let Some(&position) = self.index.get(&pet) else {
            logging::owner_assign_rejected();
            return Err(PetError::NotAPet(pet));
        };

        let entry = &mut self.pets[position];
        let replaced = entry.owner().is_some_and(|previous| previous != owner);
        entry.set_owner(owner);
        logging::owner_assigned(replaced);
        Ok(())
    }

    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.index.get(&id).map(|&position| &self.pets[position])
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates all pets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.pets.iter()
    }

    /// Iterates pets whose back-reference is `owner`, in insertion order.
    pub fn pets_owned_by(&self, owner: OwnerId) -> impl Iterator<Item = &Pet> + '_ {
        self.pets.iter().filter(move |pet| pet.is_owned_by(owner))
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl<'a> IntoIterator for &'a PetRegistry {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
