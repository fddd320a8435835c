//! Pet and owner domain model.
//!
//! # Responsibility
//! - Define the two entities and their identity handles.
//! - Keep the pet type vocabulary closed and typed.
//!
//! # Invariants
//! - Ownership is a back-reference on `Pet`, compared by `OwnerId`.
//! - Pets are never deleted.

pub mod ids;
pub mod owner;
pub mod pet;
pub mod pet_type;
