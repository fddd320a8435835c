//! Pet registry.
//!
//! # Responsibility
//! - Hold the ordered collection every ownership query is derived from.
//!
//! # Invariants
//! - A registry is an explicit value owned by the application; there is no
//!   process-wide pet list.

pub mod pet_registry;

pub use pet_registry::PetRegistry;
