//! Pet ownership domain core.
//! Pets live in an explicit registry; owners derive their pets from it.

pub mod error;
pub mod logging;
pub mod model;
pub mod registry;

pub use error::{PetError, PetResult};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::ids::{OwnerId, PetId};
pub use model::owner::Owner;
pub use model::pet::Pet;
pub use model::pet_type::{supported_pet_type_strings, PetType};
pub use registry::PetRegistry;
