pub mod appointment;
pub mod auth;
pub mod disease;
pub mod doctor;
pub mod error;
pub mod medicine;

/// Identifier shared by every stored entity.
pub type EntityId = u64;
