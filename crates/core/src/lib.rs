//! Domain layer for the character roster service.
//!
//! Holds the `Character` entity, its input DTO, the owned in-memory
//! [`store::CharacterStore`], and the domain error type. Nothing here knows
//! about HTTP or async runtimes.

pub mod character;
pub mod error;
pub mod store;
pub mod types;
