//! # Persons Common Library
//!
//! Shared code for the persons service:
//! - Domain types (Colour, Person, PersonId)
//! - Seed-file record reconstruction (csv)
//! - Seed import (import)
//! - Error taxonomy

pub mod colour;
pub mod csv;
pub mod error;
pub mod import;
pub mod person;

pub use colour::Colour;
pub use error::{Error, Result};
pub use person::{Person, PersonId};
