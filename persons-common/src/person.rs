//! Person entity and identifier

use crate::colour::Colour;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally visible person identifier.
///
/// 1-based and unique: seed import assigns it from record position, the
/// create endpoint assigns current max + 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Construct an identifier, rejecting zero and negative values
    pub fn new(value: i64) -> Result<PersonId> {
        if value <= 0 {
            return Err(Error::InvalidIdentifier(value));
        }
        Ok(PersonId(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person record, imported from the seed file or created via the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub zip_code: String,
    pub city: String,
    pub colour: Colour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_accepts_positive() {
        assert_eq!(PersonId::new(1).unwrap().value(), 1);
        assert_eq!(PersonId::new(42).unwrap().value(), 42);
    }

    #[test]
    fn test_person_id_rejects_zero_and_negative() {
        assert!(matches!(PersonId::new(0), Err(Error::InvalidIdentifier(0))));
        assert!(matches!(
            PersonId::new(-5),
            Err(Error::InvalidIdentifier(-5))
        ));
    }
}
