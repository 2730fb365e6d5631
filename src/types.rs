//! Core types for brewery

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer payload as exchanged over the API.
///
/// Both fields are optional on the way in: the server assigns ids, and a
/// missing or null name is reported by validation rather than by the
/// JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CustomerDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// A customer as held by a store. The id never changes once issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
}

impl Customer {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: Some(customer.id),
            name: Some(customer.name),
        }
    }
}
