//! Customer store abstraction
//!
//! Handlers only see [`CustomerStore`]; the concrete backend is picked once
//! at startup from [`StoreConfig`].

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::types::{Customer, CustomerDto};
use crate::Result;

pub mod memory;
pub mod stub;

/// Customer store trait
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Fetch a customer by id
    async fn get_by_id(&self, id: Uuid) -> Result<Customer>;

    /// Create a customer; the returned record always carries a freshly issued id
    async fn create(&self, customer: CustomerDto) -> Result<Customer>;

    /// Update the customer identified by `id`; any id in the payload is ignored
    async fn update(&self, id: Uuid, customer: CustomerDto) -> Result<()>;

    /// Delete the customer identified by `id`
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Short backend name, reported by the health endpoint
    fn backend_name(&self) -> &'static str;
}

/// Store configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreConfig {
    #[default]
    Stub,
    Memory,
}

impl std::str::FromStr for StoreConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stub" => Ok(StoreConfig::Stub),
            "memory" => Ok(StoreConfig::Memory),
            other => anyhow::bail!("unsupported store backend: {}", other),
        }
    }
}

/// Create customer store from config
pub fn create_store(config: StoreConfig) -> Box<dyn CustomerStore> {
    match config {
        StoreConfig::Stub => Box::new(stub::StubStore::new()),
        StoreConfig::Memory => Box::new(memory::MemoryStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_names_case_insensitively() {
        assert_eq!("stub".parse::<StoreConfig>().unwrap(), StoreConfig::Stub);
        assert_eq!("Memory".parse::<StoreConfig>().unwrap(), StoreConfig::Memory);
        assert!("postgres".parse::<StoreConfig>().is_err());
    }

    #[test]
    fn factory_builds_requested_backend() {
        assert_eq!(create_store(StoreConfig::Stub).backend_name(), "stub");
        assert_eq!(create_store(StoreConfig::Memory).backend_name(), "memory");
    }
}
