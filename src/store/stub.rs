//! Stub customer store
//!
//! Holds no data. Lookups echo the requested id with a fixed name, creation
//! issues a new id with a fixed name, and updates and deletes are accepted
//! and discarded.

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::{Customer, CustomerDto};
use crate::Result;

use super::CustomerStore;

/// Name returned for every lookup.
pub const STUB_LOOKUP_NAME: &str = "Jirafales";

/// Name returned for every created customer.
pub const STUB_CREATED_NAME: &str = "Raphael";

#[derive(Debug, Default, Clone, Copy)]
pub struct StubStore;

impl StubStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CustomerStore for StubStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Customer> {
        tracing::debug!(%id, "stub lookup");
        Ok(Customer::new(id, STUB_LOOKUP_NAME))
    }

    async fn create(&self, _customer: CustomerDto) -> Result<Customer> {
        let id = Uuid::new_v4();
        tracing::debug!(%id, "stub create");
        Ok(Customer::new(id, STUB_CREATED_NAME))
    }

    async fn update(&self, id: Uuid, _customer: CustomerDto) -> Result<()> {
        tracing::debug!(%id, "stub update");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        tracing::debug!(%id, "stub delete");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_echoes_requested_id() {
        let store = StubStore::new();
        let id = Uuid::new_v4();

        let customer = store.get_by_id(id).await.unwrap();
        assert_eq!(customer.id, id);
        assert_eq!(customer.name, STUB_LOOKUP_NAME);
    }

    #[tokio::test]
    async fn create_ignores_caller_id_and_issues_fresh_ones() {
        let store = StubStore::new();
        let supplied = Uuid::new_v4();
        let dto = CustomerDto {
            id: Some(supplied),
            name: Some("Customer1".to_string()),
        };

        let first = store.create(dto.clone()).await.unwrap();
        let second = store.create(dto).await.unwrap();

        assert_ne!(first.id, supplied);
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, STUB_CREATED_NAME);
    }

    #[tokio::test]
    async fn update_and_delete_never_fail() {
        let store = StubStore::new();
        let id = Uuid::new_v4();

        store.update(id, CustomerDto::new("Customer1")).await.unwrap();
        store.delete(id).await.unwrap();
        // nothing persisted
        assert_eq!(store.get_by_id(id).await.unwrap().name, STUB_LOOKUP_NAME);
    }
}
