//! In-memory customer store

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::types::{Customer, CustomerDto};
use crate::validation::{ValidationError, ViolationCode};
use crate::{Error, Result};

use super::CustomerStore;

/// Customer store backed by a concurrent map.
///
/// Honors the caller's name on create and update. Ids are always issued
/// here and never rewritten.
#[derive(Debug, Default)]
pub struct MemoryStore {
    customers: DashMap<Uuid, Customer>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

fn require_name(customer: CustomerDto) -> Result<String> {
    customer
        .name
        .ok_or_else(|| ValidationError::new("name", ViolationCode::Blank).into())
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Customer> {
        self.customers
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(Error::NotFound(id))
    }

    async fn create(&self, customer: CustomerDto) -> Result<Customer> {
        let name = require_name(customer)?;

        // issued ids are never reused
        let customer = loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(slot) = self.customers.entry(id) {
                let customer = Customer::new(id, name);
                slot.insert(customer.clone());
                break customer;
            }
        };

        tracing::info!(id = %customer.id, total = self.customers.len(), "Stored customer");
        Ok(customer)
    }

    async fn update(&self, id: Uuid, customer: CustomerDto) -> Result<()> {
        let name = require_name(customer)?;

        let mut entry = self.customers.get_mut(&id).ok_or(Error::NotFound(id))?;
        entry.name = name;

        tracing::info!(%id, "Updated customer");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        if self.customers.remove(&id).is_some() {
            tracing::info!(%id, "Deleted customer");
        } else {
            tracing::debug!(%id, "Delete of unknown customer ignored");
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
