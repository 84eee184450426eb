//! The persistence boundary.
//!
//! `Catalog` is the accessor surface the handlers and the search orchestrator
//! read through; everything behind it is an external collaborator as far as
//! the core is concerned. `MemoryCatalog` is the in-process implementation:
//! a `DashMap` per entity type, no locks held across calls, last write wins
//! on racing updates.
//!
//! Snapshots come back created-descending (newest first) with the id as a
//! tiebreaker, so two identical reads of an unchanged store return identical
//! sequences.

use dashmap::DashMap;
use thiserror::Error;

use super::types::{Demand, Product, Record, Service};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence accessors, keyed by id. Reads return owned snapshots so no
/// map guard outlives a call.
pub trait Catalog: Send + Sync {
    fn products(&self) -> StoreResult<Vec<Product>>;
    fn product(&self, id: &str) -> StoreResult<Option<Product>>;
    fn put_product(&self, product: Product) -> StoreResult<()>;
    fn remove_product(&self, id: &str) -> StoreResult<Option<Product>>;

    fn services(&self) -> StoreResult<Vec<Service>>;
    fn service(&self, id: &str) -> StoreResult<Option<Service>>;
    fn put_service(&self, service: Service) -> StoreResult<()>;
    fn remove_service(&self, id: &str) -> StoreResult<Option<Service>>;

    fn demands(&self) -> StoreResult<Vec<Demand>>;
    fn demand(&self, id: &str) -> StoreResult<Option<Demand>>;
    fn put_demand(&self, demand: Demand) -> StoreResult<()>;
    fn remove_demand(&self, id: &str) -> StoreResult<Option<Demand>>;
}

pub type SharedCatalog = std::sync::Arc<dyn Catalog>;

struct Table<T: Record> {
    rows: DashMap<String, T>,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    fn put(&self, row: T) {
        self.rows.insert(row.id().to_string(), row);
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|r| r.value().clone())
    }

    fn remove(&self, id: &str) -> Option<T> {
        self.rows.remove(id).map(|(_, row)| row)
    }

    /// Owned snapshot in created-descending order, id-descending on ties.
    fn snapshot(&self) -> Vec<T> {
        let mut rows: Vec<T> = self.rows.iter().map(|r| r.value().clone()).collect();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(a.id()))
        });
        rows
    }
}

pub struct MemoryCatalog {
    products: Table<Product>,
    services: Table<Service>,
    demands: Table<Demand>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: Table::new(),
            services: Table::new(),
            demands: Table::new(),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for MemoryCatalog {
    fn products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.snapshot())
    }

    fn product(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.products.get(id))
    }

    fn put_product(&self, product: Product) -> StoreResult<()> {
        self.products.put(product);
        Ok(())
    }

    fn remove_product(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.products.remove(id))
    }

    fn services(&self) -> StoreResult<Vec<Service>> {
        Ok(self.services.snapshot())
    }

    fn service(&self, id: &str) -> StoreResult<Option<Service>> {
        Ok(self.services.get(id))
    }

    fn put_service(&self, service: Service) -> StoreResult<()> {
        self.services.put(service);
        Ok(())
    }

    fn remove_service(&self, id: &str) -> StoreResult<Option<Service>> {
        Ok(self.services.remove(id))
    }

    fn demands(&self) -> StoreResult<Vec<Demand>> {
        Ok(self.demands.snapshot())
    }

    fn demand(&self, id: &str) -> StoreResult<Option<Demand>> {
        Ok(self.demands.get(id))
    }

    fn put_demand(&self, demand: Demand) -> StoreResult<()> {
        self.demands.put(demand);
        Ok(())
    }

    fn remove_demand(&self, id: &str) -> StoreResult<Option<Demand>> {
        Ok(self.demands.remove(id))
    }
}
