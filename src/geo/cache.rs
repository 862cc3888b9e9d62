//! In-memory address cache
//!
//! Maps exact address strings (case- and whitespace-sensitive) to their
//! geocoded coordinates for the lifetime of one client. Entries are never
//! evicted. Concurrent writers for the same key store the same value, so
//! last write wins.

use crate::coord::Coordinate;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Address → coordinate cache owned by a single client
#[derive(Debug, Default)]
pub struct AddressCache {
    entries: RwLock<HashMap<String, Coordinate>>,
}

impl AddressCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an address by exact string match
    pub async fn get(&self, address: &str) -> Option<Coordinate> {
        self.entries.read().await.get(address).copied()
    }

    /// Insert or replace the coordinate for an address
    pub async fn insert(&self, address: impl Into<String>, coord: Coordinate) {
        self.entries.write().await.insert(address.into(), coord);
    }

    /// Number of cached addresses
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been cached yet
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
