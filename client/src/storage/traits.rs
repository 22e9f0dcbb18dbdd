//! # Storage Traits
//!
//! The controllers only see these traits. The remote bills API and the
//! browser's local storage are both injected behind them, so tests and the
//! demo binary can swap in the in-memory implementations.

use async_trait::async_trait;
use shared::{Bill, BillUpdate, FileUpload, UploadReceipt};

use crate::error::StoreError;

/// Remote persistence API for bills
#[async_trait]
pub trait BillsStore: Send + Sync {
    /// Every bill visible to the signed-in user, in store order
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt and reserve a bill id for it
    async fn create(&self, upload: FileUpload) -> Result<UploadReceipt, StoreError>;

    /// Write the completed bill
    async fn update(&self, update: BillUpdate) -> Result<Bill, StoreError>;
}

/// String key-value storage with the semantics of the browser's `localStorage`
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn remove_item(&self, key: &str);

    fn clear(&self);
}
