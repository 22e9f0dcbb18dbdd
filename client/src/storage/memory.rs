//! # In-memory storage
//!
//! `MemoryBillsStore` stands in for the remote bills API and
//! `MemoryKeyValueStore` for the browser's local storage. Both are cheap to
//! clone and share their state between clones.

use async_trait::async_trait;
use shared::{Bill, BillUpdate, FileUpload, UploadReceipt};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use super::traits::{BillsStore, KeyValueStore};
use crate::error::StoreError;

#[derive(Debug, Clone)]
struct StoredUpload {
    file_url: String,
    file_name: String,
    email: Option<String>,
}

#[derive(Debug, Default)]
struct BillsState {
    bills: Vec<Bill>,
    uploads: HashMap<String, StoredUpload>,
}

/// Bills store kept entirely in memory
#[derive(Clone)]
pub struct MemoryBillsStore {
    state: Arc<tokio::sync::RwLock<BillsState>>,
    base_url: String,
}

impl MemoryBillsStore {
    pub fn new() -> Self {
        Self::with_bills(Vec::new())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            state: Arc::new(tokio::sync::RwLock::new(BillsState {
                bills,
                uploads: HashMap::new(),
            })),
            base_url: "memory://receipts".to_string(),
        }
    }

    /// Look up a stored bill by id
    pub async fn get(&self, id: &str) -> Option<Bill> {
        let state = self.state.read().await;
        state.bills.iter().find(|b| b.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.bills.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Receipts uploaded but not yet attached to a bill
    pub async fn pending_uploads(&self) -> usize {
        self.state.read().await.uploads.len()
    }
}

impl Default for MemoryBillsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillsStore for MemoryBillsStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let state = self.state.read().await;
        debug!("Listing {} bills", state.bills.len());
        Ok(state.bills.clone())
    }

    async fn create(&self, upload: FileUpload) -> Result<UploadReceipt, StoreError> {
        let key = Uuid::new_v4().to_string();
        let file_url = format!("{}/{}/{}", self.base_url, key, upload.file.name);

        let mut state = self.state.write().await;
        if let Some(previous) = &upload.replaces {
            if state.uploads.remove(previous).is_some() {
                debug!("Dropped superseded upload {}", previous);
            }
        }
        state.uploads.insert(
            key.clone(),
            StoredUpload {
                file_url: file_url.clone(),
                file_name: upload.file.name.clone(),
                email: upload.email,
            },
        );
        info!("Stored receipt {} under key {}", upload.file.name, key);

        Ok(UploadReceipt { file_url, key })
    }

    async fn update(&self, update: BillUpdate) -> Result<Bill, StoreError> {
        let mut state = self.state.write().await;
        let mut bill = update.data;

        let id = match update.selector {
            Some(selector) => selector,
            None => {
                bill.id = Uuid::new_v4().to_string();
                state.bills.push(bill.clone());
                info!("Created bill {} without receipt", bill.id);
                return Ok(bill);
            }
        };
        bill.id = id.clone();

        if let Some(upload) = state.uploads.remove(&id) {
            bill.file_url.get_or_insert(upload.file_url);
            bill.file_name.get_or_insert(upload.file_name);
            if bill.email.is_none() {
                bill.email = upload.email;
            }
            state.bills.push(bill.clone());
            info!("Created bill {}", id);
            return Ok(bill);
        }

        match state.bills.iter_mut().find(|b| b.id == id) {
            Some(existing) => {
                *existing = bill.clone();
                info!("Updated bill {}", id);
                Ok(bill)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

/// Local storage kept in a map
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.items.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.items.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.remove(key);
    }

    fn clear(&self) {
        let mut items = self.items.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BillStatus, SelectedFile};

    fn draft_bill(name: &str) -> Bill {
        Bill {
            id: String::new(),
            date: "2023-12-08".to_string(),
            status: BillStatus::Pending,
            amount: 250.0,
            expense_type: "Transports".to_string(),
            name: name.to_string(),
            file_url: None,
            file_name: None,
            email: None,
            vat: Some("20".to_string()),
            pct: Some(20),
            commentary: None,
            comment_admin: None,
        }
    }

    #[tokio::test]
    async fn test_upload_then_update_creates_bill() {
        let store = MemoryBillsStore::new();
        let receipt = store
            .create(FileUpload {
                file: SelectedFile::new("test.png", "image/png"),
                email: Some("john@example.com".to_string()),
                replaces: None,
            })
            .await
            .unwrap();
        assert!(receipt.file_url.ends_with("/test.png"));

        let saved = store
            .update(BillUpdate {
                selector: Some(receipt.key.clone()),
                data: draft_bill("Train Paris-Lyon"),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, receipt.key);
        assert_eq!(saved.file_url.as_deref(), Some(receipt.file_url.as_str()));
        assert_eq!(saved.file_name.as_deref(), Some("test.png"));
        assert_eq!(saved.email.as_deref(), Some("john@example.com"));
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&receipt.key).await, Some(saved));
    }

    #[tokio::test]
    async fn test_new_upload_drops_the_one_it_replaces() {
        let store = MemoryBillsStore::new();
        let first = store
            .create(FileUpload {
                file: SelectedFile::new("a.png", "image/png"),
                email: None,
                replaces: None,
            })
            .await
            .unwrap();
        let second = store
            .create(FileUpload {
                file: SelectedFile::new("b.png", "image/png"),
                email: None,
                replaces: Some(first.key.clone()),
            })
            .await
            .unwrap();

        assert_eq!(store.pending_uploads().await, 1);

        let stale = store
            .update(BillUpdate { selector: Some(first.key.clone()), data: draft_bill("a") })
            .await;
        assert_eq!(stale, Err(StoreError::NotFound(first.key)));

        store
            .update(BillUpdate { selector: Some(second.key), data: draft_bill("b") })
            .await
            .unwrap();
        assert_eq!(store.pending_uploads().await, 0);
    }

    #[tokio::test]
    async fn test_update_existing_bill_replaces_it() {
        let mut existing = draft_bill("old");
        existing.id = "bill-1".to_string();
        let store = MemoryBillsStore::with_bills(vec![existing]);

        let mut changed = draft_bill("new");
        changed.status = BillStatus::Accepted;
        store
            .update(BillUpdate { selector: Some("bill-1".to_string()), data: changed })
            .await
            .unwrap();

        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].name, "new");
        assert_eq!(bills[0].status, BillStatus::Accepted);
    }

    #[tokio::test]
    async fn test_update_unknown_selector_is_not_found() {
        let store = MemoryBillsStore::new();
        let result = store
            .update(BillUpdate { selector: Some("missing".to_string()), data: draft_bill("x") })
            .await;
        assert_eq!(result, Err(StoreError::NotFound("missing".to_string())));
    }

    #[tokio::test]
    async fn test_update_without_selector_assigns_id() {
        let store = MemoryBillsStore::new();
        let saved = store
            .update(BillUpdate { selector: None, data: draft_bill("no receipt") })
            .await
            .unwrap();
        assert!(!saved.id.is_empty());
        assert!(!store.is_empty().await);
    }

    #[test]
    fn test_key_value_store_behaves_like_local_storage() {
        let storage = MemoryKeyValueStore::new();
        assert_eq!(storage.get_item("user"), None);

        storage.set_item("user", r#"{"type":"Employee"}"#);
        let clone = storage.clone();
        assert_eq!(clone.get_item("user").as_deref(), Some(r#"{"type":"Employee"}"#));

        clone.remove_item("user");
        assert_eq!(storage.get_item("user"), None);

        storage.set_item("a", "1");
        storage.set_item("b", "2");
        storage.clear();
        assert_eq!(storage.get_item("a"), None);
    }
}
