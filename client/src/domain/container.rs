//! Dependencies handed to the page controllers.

use std::sync::Arc;

use crate::io::{
    Alert, Console, Document, Modal, NavigateFn, TracingAlert, TracingConsole, TracingModal,
};
use crate::storage::{BillsStore, KeyValueStore};

/// Everything a controller talks to outside itself.
///
/// `store` and `local_storage` are optional: without a store the controllers
/// skip every remote call.
#[derive(Clone)]
pub struct ContainerConfig {
    pub document: Arc<dyn Document>,
    pub on_navigate: NavigateFn,
    pub store: Option<Arc<dyn BillsStore>>,
    pub local_storage: Option<Arc<dyn KeyValueStore>>,
    pub modal: Arc<dyn Modal>,
    pub alert: Arc<dyn Alert>,
    pub console: Arc<dyn Console>,
}

impl ContainerConfig {
    pub fn new(document: Arc<dyn Document>, on_navigate: NavigateFn) -> Self {
        Self {
            document,
            on_navigate,
            store: None,
            local_storage: None,
            modal: Arc::new(TracingModal),
            alert: Arc::new(TracingAlert),
            console: Arc::new(TracingConsole),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn BillsStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_local_storage(mut self, local_storage: Arc<dyn KeyValueStore>) -> Self {
        self.local_storage = Some(local_storage);
        self
    }

    pub fn with_modal(mut self, modal: Arc<dyn Modal>) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_alert(mut self, alert: Arc<dyn Alert>) -> Self {
        self.alert = alert;
        self
    }

    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    pub(crate) fn navigate(&self, path: &str) {
        (self.on_navigate)(path);
    }
}
