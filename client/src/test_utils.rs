//! Recording test doubles for the controller dependencies.

use async_trait::async_trait;
use shared::{Bill, BillStatus, BillUpdate, FileUpload, UploadReceipt};
use std::sync::{Arc, Mutex};

use crate::domain::ContainerConfig;
use crate::error::{FormatError, StoreError};
use crate::io::{Alert, Console, Document, EyeIcon, Modal, NavigateFn};
use crate::storage::BillsStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(FileUpload),
    Update(BillUpdate),
}

/// Bills store with canned answers that records every call
pub struct ScriptedStore {
    calls: Mutex<Vec<StoreCall>>,
    list_result: Result<Vec<Bill>, StoreError>,
    create_result: Result<UploadReceipt, StoreError>,
    update_error: Option<StoreError>,
}

impl Default for ScriptedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list_result: Ok(Vec::new()),
            create_result: Ok(UploadReceipt {
                file_url: "testUrl".to_string(),
                key: "testKey".to_string(),
            }),
            update_error: None,
        }
    }

    pub fn listing(mut self, bills: Vec<Bill>) -> Self {
        self.list_result = Ok(bills);
        self
    }

    pub fn failing_list(mut self, error: StoreError) -> Self {
        self.list_result = Err(error);
        self
    }

    pub fn failing_create(mut self, error: StoreError) -> Self {
        self.create_result = Err(error);
        self
    }

    pub fn failing_update(mut self, error: StoreError) -> Self {
        self.update_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<BillUpdate> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Update(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BillsStore for ScriptedStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.record(StoreCall::List);
        self.list_result.clone()
    }

    async fn create(&self, upload: FileUpload) -> Result<UploadReceipt, StoreError> {
        self.record(StoreCall::Create(upload));
        self.create_result.clone()
    }

    async fn update(&self, update: BillUpdate) -> Result<Bill, StoreError> {
        self.record(StoreCall::Update(update.clone()));
        match &self.update_error {
            Some(error) => Err(error.clone()),
            None => {
                let mut bill = update.data;
                bill.id = update.selector.unwrap_or_else(|| "generated".to_string());
                Ok(bill)
            }
        }
    }
}

/// Page exposing a fixed set of eye icons
pub struct FakeDocument {
    icons: Option<Vec<EyeIcon>>,
}

impl FakeDocument {
    pub fn with_icons(urls: &[&str]) -> Self {
        Self {
            icons: Some(urls.iter().map(|url| EyeIcon::new(*url)).collect()),
        }
    }

    pub fn without_icons() -> Self {
        Self { icons: None }
    }
}

impl Document for FakeDocument {
    fn eye_icons(&self) -> Option<Vec<EyeIcon>> {
        self.icons.clone()
    }
}

#[derive(Default)]
pub struct RecordingModal {
    shown: Mutex<Vec<String>>,
}

impl RecordingModal {
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl Modal for RecordingModal {
    fn show(&self, bill_url: &str) {
        self.shown.lock().unwrap().push(bill_url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// One `console.log(error, "for", bill)` style entry
#[derive(Debug, Clone, PartialEq)]
pub struct FormatFailureLog {
    pub error: FormatError,
    pub separator: &'static str,
    pub bill: Bill,
}

#[derive(Default)]
pub struct RecordingConsole {
    format_failures: Mutex<Vec<FormatFailureLog>>,
    errors: Mutex<Vec<StoreError>>,
}

impl RecordingConsole {
    pub fn format_failures(&self) -> Vec<FormatFailureLog> {
        self.format_failures.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<StoreError> {
        self.errors.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn log_format_failure(&self, error: &FormatError, bill: &Bill) {
        self.format_failures.lock().unwrap().push(FormatFailureLog {
            error: error.clone(),
            separator: "for",
            bill: bill.clone(),
        });
    }

    fn error(&self, error: &StoreError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

/// Records every path passed to the navigation callback
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn callback(&self) -> NavigateFn {
        let paths = Arc::clone(&self.paths);
        Arc::new(move |path: &str| paths.lock().unwrap().push(path.to_string()))
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// All doubles wired into one `ContainerConfig`
pub struct TestHarness {
    pub navigator: RecordingNavigator,
    pub modal: Arc<RecordingModal>,
    pub alert: Arc<RecordingAlert>,
    pub console: Arc<RecordingConsole>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            navigator: RecordingNavigator::default(),
            modal: Arc::new(RecordingModal::default()),
            alert: Arc::new(RecordingAlert::default()),
            console: Arc::new(RecordingConsole::default()),
        }
    }

    pub fn config(&self, document: Arc<dyn Document>) -> ContainerConfig {
        ContainerConfig::new(document, self.navigator.callback())
            .with_modal(self.modal.clone())
            .with_alert(self.alert.clone())
            .with_console(self.console.clone())
    }
}

pub fn create_test_bill(
    id: &str,
    date: &str,
    status: BillStatus,
    amount: f64,
    expense_type: &str,
    name: &str,
) -> Bill {
    Bill {
        id: id.to_string(),
        date: date.to_string(),
        status,
        amount,
        expense_type: expense_type.to_string(),
        name: name.to_string(),
        file_url: None,
        file_name: None,
        email: None,
        vat: None,
        pct: None,
        commentary: None,
        comment_admin: None,
    }
}
