//! Capabilities the controllers need from the page.
//!
//! Each one is a small trait so the browser, the terminal demo and the tests
//! can provide their own implementation. The `Tracing*` types are the
//! defaults: they turn every interaction into a tracing event.

use shared::Bill;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{FormatError, StoreError};

/// Navigation callback, called with a route path such as `#employee/bills`
pub type NavigateFn = Arc<dyn Fn(&str) + Send + Sync>;

/// An "eye" icon rendered next to a bill, pointing at its receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EyeIcon {
    pub bill_url: String,
}

impl EyeIcon {
    pub fn new(bill_url: impl Into<String>) -> Self {
        Self { bill_url: bill_url.into() }
    }
}

/// Read access to the rendered page
pub trait Document: Send + Sync {
    /// Every eye icon on the page, `None` when the page has none
    fn eye_icons(&self) -> Option<Vec<EyeIcon>>;
}

/// Receipt preview dialog
pub trait Modal: Send + Sync {
    fn show(&self, bill_url: &str);
}

/// Blocking message box shown to the user
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Diagnostic output of the controllers
pub trait Console: Send + Sync {
    /// A bill whose date could not be formatted; logged as `error, "for", bill`
    fn log_format_failure(&self, error: &FormatError, bill: &Bill);

    fn error(&self, error: &StoreError);
}

/// A page with no eye icons
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDocument;

impl Document for EmptyDocument {
    fn eye_icons(&self) -> Option<Vec<EyeIcon>> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingModal;

impl Modal for TracingModal {
    fn show(&self, bill_url: &str) {
        info!(bill_url, "Showing receipt preview");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlert;

impl Alert for TracingAlert {
    fn alert(&self, message: &str) {
        warn!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log_format_failure(&self, error: &FormatError, bill: &Bill) {
        warn!(bill_id = %bill.id, "{} for {:?}", error, bill);
    }

    fn error(&self, error: &StoreError) {
        error!("{}", error);
    }
}
