//! # Billed client
//!
//! Core of the employee expense-report client: the bills list and new bill
//! controllers, the store contracts they consume and in-memory stores to run
//! them without a backend.
//!
//! ```text
//! io (page capabilities, rendering)
//!     ↓
//! domain (controllers, formatting, validation)
//!     ↓
//! storage (bills store, local storage)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ClientConfig;
pub use domain::*;
pub use error::{ConfigError, FormatError, StoreError};
