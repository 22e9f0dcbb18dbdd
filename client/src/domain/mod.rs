//! # Domain Module
//!
//! The employee pages' logic: the bills list and new bill controllers and the
//! formatting and validation helpers they rely on.

pub mod bills;
pub mod container;
pub mod date_format;
pub mod file_validation;
pub mod new_bill;
pub mod routes;

pub use bills::{BillsController, SortOrder};
pub use container::ContainerConfig;
pub use date_format::{format_date, format_status};
pub use file_validation::{FileValidator, ValidationResult};
pub use new_bill::{FormDraft, FormState, NewBillController};
pub use routes::Route;
