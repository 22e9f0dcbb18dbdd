//! # IO Module
//!
//! The page-facing side of the client: capabilities injected into the
//! controllers and the plain-text rendering used by the `billed` binary.

pub mod render;
pub mod view;

pub use render::{render_bills, render_error, RenderedPage};
pub use view::{
    Alert, Console, Document, EmptyDocument, EyeIcon, Modal, NavigateFn, TracingAlert,
    TracingConsole, TracingModal,
};
