use serde::{Deserialize, Serialize};
use std::fmt;

/// An expense record submitted by an employee for reimbursement.
///
/// Field names on the wire follow the store's camelCase JSON (`fileUrl`,
/// `commentAdmin`, ...) and the expense category travels as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    /// ISO-8601 date (`YYYY-MM-DD`), replaced by its display form once formatted
    pub date: String,
    pub status: BillStatus,
    pub amount: f64,
    /// Free-text expense category ("Transports", "Hôtel et logement", ...)
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// Review state of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Accepted => write!(f, "accepted"),
            BillStatus::Refused => write!(f, "refused"),
        }
    }
}

/// A bill as handed to the list view: display date plus status label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    #[serde(flatten)]
    pub bill: Bill,
    pub status_label: String,
}

/// A receipt file picked in the New Bill form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    /// Local path as exposed by the file input
    pub path: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: format!("C:\\fakepath\\{}", name),
            name,
            mime_type: mime_type.into(),
        }
    }
}

/// Payload sent to the store's `create` call when a receipt is attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub file: SelectedFile,
    pub email: Option<String>,
    /// Key of an earlier pending upload from the same form, now superseded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces: Option<String>,
}

/// What the store hands back for an uploaded receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_url: String,
    /// Identifier of the bill reserved by the upload
    pub key: String,
}

/// Payload sent to the store's `update` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillUpdate {
    /// Id of the bill to update (the upload key); `None` lets the store pick one
    pub selector: Option<String>,
    pub data: Bill,
}

/// Signed-in user as persisted in local storage under `"user"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}
