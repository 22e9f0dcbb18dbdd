//! New Bill form controller.
//!
//! One controller lives for one form session. Picking a receipt validates it
//! and uploads it right away through `store.create`; submitting writes the
//! completed bill with `store.update` and goes back to the bills list.

use shared::{Bill, BillStatus, BillUpdate, FileUpload, SelectedFile, User};
use tracing::{debug, info, warn};

use super::container::ContainerConfig;
use super::file_validation::{FileValidator, ValidationResult};
use super::routes::Route;

const USER_KEY: &str = "user";
const DEFAULT_PCT: u32 = 20;

/// Where the form session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    FileAttached,
    FileRejected,
    Submitting,
    Created,
    Failed,
}

/// The bill being composed, as typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    /// `YYYY-MM-DD` from the date picker
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
    /// Value of the file input; cleared when the file is rejected
    pub file_input: String,
    pub file: Option<SelectedFile>,
    /// Bill id reserved by the receipt upload
    pub bill_id: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

pub struct NewBillController {
    config: ContainerConfig,
    validator: FileValidator,
    draft: FormDraft,
    state: FormState,
}

impl NewBillController {
    pub fn new(config: ContainerConfig) -> Self {
        Self::with_validator(config, FileValidator::new())
    }

    pub fn with_validator(config: ContainerConfig, validator: FileValidator) -> Self {
        Self {
            config,
            validator,
            draft: FormDraft::default(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Form fields are edited in place
    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    /// Handle a file picked in the receipt input.
    ///
    /// A rejected file raises one alert and clears the input. An accepted one
    /// is uploaded immediately when a store is configured. Either way the
    /// previous upload no longer belongs to the draft.
    pub async fn handle_change_file(&mut self, file: SelectedFile) -> FormState {
        let previous_key = self.clear_upload();

        if let ValidationResult::Fail { reason } = self.validator.validate_file(&file) {
            debug!("Rejected receipt {}: {}", file.name, reason);
            self.config.alert.alert(&reason);
            self.draft.file_input.clear();
            self.draft.file = None;
            self.state = FormState::FileRejected;
            return self.state;
        }

        self.draft.file_input = file.path.clone();
        self.draft.file = Some(file.clone());
        self.state = FormState::FileAttached;

        let Some(store) = &self.config.store else {
            return self.state;
        };

        let upload = FileUpload {
            file: file.clone(),
            email: self.user_email(),
            replaces: previous_key,
        };
        match store.create(upload).await {
            Ok(receipt) => {
                info!("Uploaded receipt {} as bill {}", file.name, receipt.key);
                self.draft.bill_id = Some(receipt.key);
                self.draft.file_url = Some(receipt.file_url);
                self.draft.file_name = Some(file.name);
            }
            Err(e) => {
                self.config.console.error(&e);
                self.state = FormState::Failed;
            }
        }
        self.state
    }

    /// Submit the form.
    ///
    /// Without a store nothing is sent and the form stays as it is.
    pub async fn handle_submit(&mut self) -> FormState {
        let bill = self.assemble_bill();

        let Some(store) = &self.config.store else {
            debug!("No store configured, skipping bill update");
            return self.state;
        };

        self.state = FormState::Submitting;
        let update = BillUpdate {
            selector: self.draft.bill_id.clone(),
            data: bill,
        };
        match store.update(update).await {
            Ok(saved) => {
                info!("Submitted bill {}", saved.id);
                self.state = FormState::Created;
                self.config.navigate(Route::Bills.path());
            }
            Err(e) => {
                self.config.console.error(&e);
                self.state = FormState::Failed;
            }
        }
        self.state
    }

    /// Build the bill from the current form values
    pub fn assemble_bill(&self) -> Bill {
        let draft = &self.draft;
        Bill {
            id: draft.bill_id.clone().unwrap_or_default(),
            date: draft.date.clone(),
            status: BillStatus::Pending,
            amount: parse_leading_int(&draft.amount).unwrap_or(0) as f64,
            expense_type: draft.expense_type.clone(),
            name: draft.name.clone(),
            file_url: draft.file_url.clone(),
            file_name: draft.file_name.clone(),
            email: self.user_email(),
            vat: Some(draft.vat.clone()),
            pct: Some(
                parse_leading_int(&draft.pct)
                    .and_then(|pct| u32::try_from(pct).ok())
                    .filter(|pct| *pct != 0)
                    .unwrap_or(DEFAULT_PCT),
            ),
            commentary: Some(draft.commentary.clone()),
            comment_admin: None,
        }
    }

    /// Forget the current upload reference, returning its key
    fn clear_upload(&mut self) -> Option<String> {
        self.draft.file_url = None;
        self.draft.file_name = None;
        self.draft.bill_id.take()
    }

    fn user_email(&self) -> Option<String> {
        let raw = self.config.local_storage.as_ref()?.get_item(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => user.email,
            Err(e) => {
                warn!("Ignoring unreadable user entry: {}", e);
                None
            }
        }
    }
}

/// Integer prefix of a form value: `"250"` → 250, `"12.5"` → 12, `"abc"` → None
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
