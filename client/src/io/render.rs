//! Plain-text rendering of the bills page.
//!
//! The rendered page keeps the receipt URL of every row so it can act as the
//! `Document` the bills controller attaches its eye-icon handlers to.

use shared::BillView;

use super::view::{Document, EyeIcon};

/// A rendered page: its text plus the eye icons it contains
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedPage {
    pub text: String,
    pub eye_icons: Vec<EyeIcon>,
    pub error_message: Option<String>,
}

impl Document for RenderedPage {
    fn eye_icons(&self) -> Option<Vec<EyeIcon>> {
        if self.eye_icons.is_empty() {
            None
        } else {
            Some(self.eye_icons.clone())
        }
    }
}

/// Render the bills table. Rows without a receipt get no eye icon.
pub fn render_bills(bills: &[BillView]) -> RenderedPage {
    let mut lines = vec![
        "Mes notes de frais".to_string(),
        format!(
            "{:<22} | {:<28} | {:<10} | {:>10} | {:<10} | {}",
            "Type", "Nom", "Date", "Montant", "Statut", "Actions"
        ),
    ];
    let mut eye_icons = Vec::new();

    for view in bills {
        let bill = &view.bill;
        let action = match &bill.file_url {
            Some(url) => {
                eye_icons.push(EyeIcon::new(url.clone()));
                "[eye]"
            }
            None => "",
        };
        lines.push(format!(
            "{:<22} | {:<28} | {:<10} | {:>8} € | {:<10} | {}",
            bill.expense_type, bill.name, bill.date, bill.amount, view.status_label, action
        ));
    }

    if bills.is_empty() {
        lines.push("Aucune note de frais".to_string());
    }

    RenderedPage {
        text: lines.join("\n"),
        eye_icons,
        error_message: None,
    }
}

/// Render the page-level error banner shown when the bills cannot be loaded
pub fn render_error(message: &str) -> RenderedPage {
    RenderedPage {
        text: format!("Erreur\n{}", message),
        eye_icons: Vec::new(),
        error_message: Some(message.to_string()),
    }
}
