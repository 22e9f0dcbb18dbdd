//! Bills page controller.
//!
//! Loads the signed-in employee's bills from the store, orders them by date
//! and turns them into display rows. A bill whose date cannot be formatted is
//! logged and kept with its raw date; a store failure is handed back to the
//! caller untouched so the page can show it in the error banner.

use serde::{Deserialize, Serialize};
use shared::{Bill, BillView};
use std::cmp::Ordering;
use tracing::{debug, error};

use super::container::ContainerConfig;
use super::date_format::{format_date, format_status, parse_iso_date};
use super::routes::Route;
use crate::error::StoreError;
use crate::io::EyeIcon;

/// Order of the bills list, by date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first
    #[default]
    Descending,
    /// Oldest first
    Ascending,
}

impl SortOrder {
    /// Compares bills by calendar date.
    ///
    /// Bills with an unreadable date go last in either order and are compared
    /// by their raw strings among themselves.
    pub fn compare(self, a: &Bill, b: &Bill) -> Ordering {
        match (parse_iso_date(&a.date), parse_iso_date(&b.date)) {
            (Ok(a_date), Ok(b_date)) => self.apply(a_date.cmp(&b_date)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.apply(a.date.cmp(&b.date)),
        }
    }

    fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortOrder::Descending => ascending.reverse(),
            SortOrder::Ascending => ascending,
        }
    }
}

pub struct BillsController {
    config: ContainerConfig,
    sort_order: SortOrder,
    eye_icons: Vec<EyeIcon>,
}

impl BillsController {
    pub fn new(config: ContainerConfig) -> Self {
        Self::with_sort_order(config, SortOrder::default())
    }

    /// Build the controller and hook up every eye icon on the page
    pub fn with_sort_order(config: ContainerConfig, sort_order: SortOrder) -> Self {
        let eye_icons = config.document.eye_icons().unwrap_or_default();
        debug!("Attached preview handlers to {} eye icons", eye_icons.len());

        Self {
            config,
            sort_order,
            eye_icons,
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn eye_icons(&self) -> &[EyeIcon] {
        &self.eye_icons
    }

    /// Dispatch a click on the eye icon at `index`; returns false when there is none
    pub fn click_eye_icon(&self, index: usize) -> bool {
        match self.eye_icons.get(index) {
            Some(icon) => {
                self.handle_click_icon_eye(icon);
                true
            }
            None => false,
        }
    }

    /// Open the receipt preview for a bill
    pub fn handle_click_icon_eye(&self, icon: &EyeIcon) {
        self.config.modal.show(&icon.bill_url);
    }

    pub fn handle_click_new_bill(&self) {
        self.config.navigate(Route::NewBill.path());
    }

    /// Fetch, sort and format the bills.
    ///
    /// Returns `Ok(None)` when no store is configured.
    pub async fn get_bills(&self) -> Result<Option<Vec<BillView>>, StoreError> {
        let Some(store) = &self.config.store else {
            return Ok(None);
        };

        let mut bills = store.list().await.map_err(|e| {
            error!("Failed to load bills: {}", e);
            e
        })?;
        debug!("Loaded {} bills", bills.len());

        // Stable, so bills on the same day keep store order
        let sort_order = self.sort_order;
        bills.sort_by(|a, b| sort_order.compare(a, b));

        let views = bills.into_iter().map(|bill| self.format_bill(bill)).collect();
        Ok(Some(views))
    }

    fn format_bill(&self, mut bill: Bill) -> BillView {
        match format_date(&bill.date) {
            Ok(formatted) => bill.date = formatted,
            Err(e) => self.config.console.log_format_failure(&e, &bill),
        }
        let status_label = format_status(bill.status).to_string();
        BillView { bill, status_label }
    }
}
