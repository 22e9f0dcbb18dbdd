//! Hash routes of the client and the layout icon each one highlights.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// Resolve a location hash; unknown paths fall back to the login page
    pub fn from_path(path: &str) -> Route {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Login)
    }

    /// Test id of the vertical layout icon highlighted on this page
    pub fn active_icon(self) -> Option<&'static str> {
        match self {
            Route::Bills => Some("icon-window"),
            Route::NewBill => Some("icon-mail"),
            Route::Login | Route::Dashboard => None,
        }
    }
}
