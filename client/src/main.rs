use anyhow::{Context, Result};
use billed_client::domain::{BillsController, ContainerConfig, NewBillController, Route};
use billed_client::io::{render_bills, render_error, EmptyDocument, NavigateFn, RenderedPage};
use billed_client::storage::{
    fixtures, BillsStore, KeyValueStore, MemoryBillsStore, MemoryKeyValueStore,
};
use billed_client::{logging, ClientConfig, FormState};
use shared::{SelectedFile, User, UserType};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Load the bills page and print it
async fn show_bills_page(
    config: &ClientConfig,
    containers: &ContainerConfig,
) -> RenderedPage {
    let controller = BillsController::with_sort_order(containers.clone(), config.sort_order);
    let page = match controller.get_bills().await {
        Ok(Some(bills)) => render_bills(&bills),
        Ok(None) => render_bills(&[]),
        Err(e) => render_error(&e.to_string()),
    };
    println!("{}\n", page.text);
    page
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = ClientConfig::from_env().context("Failed to load client config")?;

    let seed = if config.seed_fixtures {
        fixtures::bills().context("Failed to parse bill fixtures")?
    } else {
        Vec::new()
    };
    info!("Starting with {} bills", seed.len());
    let store: Arc<dyn BillsStore> = Arc::new(MemoryBillsStore::with_bills(seed));

    let local_storage = Arc::new(MemoryKeyValueStore::new());
    let user = User {
        user_type: UserType::Employee,
        email: Some(config.demo_user_email.clone()),
    };
    local_storage.set_item("user", &serde_json::to_string(&user)?);

    let current_route = Arc::new(Mutex::new(Route::Bills));
    let on_navigate: NavigateFn = {
        let current_route = Arc::clone(&current_route);
        Arc::new(move |path: &str| {
            info!("Navigating to {:?}", path);
            if let Ok(mut route) = current_route.lock() {
                *route = Route::from_path(path);
            }
        })
    };

    let containers = ContainerConfig::new(Arc::new(EmptyDocument), on_navigate)
        .with_store(store)
        .with_local_storage(local_storage);

    // Bills page, then preview the first receipt through the rendered eye icons
    let page = show_bills_page(&config, &containers).await;
    let with_icons = ContainerConfig {
        document: Arc::new(page),
        ..containers.clone()
    };
    let bills_page = BillsController::with_sort_order(with_icons, config.sort_order);
    if !bills_page.click_eye_icon(0) {
        info!("No receipt to preview");
    }

    // New bill form
    bills_page.handle_click_new_bill();
    let mut new_bill =
        NewBillController::with_validator(containers.clone(), config.file_validator());
    {
        let draft = new_bill.draft_mut();
        draft.expense_type = "Transports".to_string();
        draft.name = "Train Paris-Lyon".to_string();
        draft.amount = "250".to_string();
        draft.date = chrono::Local::now().format("%Y-%m-%d").to_string();
        draft.vat = "20".to_string();
        draft.pct = "20".to_string();
        draft.commentary = "Voyage professionnel".to_string();
    }

    new_bill
        .handle_change_file(SelectedFile::new("notes.txt", "text/plain"))
        .await;
    new_bill
        .handle_change_file(SelectedFile::new("billet.png", "image/png"))
        .await;

    match new_bill.handle_submit().await {
        FormState::Created => info!("Bill submitted"),
        state => warn!("Bill not submitted, form is {:?}", state),
    }

    let route = current_route
        .lock()
        .map(|route| *route)
        .unwrap_or(Route::Bills);
    if route == Route::Bills {
        show_bills_page(&config, &containers).await;
    }

    Ok(())
}
