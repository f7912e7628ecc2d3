// src/lib.rs
//
// Show-more toggles and the fullscreen chart preview for the sales
// dashboard pages.

pub mod dom;
pub mod error;
pub mod overlay;
pub mod page;
pub mod truncation;
pub mod ui_config;

use error::UiError;
use page::{replace_bindings, PageBindings};
use std::cell::RefCell;
use std::sync::Once;
use truncation::toggle_by_id;
use ui_config::UiConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use truncation::TruncationState;

thread_local! {
    static PAGE: RefCell<Option<PageBindings>> = RefCell::new(None);
}

static LOGGER: Once = Once::new();

fn init_logger(level: log::Level) {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(level)));
}

fn window_and_document() -> Result<(Window, Document), UiError> {
    let window = web_sys::window().ok_or(UiError::NoDocument)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    Ok((window, document))
}

/// Toggle handler for markup such as `onclick="showMore('desc1', 'btn1')"`.
/// Uses the configuration of the last `initPage`, or the defaults.
#[wasm_bindgen(js_name = showMore)]
pub fn show_more(element_id: &str, button_id: &str) -> Result<(), JsValue> {
    let (_, document) = window_and_document()?;
    let config = PAGE.with(|page| {
        page.borrow()
            .as_ref()
            .map(|bindings| bindings.config().clone())
            .unwrap_or_default()
    });
    toggle_by_id(&document, element_id, button_id, &config)?;
    Ok(())
}

/// Bind the page once it has loaded. Calling it again replaces the earlier
/// bindings instead of stacking a second set of listeners.
///
/// The logger is created by the first call. Later calls can lower its
/// `log_level` but not raise it above the level the logger was created with.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = UiConfig::from_json(config_json.as_deref().unwrap_or_default())?;
    init_logger(config.log_level());
    log::set_max_level(config.log_level().to_level_filter());
    install(config)?;
    Ok(())
}

/// Detach everything `initPage` attached.
#[wasm_bindgen(js_name = disposePage)]
pub fn dispose_page() {
    if PAGE.with(|page| page.borrow_mut().take()).is_some() {
        log::info!("Page interactions disposed");
    }
}

pub fn install(config: UiConfig) -> Result<(), UiError> {
    let (window, document) = window_and_document()?;

    let replaced = PAGE.with(|page| {
        replace_bindings(page, || PageBindings::install(&window, &document, config))
    })?;
    if replaced {
        log::warn!("initPage called again, earlier bindings replaced");
    }
    Ok(())
}
