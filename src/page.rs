// src/page.rs
use crate::error::UiError;
use crate::overlay::{bind_image_overlay, OverlayBindings};
use crate::truncation::toggle_by_id;
use crate::ui_config::UiConfig;
use js_sys::Reflect;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Everything `initPage` attaches to a page. Dropping it detaches it all.
pub struct PageBindings {
    config: UiConfig,
    _overlay: Option<OverlayBindings>,
    _entry_point: Option<GlobalEntryPoint>,
}

impl PageBindings {
    /// Publish the global toggle entry point and bind the fullscreen overlay.
    ///
    /// Pages without the overlay markup (a publishers list, say) still get
    /// a working toggle: a missing overlay element only disables the preview.
    pub fn install(
        window: &Window,
        document: &Document,
        config: UiConfig,
    ) -> Result<Self, UiError> {
        let entry_point = if config.global_entry_point.is_empty() {
            None
        } else {
            Some(GlobalEntryPoint::publish(window, &config)?)
        };

        let overlay = tolerate_missing_overlay(bind_image_overlay(document, &config))?;

        match &overlay {
            Some(bindings) => log::info!(
                "Page interactions ready: {} chart thumbnail(s), {} listener(s)",
                bindings.thumbnail_count(),
                bindings.listener_count()
            ),
            None => log::info!("Page interactions ready without fullscreen preview"),
        }

        Ok(Self {
            config,
            _overlay: overlay,
            _entry_point: entry_point,
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }
}

/// Empty `slot`, dropping what it held, and only then build its replacement,
/// so the old listeners and global entry point are gone before new ones
/// register. Returns whether earlier bindings were replaced. If `build`
/// fails the slot is left empty.
pub(crate) fn replace_bindings<T, F>(slot: &RefCell<Option<T>>, build: F) -> Result<bool, UiError>
where
    F: FnOnce() -> Result<T, UiError>,
{
    let previous = slot.borrow_mut().take();
    let replaced = previous.is_some();
    drop(previous);

    let bindings = build()?;
    *slot.borrow_mut() = Some(bindings);
    Ok(replaced)
}

fn tolerate_missing_overlay(
    result: Result<OverlayBindings, UiError>,
) -> Result<Option<OverlayBindings>, UiError> {
    match result {
        Ok(bindings) => Ok(Some(bindings)),
        Err(UiError::ElementNotFound { id }) => {
            log::warn!("#{} not found, fullscreen preview disabled", id);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// `window.<name>(elementId, buttonId)`, callable from `onclick` markup.
struct GlobalEntryPoint {
    window: Window,
    name: String,
    _closure: Closure<dyn FnMut(String, String) -> Result<(), JsValue>>,
}

impl GlobalEntryPoint {
    fn publish(window: &Window, config: &UiConfig) -> Result<Self, UiError> {
        let toggle_config = config.clone();
        let closure = Closure::wrap(Box::new(move |element_id: String, button_id: String| {
            let document = gloo_utils::document();
            toggle_by_id(&document, &element_id, &button_id, &toggle_config)
                .map(|_| ())
                .map_err(JsValue::from)
        }) as Box<dyn FnMut(String, String) -> Result<(), JsValue>>);

        Reflect::set(
            window,
            &JsValue::from_str(&config.global_entry_point),
            closure.as_ref(),
        )
        .map_err(UiError::dom)?;

        Ok(Self {
            window: window.clone(),
            name: config.global_entry_point.clone(),
            _closure: closure,
        })
    }
}

impl Drop for GlobalEntryPoint {
    fn drop(&mut self) {
        if let Err(e) = Reflect::delete_property(&self.window, &JsValue::from_str(&self.name)) {
            log::error!("Failed to remove window.{}: {:?}", self.name, e);
        }
    }
}
