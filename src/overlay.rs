// src/overlay.rs
use crate::dom::{query_all, typed_element_by_id, Overlay};
use crate::error::UiError;
use crate::ui_config::UiConfig;
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

/// The `#fullscreen` container and the `#fullscreenImg` inside it.
pub struct FullscreenOverlay {
    container: HtmlElement,
    image: HtmlImageElement,
}

impl FullscreenOverlay {
    pub fn from_document(document: &Document, config: &UiConfig) -> Result<Self, UiError> {
        let container =
            typed_element_by_id::<HtmlElement>(document, &config.overlay_id, "HTMLElement")?;
        let image = typed_element_by_id::<HtmlImageElement>(
            document,
            &config.overlay_image_id,
            "HTMLImageElement",
        )?;
        Ok(Self { container, image })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn set_display(&self, value: &str) -> Result<(), UiError> {
        self.container
            .style()
            .set_property("display", value)
            .map_err(UiError::dom)
    }
}

impl Overlay for FullscreenOverlay {
    fn show_image(&self, src: &str) -> Result<(), UiError> {
        self.image.set_src(src);
        self.set_display("flex")
    }

    fn hide(&self) -> Result<(), UiError> {
        self.set_display("none")
    }

    fn is_visible(&self) -> bool {
        self.container
            .style()
            .get_property_value("display")
            .map(|value| value == "flex")
            .unwrap_or(false)
    }
}

pub fn open_with<O: Overlay + ?Sized>(overlay: &O, src: &str) -> Result<(), UiError> {
    overlay.show_image(src)?;
    log::debug!("Fullscreen overlay opened on {}", src);
    Ok(())
}

pub fn dismiss<O: Overlay + ?Sized>(overlay: &O) -> Result<(), UiError> {
    overlay.hide()?;
    log::debug!("Fullscreen overlay dismissed");
    Ok(())
}

/// Close a visible overlay on `Escape`. Returns whether it was closed.
pub fn dismiss_on_key<O: Overlay + ?Sized>(overlay: &O, key: &str) -> Result<bool, UiError> {
    if key != "Escape" || !overlay.is_visible() {
        return Ok(false);
    }
    dismiss(overlay)?;
    Ok(true)
}

/// Listeners registered by [`bind_image_overlay`]. Dropping this value
/// unregisters all of them.
pub struct OverlayBindings {
    listeners: Vec<EventListener>,
    thumbnails: usize,
}

impl OverlayBindings {
    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Thumbnail(usize),
    OverlayContainer,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Open,
    Dismiss,
    DismissOnEscape,
}

impl OverlayAction {
    /// `detail` is the thumbnail source for `Open` and the key name for
    /// `DismissOnEscape`; `Dismiss` ignores it.
    pub fn apply<O: Overlay + ?Sized>(self, overlay: &O, detail: &str) -> Result<(), UiError> {
        match self {
            OverlayAction::Open => open_with(overlay, detail),
            OverlayAction::Dismiss => dismiss(overlay),
            OverlayAction::DismissOnEscape => dismiss_on_key(overlay, detail).map(|_| ()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerSpec {
    pub target: ListenerTarget,
    pub event: &'static str,
    pub action: OverlayAction,
}

/// The listeners [`bind_image_overlay`] registers for `thumbnails` chart images.
pub fn listener_plan(thumbnails: usize, config: &UiConfig) -> Vec<ListenerSpec> {
    let mut plan: Vec<ListenerSpec> = (0..thumbnails)
        .map(|index| ListenerSpec {
            target: ListenerTarget::Thumbnail(index),
            event: "click",
            action: OverlayAction::Open,
        })
        .collect();

    plan.push(ListenerSpec {
        target: ListenerTarget::OverlayContainer,
        event: "click",
        action: OverlayAction::Dismiss,
    });

    if config.dismiss_on_escape {
        plan.push(ListenerSpec {
            target: ListenerTarget::Document,
            event: "keydown",
            action: OverlayAction::DismissOnEscape,
        });
    }

    plan
}

/// Wire every chart thumbnail to open the fullscreen overlay and the
/// overlay itself to close on click.
pub fn bind_image_overlay(
    document: &Document,
    config: &UiConfig,
) -> Result<OverlayBindings, UiError> {
    let overlay = Rc::new(FullscreenOverlay::from_document(document, config)?);
    let thumbnails: Vec<HtmlImageElement> =
        query_all(document, &config.chart_image_selector())?;

    if thumbnails.is_empty() {
        log::debug!("No thumbnails match {}", config.chart_image_selector());
    }

    let listeners = listener_plan(thumbnails.len(), config)
        .into_iter()
        .map(|spec| {
            let thumbnail = match spec.target {
                ListenerTarget::Thumbnail(index) => Some(thumbnails[index].clone()),
                _ => None,
            };
            let target: EventTarget = match (&thumbnail, spec.target) {
                (Some(image), _) => image.clone().into(),
                (None, ListenerTarget::Document) => document.clone().into(),
                (None, _) => overlay.container().clone().into(),
            };

            let overlay = overlay.clone();
            EventListener::new(&target, spec.event, move |event| {
                let detail = match (&thumbnail, event.dyn_ref::<KeyboardEvent>()) {
                    (Some(image), _) => image.src(),
                    (None, Some(keyboard_event)) => keyboard_event.key(),
                    (None, None) => String::new(),
                };
                if let Err(e) = spec.action.apply(&*overlay, &detail) {
                    log::error!("Fullscreen overlay {:?} failed: {}", spec.action, e);
                }
            })
        })
        .collect();

    Ok(OverlayBindings {
        listeners,
        thumbnails: thumbnails.len(),
    })
}
