// src/truncation.rs
use crate::dom::{element_by_id, ElementSource, Labelled, Toggleable};
use crate::error::UiError;
use crate::ui_config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationState {
    Truncated,
    Expanded,
}

impl TruncationState {
    pub fn of<T: Toggleable + ?Sized>(element: &T, config: &UiConfig) -> Self {
        if element.has_class(&config.truncated_class) {
            TruncationState::Truncated
        } else {
            TruncationState::Expanded
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            TruncationState::Truncated => TruncationState::Expanded,
            TruncationState::Expanded => TruncationState::Truncated,
        }
    }

    /// Button text for this state: the action that leaves it.
    pub fn label(self, config: &UiConfig) -> &str {
        match self {
            TruncationState::Truncated => &config.show_more_label,
            TruncationState::Expanded => &config.show_less_label,
        }
    }
}

/// Flip `element` between truncated and expanded and relabel `button` to match.
pub fn toggle<T, L>(element: &T, button: &L, config: &UiConfig) -> Result<TruncationState, UiError>
where
    T: Toggleable + ?Sized,
    L: Labelled + ?Sized,
{
    let next = TruncationState::of(element, config).flipped();

    match next {
        TruncationState::Expanded => element.remove_class(&config.truncated_class)?,
        TruncationState::Truncated => element.add_class(&config.truncated_class)?,
    }
    button.set_label(next.label(config));

    Ok(next)
}

/// Resolve both ids before touching anything, then toggle.
pub fn toggle_by_id<S: ElementSource + ?Sized>(
    source: &S,
    element_id: &str,
    button_id: &str,
    config: &UiConfig,
) -> Result<TruncationState, UiError> {
    let element = element_by_id(source, element_id)?;
    let button = element_by_id(source, button_id)?;

    let state = toggle(&element, &button, config)?;
    log::debug!("#{} is now {:?}", element_id, state);
    Ok(state)
}
