// src/dom.rs
//
// Capability traits over the handful of DOM operations the handlers need,
// implemented for `web_sys` elements. Tests substitute in-memory doubles.

use crate::error::UiError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// An element whose state is carried by the presence of a style class.
pub trait Toggleable {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<(), UiError>;
    fn remove_class(&self, class: &str) -> Result<(), UiError>;
}

/// A control whose visible text can be rewritten.
pub trait Labelled {
    fn set_label(&self, text: &str);
}

/// A page-wide container that displays one enlarged image at a time.
pub trait Overlay {
    /// Point the enlarged image at `src`, then make the container visible.
    fn show_image(&self, src: &str) -> Result<(), UiError>;
    fn hide(&self) -> Result<(), UiError>;
    fn is_visible(&self) -> bool;
}

impl Toggleable for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), UiError> {
        self.class_list().add_1(class).map_err(UiError::dom)
    }

    fn remove_class(&self, class: &str) -> Result<(), UiError> {
        self.class_list().remove_1(class).map_err(UiError::dom)
    }
}

impl Labelled for Element {
    fn set_label(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Somewhere elements can be looked up by id.
pub trait ElementSource {
    type Element: Toggleable + Labelled;

    fn find(&self, id: &str) -> Option<Self::Element>;
}

impl ElementSource for Document {
    type Element = Element;

    fn find(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

pub fn element_by_id<S>(source: &S, id: &str) -> Result<S::Element, UiError>
where
    S: ElementSource + ?Sized,
{
    source.find(id).ok_or_else(|| UiError::not_found(id))
}

/// Look up `id` and cast it to the concrete element interface `T`.
pub fn typed_element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, UiError> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| UiError::UnexpectedElement {
            id: id.to_string(),
            expected,
        })
}

/// All nodes matching `selector` that are of type `T`; others are skipped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, UiError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| UiError::InvalidSelector {
            selector: selector.to_string(),
        })?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    /// Clones share state, like two handles to the same DOM node.
    #[derive(Default, Clone)]
    pub struct FakeElement {
        pub classes: Rc<RefCell<BTreeSet<String>>>,
        pub text: Rc<RefCell<String>>,
    }

    impl FakeElement {
        pub fn with_class(class: &str) -> Self {
            let element = Self::default();
            element.classes.borrow_mut().insert(class.to_string());
            element
        }

        pub fn with_text(text: &str) -> Self {
            let element = Self::default();
            *element.text.borrow_mut() = text.to_string();
            element
        }

        pub fn text(&self) -> String {
            self.text.borrow().clone()
        }
    }

    impl Toggleable for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn add_class(&self, class: &str) -> Result<(), UiError> {
            self.classes.borrow_mut().insert(class.to_string());
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<(), UiError> {
            self.classes.borrow_mut().remove(class);
            Ok(())
        }
    }

    impl Labelled for FakeElement {
        fn set_label(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }

    #[derive(Default)]
    pub struct FakePage {
        elements: HashMap<String, FakeElement>,
    }

    impl FakePage {
        pub fn with(mut self, id: &str, element: FakeElement) -> Self {
            self.elements.insert(id.to_string(), element);
            self
        }
    }

    impl ElementSource for FakePage {
        type Element = FakeElement;

        fn find(&self, id: &str) -> Option<FakeElement> {
            self.elements.get(id).cloned()
        }
    }

    /// Records the inline `display` value and image source like the real overlay.
    pub struct FakeOverlay {
        pub display: RefCell<String>,
        pub src: RefCell<String>,
        pub show_calls: Cell<usize>,
    }

    impl Default for FakeOverlay {
        fn default() -> Self {
            Self {
                display: RefCell::new("none".to_string()),
                src: RefCell::new(String::new()),
                show_calls: Cell::new(0),
            }
        }
    }

    impl Overlay for FakeOverlay {
        fn show_image(&self, src: &str) -> Result<(), UiError> {
            *self.src.borrow_mut() = src.to_string();
            *self.display.borrow_mut() = "flex".to_string();
            self.show_calls.set(self.show_calls.get() + 1);
            Ok(())
        }

        fn hide(&self) -> Result<(), UiError> {
            *self.display.borrow_mut() = "none".to_string();
            Ok(())
        }

        fn is_visible(&self) -> bool {
            *self.display.borrow() == "flex"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    #[test]
    fn test_fake_element_classes() {
        let element = FakeElement::with_class("truncated");
        assert!(element.has_class("truncated"));
        element.remove_class("truncated").unwrap();
        assert!(!element.has_class("truncated"));
        element.add_class("truncated").unwrap();
        element.add_class("truncated").unwrap();
        assert_eq!(element.classes.borrow().len(), 1);
    }

    #[test]
    fn test_element_by_id() {
        let page = FakePage::default().with("desc1", FakeElement::with_class("truncated"));

        let found = element_by_id(&page, "desc1").unwrap();
        found.remove_class("truncated").unwrap();
        assert!(!element_by_id(&page, "desc1").unwrap().has_class("truncated"));

        let missing = element_by_id(&page, "desc2");
        assert!(matches!(missing, Err(UiError::ElementNotFound { id }) if id == "desc2"));
    }

    #[test]
    fn test_fake_overlay_starts_hidden() {
        let overlay = FakeOverlay::default();
        assert!(!overlay.is_visible());
        overlay.show_image("/img/a.png").unwrap();
        assert!(overlay.is_visible());
        overlay.hide().unwrap();
        assert!(!overlay.is_visible());
        assert_eq!(*overlay.src.borrow(), "/img/a.png");
    }
}
