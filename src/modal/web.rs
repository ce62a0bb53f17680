use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::error::ModalError;
use super::host::DialogHost;
use super::KeyPress;

pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), \
     input:not([disabled]):not([type=\"hidden\"]), select:not([disabled]), \
     [tabindex]:not([tabindex=\"-1\"])";

pub const LABEL_FIELD_ID: &str = "demoPlan";

impl From<&KeyboardEvent> for KeyPress {
    fn from(event: &KeyboardEvent) -> Self {
        KeyPress::from_key_name(&event.key(), event.shift_key())
    }
}

pub type KeyDispatch = Rc<dyn Fn(KeyboardEvent)>;

/// Keydown listener on the dialog container, removed on drop.
pub struct KeyTrapListener {
    target: Element,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Drop for KeyTrapListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}

pub struct WebDialogHost {
    document: Document,
    container: Element,
    on_key: KeyDispatch,
}

impl WebDialogHost {
    pub fn find(document: Document, container_id: &str, on_key: KeyDispatch) -> Result<Self, ModalError> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| ModalError::MissingElement(container_id.to_string()))?;
        Ok(Self { document, container, on_key })
    }
}

impl DialogHost for WebDialogHost {
    type Element = Element;
    type KeyTrap = KeyTrapListener;

    fn container(&self) -> Element {
        self.container.clone()
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&mut self, element: &Element) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.focus();
        }
    }

    fn is_attached(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn focusable_descendants(&self) -> Vec<Element> {
        let Ok(nodes) = self.container.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_shown(&mut self, shown: bool) {
        let classes = self.container.class_list();
        if shown {
            let _ = classes.remove_1("hidden");
        } else {
            let _ = classes.add_1("hidden");
        }
        let _ = self
            .container
            .set_attribute("aria-hidden", if shown { "false" } else { "true" });
    }

    fn set_label(&mut self, label: &str) {
        match self
            .document
            .get_element_by_id(LABEL_FIELD_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            Some(input) => input.set_value(label),
            None => log::debug!("Label field #{} not found", LABEL_FIELD_ID),
        }
    }

    fn install_key_trap(&mut self) -> KeyTrapListener {
        let on_key = self.on_key.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            on_key(event);
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let _ = self
            .container
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());

        KeyTrapListener {
            target: self.container.clone(),
            closure,
        }
    }
}
