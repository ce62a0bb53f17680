//! The "request a demo" dialog: open/close lifecycle, focus capture and
//! restore, and Tab containment while open.
//!
//! [`ModalController`] is DOM-agnostic and talks to the page through a
//! [`DialogHost`]. [`web::WebDialogHost`] is the browser implementation and
//! [`handle::ModalHandle`] is what Yew components hold on to.

pub mod error;
pub mod handle;
pub mod host;
pub mod validate;
pub mod web;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use log::{debug, info};

pub use error::ModalError;
pub use handle::ModalHandle;
pub use host::DialogHost;

/// Form field holding the visitor's email address.
pub const EMAIL_FIELD: &str = "email";
/// Form field holding the plan label forwarded from the trigger.
pub const PLAN_FIELD: &str = "plan";

/// Whether the dialog is showing. `Open` always means visible and not `aria-hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

/// What opened the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerContext {
    pub label: Option<String>,
}

impl TriggerContext {
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()) }
    }
}

/// Platform-neutral form of `KeyboardEvent.key`, reduced to the keys the
/// focus trap reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str, shift: bool) -> Self {
        let key = match name {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        };
        Self { key, shift }
    }
}

/// What the caller should do with the original key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser's default handling run.
    Ignored,
    /// Focus was moved (or pinned) by the trap; the default must be prevented.
    Suppressed,
    /// The dialog closed in response to the key.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub email: String,
    pub plan: String,
}

/// Focusable elements inside the dialog for one open episode.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRing<E> {
    members: Vec<E>,
}

impl<E: PartialEq> FocusRing<E> {
    pub fn collect<H: DialogHost<Element = E>>(host: &H) -> Self {
        Self { members: host.focusable_descendants() }
    }

    pub fn empty() -> Self {
        Self { members: Vec::new() }
    }

    pub fn first(&self) -> Option<&E> {
        self.members.first()
    }

    pub fn last(&self) -> Option<&E> {
        self.members.last()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.members.contains(element)
    }
}

pub struct ModalController<H: DialogHost> {
    host: H,
    state: DialogState,
    memento: Option<H::Element>,
    ring: FocusRing<H::Element>,
    trap: Option<H::KeyTrap>,
    pending_error: Option<ModalError>,
}

impl<H: DialogHost> ModalController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: DialogState::Closed,
            memento: None,
            ring: FocusRing::empty(),
            trap: None,
            pending_error: None,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn focus_ring(&self) -> &FocusRing<H::Element> {
        &self.ring
    }

    /// The validation error from the last failed submit, until the dialog
    /// closes or a submit succeeds.
    pub fn pending_error(&self) -> Option<&ModalError> {
        self.pending_error.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn open(&mut self, trigger: &TriggerContext) {
        let label = trigger.label.as_deref().unwrap_or("");
        if self.is_open() {
            debug!("Dialog already open, refreshing label to {:?}", label);
            self.host.set_label(label);
            return;
        }

        self.memento = self.host.active_element();
        self.state = DialogState::Open;
        self.host.set_shown(true);
        self.host.set_label(label);

        self.ring = FocusRing::collect(&self.host);
        match self.ring.first().cloned() {
            Some(first) => self.host.focus(&first),
            None => {
                debug!("Dialog has no focusable descendants, focusing container");
                let container = self.host.container();
                self.host.focus(&container);
            }
        }

        if self.trap.is_none() {
            self.trap = Some(self.host.install_key_trap());
        }
        info!("Dialog opened ({} focusable elements)", self.ring.len());
    }

    /// Returns whether the dialog was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        self.host.set_shown(false);
        self.trap = None;
        self.state = DialogState::Closed;
        self.ring = FocusRing::empty();
        self.pending_error = None;

        if let Some(memento) = self.memento.take() {
            if self.host.is_attached(&memento) {
                self.host.focus(&memento);
            } else {
                debug!("Previously focused element left the document, not restoring focus");
            }
        }
        info!("Dialog closed");
        true
    }

    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match press.key {
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Tab => self.wrap_tab(press.shift),
            Key::Other => KeyOutcome::Ignored,
        }
    }

    fn wrap_tab(&mut self, backwards: bool) -> KeyOutcome {
        let (Some(first), Some(last)) = (self.ring.first().cloned(), self.ring.last().cloned()) else {
            // Nothing to cycle between; keep focus on the container.
            let container = self.host.container();
            if self.host.active_element().as_ref() != Some(&container) {
                self.host.focus(&container);
            }
            return KeyOutcome::Suppressed;
        };

        let (edge, wrap_to) = if backwards { (first, last) } else { (last, first) };
        match self.host.active_element() {
            // Between ring members the browser's own order stays inside the dialog.
            Some(active) if active != edge && self.ring.contains(&active) => KeyOutcome::Ignored,
            // On an edge, the container, or anywhere else: pull focus back into the ring.
            _ => {
                self.host.focus(&wrap_to);
                KeyOutcome::Suppressed
            }
        }
    }

    pub fn submit(&mut self, values: &HashMap<String, String>) -> Result<SubmitReceipt, ModalError> {
        let raw = values.get(EMAIL_FIELD).map(String::as_str).unwrap_or("");
        let email = match validate::validate_email(raw) {
            Ok(email) => email.to_string(),
            Err(e) => {
                debug!("Demo request rejected: {}", e);
                self.pending_error = Some(e.clone());
                return Err(e);
            }
        };

        let plan = values.get(PLAN_FIELD).cloned().unwrap_or_default();
        info!("Demo request accepted for plan {:?}", plan);
        self.pending_error = None;
        self.close();
        Ok(SubmitReceipt { email, plan })
    }

    /// Closes when the click landed on the backdrop itself rather than the panel.
    pub fn backdrop_click(&mut self, target: &H::Element) -> bool {
        if *target == self.host.container() {
            self.close()
        } else {
            false
        }
    }
}
