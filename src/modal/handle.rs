use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use yew::Callback;

use super::web::{KeyDispatch, WebDialogHost};
use super::{DialogState, KeyOutcome, KeyPress, ModalController, ModalError, SubmitReceipt, TriggerContext};

pub const DIALOG_ID: &str = "modal";

type SharedController = Rc<RefCell<Option<ModalController<WebDialogHost>>>>;
type SharedObserver = Rc<RefCell<Option<Callback<DialogState>>>>;

/// Cheap-to-clone access to the page's single dialog controller.
///
/// Starts detached; [`attach`](Self::attach) binds it to the rendered
/// `#modal` element. Calls on a detached handle do nothing.
#[derive(Clone, Default)]
pub struct ModalHandle {
    controller: SharedController,
    observer: SharedObserver,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

fn notify(observer: &SharedObserver, state: DialogState) {
    let callback = observer.borrow().clone();
    if let Some(callback) = callback {
        callback.emit(state);
    }
}

fn dispatcher(
    controller: Weak<RefCell<Option<ModalController<WebDialogHost>>>>,
    observer: Weak<RefCell<Option<Callback<DialogState>>>>,
) -> KeyDispatch {
    Rc::new(move |event| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let outcome = match controller.borrow_mut().as_mut() {
            Some(modal) => modal.handle_key(KeyPress::from(&event)),
            None => return,
        };

        match outcome {
            KeyOutcome::Suppressed => event.prevent_default(),
            KeyOutcome::Closed => {
                if let Some(observer) = observer.upgrade() {
                    notify(&observer, DialogState::Closed);
                }
            }
            KeyOutcome::Ignored => {}
        }
    })
}

impl ModalHandle {
    pub fn attach(&self) -> Result<(), ModalError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ModalError::MissingElement(DIALOG_ID.to_string()))?;
        let on_key = dispatcher(Rc::downgrade(&self.controller), Rc::downgrade(&self.observer));
        let host = WebDialogHost::find(document, DIALOG_ID, on_key)?;
        *self.controller.borrow_mut() = Some(ModalController::new(host));
        debug!("Dialog controller attached");
        Ok(())
    }

    /// Drops the controller, and with it any installed key listener.
    pub fn detach(&self) {
        self.controller.borrow_mut().take();
    }

    pub fn set_observer(&self, observer: Option<Callback<DialogState>>) {
        *self.observer.borrow_mut() = observer;
    }

    fn with_controller<R>(&self, f: impl FnOnce(&mut ModalController<WebDialogHost>) -> R) -> Option<R> {
        let mut controller = self.controller.borrow_mut();
        match controller.as_mut() {
            Some(modal) => Some(f(modal)),
            None => {
                warn!("Dialog used before it was attached");
                None
            }
        }
    }

    pub fn open(&self, trigger: TriggerContext) {
        if self.with_controller(|modal| modal.open(&trigger)).is_some() {
            notify(&self.observer, DialogState::Open);
        }
    }

    pub fn close(&self) {
        if self.with_controller(|modal| modal.close()) == Some(true) {
            notify(&self.observer, DialogState::Closed);
        }
    }

    pub fn backdrop_click(&self, target: &web_sys::Element) {
        if self.with_controller(|modal| modal.backdrop_click(target)) == Some(true) {
            notify(&self.observer, DialogState::Closed);
        }
    }

    pub fn submit(&self, values: &HashMap<String, String>) -> Result<SubmitReceipt, ModalError> {
        let result = self
            .with_controller(|modal| modal.submit(values))
            .unwrap_or_else(|| Err(ModalError::MissingElement(DIALOG_ID.to_string())));
        if result.is_ok() {
            notify(&self.observer, DialogState::Closed);
        }
        result
    }
}
