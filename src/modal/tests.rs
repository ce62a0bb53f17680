use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

const CONTAINER: u32 = 0;
const PAGE_BUTTON: u32 = 100;
const OTHER_PAGE_LINK: u32 = 101;

/// In-memory document: elements are ids, the dialog's focusables are 1..=n.
struct FakeHost {
    focusables: Vec<u32>,
    attached: HashSet<u32>,
    active: Option<u32>,
    shown: bool,
    aria_hidden: bool,
    label: Option<String>,
    listeners: Rc<Cell<usize>>,
    installs: usize,
}

struct FakeTrap(Rc<Cell<usize>>);

impl Drop for FakeTrap {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl FakeHost {
    fn with_focusables(count: u32) -> Self {
        let focusables: Vec<u32> = (1..=count).collect();
        let mut attached: HashSet<u32> = focusables.iter().copied().collect();
        attached.extend([CONTAINER, PAGE_BUTTON, OTHER_PAGE_LINK]);
        Self {
            focusables,
            attached,
            active: Some(PAGE_BUTTON),
            shown: false,
            aria_hidden: true,
            label: None,
            listeners: Rc::new(Cell::new(0)),
            installs: 0,
        }
    }

    fn detach(&mut self, element: u32) {
        self.attached.remove(&element);
    }
}

impl DialogHost for FakeHost {
    type Element = u32;
    type KeyTrap = FakeTrap;

    fn container(&self) -> u32 {
        CONTAINER
    }

    fn active_element(&self) -> Option<u32> {
        self.active
    }

    fn focus(&mut self, element: &u32) {
        self.active = Some(*element);
    }

    fn is_attached(&self, element: &u32) -> bool {
        self.attached.contains(element)
    }

    fn focusable_descendants(&self) -> Vec<u32> {
        self.focusables
            .iter()
            .copied()
            .filter(|id| self.attached.contains(id))
            .collect()
    }

    fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
        self.aria_hidden = !shown;
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    fn install_key_trap(&mut self) -> FakeTrap {
        self.installs += 1;
        self.listeners.set(self.listeners.get() + 1);
        FakeTrap(self.listeners.clone())
    }
}

fn controller(focusables: u32) -> ModalController<FakeHost> {
    ModalController::new(FakeHost::with_focusables(focusables))
}

fn tab() -> KeyPress {
    KeyPress::new(Key::Tab, false)
}

fn shift_tab() -> KeyPress {
    KeyPress::new(Key::Tab, true)
}

fn escape() -> KeyPress {
    KeyPress::new(Key::Escape, false)
}

fn form(email: &str) -> HashMap<String, String> {
    HashMap::from([
        (EMAIL_FIELD.to_string(), email.to_string()),
        (PLAN_FIELD.to_string(), "Pro".to_string()),
    ])
}

#[test]
fn starts_closed_and_hidden() {
    let modal = controller(3);
    assert_eq!(modal.state(), DialogState::Closed);
    assert!(!modal.host().shown);
    assert!(modal.host().aria_hidden);
    assert_eq!(modal.host().listeners.get(), 0);
}

#[test]
fn open_shows_dialog_and_focuses_first_element() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::labelled("Team"));

    assert!(modal.is_open());
    assert!(modal.host().shown);
    assert!(!modal.host().aria_hidden);
    assert_eq!(modal.host().label.as_deref(), Some("Team"));
    assert_eq!(modal.host().active, Some(1));
    assert_eq!(modal.focus_ring().len(), 3);
    assert!(modal.focus_ring().contains(&1));
    assert_eq!(modal.host().listeners.get(), 1);
}

#[test]
fn open_without_label_writes_empty_string() {
    let mut modal = controller(2);
    modal.open(&TriggerContext::default());
    assert_eq!(modal.host().label.as_deref(), Some(""));
}

#[test]
fn open_with_no_focusables_focuses_container() {
    let mut modal = controller(0);
    modal.open(&TriggerContext::default());

    assert!(modal.is_open());
    assert!(modal.focus_ring().is_empty());
    assert_eq!(modal.host().active, Some(CONTAINER));

    assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(CONTAINER));
}

#[test]
fn close_hides_dialog_removes_listener_and_restores_focus() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    assert!(modal.close());

    assert_eq!(modal.state(), DialogState::Closed);
    assert!(!modal.host().shown);
    assert!(modal.host().aria_hidden);
    assert_eq!(modal.host().listeners.get(), 0);
    assert_eq!(modal.host().active, Some(PAGE_BUTTON));
    assert!(modal.focus_ring().is_empty());
}

#[test]
fn close_when_closed_is_a_no_op() {
    let mut modal = controller(3);
    modal.host_mut().active = Some(OTHER_PAGE_LINK);

    assert!(!modal.close());
    assert!(!modal.close());
    assert_eq!(modal.state(), DialogState::Closed);
    assert_eq!(modal.host().active, Some(OTHER_PAGE_LINK));
    assert_eq!(modal.host().label, None);
    assert_eq!(modal.host().installs, 0);
}

#[test]
fn reopen_refreshes_label_but_keeps_original_focus_target() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::labelled("Starter"));
    modal.host_mut().focus(&2);

    modal.open(&TriggerContext::labelled("Pro"));
    assert_eq!(modal.host().label.as_deref(), Some("Pro"));
    assert_eq!(modal.host().active, Some(2));
    assert_eq!(modal.host().installs, 1);
    assert_eq!(modal.host().listeners.get(), 1);

    modal.close();
    assert_eq!(modal.host().active, Some(PAGE_BUTTON));
}

#[test]
fn focus_restore_skipped_when_memento_left_document() {
    let mut modal = controller(2);
    modal.open(&TriggerContext::default());
    modal.host_mut().detach(PAGE_BUTTON);

    assert!(modal.close());
    assert_eq!(modal.state(), DialogState::Closed);
    assert_ne!(modal.host().active, Some(PAGE_BUTTON));
}

#[test]
fn no_restore_when_nothing_was_focused() {
    let mut modal = controller(2);
    modal.host_mut().active = None;
    modal.open(&TriggerContext::default());
    assert!(modal.close());
    assert_eq!(modal.host().active, Some(1));
}

#[test]
fn focus_ring_recomputed_on_each_open() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    modal.close();

    modal.host_mut().detach(1);
    modal.open(&TriggerContext::default());
    assert_eq!(modal.focus_ring().len(), 2);
    assert_eq!(modal.focus_ring().first(), Some(&2));
    assert_eq!(modal.host().active, Some(2));
}

#[test]
fn tab_wraps_for_single_element() {
    let mut modal = controller(1);
    modal.open(&TriggerContext::default());

    assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(1));
    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(1));
}

#[test]
fn tab_wraps_for_two_elements() {
    let mut modal = controller(2);
    modal.open(&TriggerContext::default());

    // first -> second is native browser movement
    assert_eq!(modal.handle_key(tab()), KeyOutcome::Ignored);
    modal.host_mut().focus(&2);
    assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(1));
    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(2));
}

#[test]
fn tab_in_middle_of_ring_is_not_intercepted() {
    let mut modal = controller(4);
    modal.open(&TriggerContext::default());
    modal.host_mut().focus(&2);

    assert_eq!(modal.handle_key(tab()), KeyOutcome::Ignored);
    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Ignored);
    assert_eq!(modal.host().active, Some(2));
}

#[test]
fn shift_tab_from_container_moves_to_last_element() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    modal.host_mut().focus(&CONTAINER);

    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(3));
}

#[test]
fn tab_from_container_moves_to_first_element() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    modal.host_mut().focus(&CONTAINER);

    assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(1));
}

#[test]
fn tab_from_outside_ring_is_pulled_back_in() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());

    modal.host_mut().focus(&OTHER_PAGE_LINK);
    assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(3));

    modal.host_mut().active = None;
    assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
    assert_eq!(modal.host().active, Some(1));
}

#[test]
fn other_keys_pass_through() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    assert_eq!(modal.handle_key(KeyPress::from_key_name("Enter", false)), KeyOutcome::Ignored);
    assert_eq!(modal.handle_key(KeyPress::from_key_name("a", true)), KeyOutcome::Ignored);
    assert!(modal.is_open());
}

#[test]
fn keys_ignored_while_closed() {
    let mut modal = controller(3);
    assert_eq!(modal.handle_key(escape()), KeyOutcome::Ignored);
    assert_eq!(modal.handle_key(tab()), KeyOutcome::Ignored);
    assert_eq!(modal.host().active, Some(PAGE_BUTTON));
}

#[test]
fn escape_closes_and_restores_focus() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    modal.host_mut().focus(&3);

    assert_eq!(modal.handle_key(escape()), KeyOutcome::Closed);
    assert_eq!(modal.state(), DialogState::Closed);
    assert_eq!(modal.host().active, Some(PAGE_BUTTON));
    assert_eq!(modal.host().listeners.get(), 0);
}

#[test]
fn key_names_map_to_keys() {
    assert_eq!(KeyPress::from_key_name("Escape", false).key, Key::Escape);
    assert_eq!(KeyPress::from_key_name("Esc", false).key, Key::Escape);
    assert_eq!(KeyPress::from_key_name("Tab", true), KeyPress::new(Key::Tab, true));
    assert_eq!(KeyPress::from_key_name("ArrowDown", false).key, Key::Other);
}

#[test]
fn invalid_submit_keeps_dialog_open() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::labelled("Pro"));

    let err = modal.submit(&form("not-an-email")).unwrap_err();
    assert!(matches!(err, ModalError::InvalidEmail { .. }));
    assert!(modal.is_open());
    assert_eq!(modal.pending_error(), Some(&err));
    assert_eq!(modal.host().listeners.get(), 1);
}

#[test]
fn missing_email_field_is_a_validation_error() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    assert!(modal.submit(&HashMap::new()).is_err());
    assert!(modal.is_open());
}

#[test]
fn valid_submit_closes_dialog() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::labelled("Pro"));
    modal.submit(&form("bad")).unwrap_err();

    let receipt = modal.submit(&form(" a@b.co ")).unwrap();
    assert_eq!(receipt, SubmitReceipt { email: "a@b.co".to_string(), plan: "Pro".to_string() });
    assert_eq!(modal.state(), DialogState::Closed);
    assert_eq!(modal.pending_error(), None);
    assert_eq!(modal.host().active, Some(PAGE_BUTTON));
}

#[test]
fn closing_abandons_pending_error() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    modal.submit(&form("nope")).unwrap_err();
    assert!(modal.pending_error().is_some());

    modal.handle_key(escape());
    assert_eq!(modal.pending_error(), None);
}

#[test]
fn backdrop_click_closes_only_on_container() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());

    assert!(!modal.backdrop_click(&2));
    assert!(modal.is_open());

    assert!(modal.backdrop_click(&CONTAINER));
    assert_eq!(modal.state(), DialogState::Closed);
    assert!(!modal.backdrop_click(&CONTAINER));
}

#[test]
fn dropping_controller_releases_listener() {
    let mut modal = controller(3);
    modal.open(&TriggerContext::default());
    let listeners = modal.host().listeners.clone();
    assert_eq!(listeners.get(), 1);

    drop(modal);
    assert_eq!(listeners.get(), 0);
}

#[derive(Debug, Clone)]
enum Op {
    Open(Option<String>),
    Close,
    Escape,
    FocusInside(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::option::of("[A-Za-z]{0,8}").prop_map(Op::Open),
        Just(Op::Close),
        Just(Op::Escape),
        (1u32..=4).prop_map(Op::FocusInside),
    ]
}

proptest! {
    #[test]
    fn lifecycle_sequences_keep_invariants(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut modal = controller(4);
        let mut expect_open = false;
        let mut expected_restore = None;

        for op in &ops {
            match op {
                Op::Open(label) => {
                    if !expect_open {
                        expected_restore = modal.host().active;
                    }
                    modal.open(&TriggerContext::new(label.clone()));
                    expect_open = true;
                    prop_assert!(modal.focus_ring().contains(&modal.host().active.unwrap()));
                }
                Op::Close | Op::Escape => {
                    if matches!(op, Op::Close) {
                        modal.close();
                    } else {
                        modal.handle_key(escape());
                    }
                    if expect_open {
                        prop_assert_eq!(modal.host().active, expected_restore);
                    }
                    expect_open = false;
                }
                Op::FocusInside(id) => {
                    if expect_open {
                        modal.host_mut().focus(id);
                    }
                }
            }

            prop_assert_eq!(modal.is_open(), expect_open);
            prop_assert_eq!(modal.host().shown, expect_open);
            prop_assert_eq!(modal.host().aria_hidden, !expect_open);
            prop_assert_eq!(modal.host().listeners.get(), usize::from(expect_open));
        }
    }

    #[test]
    fn tab_keeps_focus_inside_dialog(
        size in 0u32..6,
        start in prop_oneof![Just(CONTAINER), Just(OTHER_PAGE_LINK), 1u32..6],
        presses in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut modal = controller(size);
        modal.open(&TriggerContext::default());
        modal.host_mut().focus(&start);

        for backwards in presses {
            let press = if backwards { shift_tab() } else { tab() };
            if modal.handle_key(press) == KeyOutcome::Ignored {
                // browser moves one step through the ring
                let active = modal.host().active.unwrap();
                let next = if backwards { active - 1 } else { active + 1 };
                modal.host_mut().focus(&next);
            }
            let active = modal.host().active.unwrap();
            prop_assert!(
                modal.focus_ring().contains(&active) || (size == 0 && active == CONTAINER),
                "focus escaped to {}", active
            );
        }
    }

    #[test]
    fn tab_wraps_at_ring_edges(size in 0u32..8) {
        let mut modal = controller(size);
        modal.open(&TriggerContext::default());

        if size == 0 {
            prop_assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
            prop_assert_eq!(modal.host().active, Some(CONTAINER));
        } else {
            modal.host_mut().focus(&size);
            prop_assert_eq!(modal.handle_key(tab()), KeyOutcome::Suppressed);
            prop_assert_eq!(modal.host().active, Some(1));

            prop_assert_eq!(modal.handle_key(shift_tab()), KeyOutcome::Suppressed);
            prop_assert_eq!(modal.host().active, Some(size));
        }
        prop_assert!(modal.is_open());
    }
}
