/// The document as seen by [`ModalController`](super::ModalController).
///
/// Lookups that can fail return `Option` or `bool` so the controller can skip
/// a step instead of erroring: a missing label field or a focus target that
/// was removed from the page never aborts an open or close.
pub trait DialogHost {
    /// Handle to a node in the document. Equality is node identity.
    type Element: Clone + PartialEq;

    /// Guard for an installed keydown listener. Dropping it removes the listener.
    type KeyTrap;

    /// The dialog's outer container, which doubles as the backdrop.
    fn container(&self) -> Self::Element;

    fn active_element(&self) -> Option<Self::Element>;

    fn focus(&mut self, element: &Self::Element);

    /// Whether the element is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Focusable descendants of the container, in document order, as of now.
    fn focusable_descendants(&self) -> Vec<Self::Element>;

    /// Toggles both the visual `hidden` marker and `aria-hidden`.
    fn set_shown(&mut self, shown: bool);

    fn set_label(&mut self, label: &str);

    fn install_key_trap(&mut self) -> Self::KeyTrap;
}
