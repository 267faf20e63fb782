use downcast_rs::{impl_downcast, Downcast};
use std::any::Any;

/// An opaque handle to a native element, whose underlying type is determined by the current `Renderer`.
pub type NativeHandle = Box<dyn Any>;

/// A callback run when a native element is clicked.
pub type ClickListener = Box<dyn Fn(&mut dyn EventContext)>;

/// The element kinds the tree view is built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Li,
    Span,
    Ul,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Li => "li",
            Tag::Span => "span",
            Tag::Ul => "ul",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The interface through which `sitetree` builds and updates the native UI.
/// This allows the tree view to be platform-agnostic.
pub trait Renderer: Downcast {
    /// Creates a detached element of the given kind.
    fn create_element(&mut self, tag: Tag) -> NativeHandle;

    /// Returns a second handle referring to the same element as `handle`.
    fn duplicate_handle(&self, handle: &NativeHandle) -> NativeHandle;

    /// Replaces the element's text content.
    fn set_text_content(&mut self, handle: &NativeHandle, text: &str);

    /// Adds `class` to the element's class list.
    fn add_class(&mut self, handle: &NativeHandle, class: &'static str);

    /// Appends the element with handle `child_handle` to the children of the element
    /// with handle `parent_handle`.
    fn append_child(&mut self, parent_handle: &NativeHandle, child_handle: &NativeHandle);

    /// Removes every child of the element, releasing any listeners attached within them.
    fn clear_children(&mut self, parent_handle: &NativeHandle);

    /// Calls `listener` whenever the element is clicked. Clicks bubble to the listeners
    /// of ancestor elements unless a listener calls [`EventContext::stop_propagation`].
    fn add_click_listener(&mut self, handle: &NativeHandle, listener: ClickListener);
}

impl_downcast!(Renderer);

/// What a click listener may do while an event is being dispatched.
pub trait EventContext {
    /// Prevents the event from reaching listeners on ancestor elements.
    fn stop_propagation(&mut self);

    /// Toggles `class` on the element, returning whether it is now present.
    fn toggle_class(&mut self, handle: &NativeHandle, class: &'static str) -> bool;
}
