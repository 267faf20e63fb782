use sitetree::renderer::{EventContext, NativeHandle};
use tracing::warn;
use wasm_bindgen::intern;
use web_sys::Event;

use crate::{describe, element};

/// The [`EventContext`] of a DOM event while its listeners run.
pub struct WebEventContext<'a> {
    event: &'a Event,
}

impl<'a> WebEventContext<'a> {
    pub(crate) fn new(event: &'a Event) -> Self {
        Self { event }
    }
}

impl EventContext for WebEventContext<'_> {
    fn stop_propagation(&mut self) {
        self.event.stop_propagation();
    }

    fn toggle_class(&mut self, handle: &NativeHandle, class: &'static str) -> bool {
        match element(handle).class_list().toggle(intern(class)) {
            Ok(present) => present,
            Err(err) => {
                warn!(class, error = %describe(&err), "failed to toggle class");
                false
            }
        }
    }
}
