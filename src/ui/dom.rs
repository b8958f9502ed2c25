//! web_sys implementations of the core seams, plus listener helpers

use leptos::web_sys;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::dom::{ClassList, PreferenceStore, ThemeRoot};
use crate::core::{DecorError, Result};

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(DecorError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(DecorError::NoDocument)
}

/// Element by id, cast to `T`; `None` if absent or of another type.
pub fn element_by_id<T: JsCast>(document: &web_sys::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements matching `selector`. An invalid selector matches nothing.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Leak the closure to keep the listener alive
    closure.forget();
    Ok(())
}

/// Run `f` once the DOM is parsed: now, or on `DOMContentLoaded`.
pub fn when_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(move |_: web_sys::Event| f());
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        f();
    }
    Ok(())
}

/// Class list and attributes of a live element
#[derive(Clone, Debug)]
pub struct DomClasses(pub web_sys::Element);

impl ClassList for DomClasses {
    fn contains(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }
}

impl ThemeRoot for DomClasses {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }
}

/// localStorage; reads and writes are no-ops where storage is unavailable
pub struct BrowserStorage(Option<web_sys::Storage>);

impl BrowserStorage {
    pub fn open() -> Self {
        Self(web_sys::window().and_then(|window| window.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            let _ = storage.set_item(key, value);
        }
    }
}
