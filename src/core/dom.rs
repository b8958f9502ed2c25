//! Seams between the decoration logic and the document.
//!
//! The browser layer implements these over `web_sys`; tests use the in-memory
//! versions in [`fakes`].

/// A mutable set of CSS classes on one element
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&self, class: &str);
    fn remove(&self, class: &str);

    /// Flip `class`; returns whether it is present afterwards.
    fn toggle(&self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }

    /// Add or remove `class` depending on `present`.
    fn set(&self, class: &str, present: bool) {
        if present {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}

/// String key/value persistence (localStorage in the browser)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Element that carries theme state: an attribute plus a class list
pub trait ThemeRoot: ClassList {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
}

impl<T: ClassList + ?Sized> ClassList for &T {
    fn contains(&self, class: &str) -> bool {
        (**self).contains(class)
    }

    fn add(&self, class: &str) {
        (**self).add(class)
    }

    fn remove(&self, class: &str) {
        (**self).remove(class)
    }
}

impl<T: ThemeRoot + ?Sized> ThemeRoot for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    use super::{ClassList, PreferenceStore, ThemeRoot};

    /// Element stand-in recording classes and attributes
    #[derive(Debug, Default)]
    pub struct FakeElement {
        pub classes: RefCell<BTreeSet<String>>,
        pub attributes: RefCell<BTreeMap<String, String>>,
    }

    impl FakeElement {
        pub fn with_classes(classes: &[&str]) -> Self {
            let element = Self::default();
            for class in classes {
                element.add(class);
            }
            element
        }

        pub fn class_names(&self) -> Vec<String> {
            self.classes.borrow().iter().cloned().collect()
        }
    }

    impl ClassList for FakeElement {
        fn contains(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn add(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }
    }

    impl ThemeRoot for FakeElement {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
    }

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub values: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.set(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::FakeElement;
    use super::*;

    #[test]
    fn test_toggle_reports_presence() {
        let element = FakeElement::default();
        assert!(element.toggle("open"));
        assert!(element.contains("open"));
        assert!(!element.toggle("open"));
        assert!(!element.contains("open"));
    }

    #[test]
    fn test_set_adds_and_removes() {
        let element = FakeElement::with_classes(&["dark"]);
        element.set("dark", false);
        assert!(element.class_names().is_empty());
        element.set("dark", true);
        element.set("dark", true);
        assert_eq!(element.class_names(), vec!["dark".to_string()]);
    }
}
