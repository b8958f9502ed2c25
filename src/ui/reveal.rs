//! IntersectionObserver driving scroll-reveal

use leptos::web_sys;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::dom::{DomClasses, document, query_all};
use crate::core::Result;
use crate::core::config::RevealConfig;
use crate::core::reveal::{RevealRule, Visibility};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live observer over every reveal target
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    targets: usize,
    _callback: ObserverCallback,
}

impl RevealObserver {
    /// Observe all matching elements; `None` when the page has none.
    pub fn attach(config: &RevealConfig) -> Result<Option<Self>> {
        let document = document()?;
        let targets = query_all(&document, &config.selector);
        if targets.is_empty() {
            return Ok(None);
        }

        let rule = RevealRule::new(config.threshold, config.active_class.clone());
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let visibility = Visibility {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    // Keep observing after activation; re-entry is a no-op
                    rule.observe(&DomClasses(entry.target()), visibility);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;

        for target in &targets {
            observer.observe(target);
        }

        Ok(Some(Self {
            observer,
            targets: targets.len(),
            _callback: callback,
        }))
    }

    pub fn targets(&self) -> usize {
        self.targets
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
