//! Landing Decor - client-side effects for a static landing page
//!
//! Theme toggle, mobile drawer, smooth anchor scrolling, scroll-reveal, matrix rain
//! and code sprinkle backgrounds, and a terminal typewriter, compiled to WebAssembly.

pub mod core;
#[cfg(feature = "csr")]
pub mod ui;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Attach every decoration with the default configuration.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn start() {
    use crate::ui::LandingEffects;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <LandingEffects/> });
}

/// Attach with a (possibly partial) configuration object and return a stop handle.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn start_with_config(config: JsValue) -> Result<ui::DecorHandle, JsValue> {
    use crate::core::{DecorConfig, DecorError};

    console_error_panic_hook::set_once();

    let to_js = |err: DecorError| JsValue::from_str(&err.to_string());
    let config: DecorConfig = if config.is_undefined() || config.is_null() {
        DecorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(DecorError::from)
            .map_err(to_js)?
    };
    config.validate().map_err(to_js)?;

    ui::launch(config).map_err(to_js)
}
