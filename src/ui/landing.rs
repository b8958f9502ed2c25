//! Leptos entry point for the decorations

use leptos::logging::warn;
use leptos::prelude::*;

use super::launch;
use crate::core::DecorConfig;

/// Attaches all landing page decorations to the surrounding static markup.
///
/// Place it once per page. It renders nothing visible; the decorations live for
/// the rest of the page lifetime.
#[component]
pub fn LandingEffects(
    /// Overrides for element ids, timings and palettes
    #[prop(optional)]
    config: Option<DecorConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    Effect::new(move |_| match launch(config.clone()) {
        // Keep the decorations running for the duration of the page
        Ok(handle) => std::mem::forget(handle),
        Err(err) => warn!("landing decorations disabled: {}", err),
    });

    view! {
        // This component doesn't render anything visible
        <div class="hidden" aria-hidden="true"></div>
    }
}
