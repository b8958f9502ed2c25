//! Smooth scroll for in-page anchor clicks

use leptos::web_sys;

use super::dom::{document, listen, query_all, window};
use crate::core::Result;
use crate::core::config::ScrollConfig;
use crate::core::scroll::plan_scroll;

/// Intercept clicks on fragment anchors. Returns the number of anchors bound.
pub fn attach(config: &ScrollConfig) -> Result<usize> {
    let document = document()?;
    let anchors = query_all(&document, &config.anchor_selector);
    let header_offset = config.header_offset;

    for anchor in &anchors {
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let (Ok(window), Ok(document)) = (window(), document()) else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);

            let target = plan_scroll(&href, scroll_y, header_offset, |selector| {
                document
                    .query_selector(selector)
                    .ok()
                    .flatten()
                    .map(|element| element.get_bounding_client_rect().top())
            });

            if let Some(top) = target {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }

    Ok(anchors.len())
}
