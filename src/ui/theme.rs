//! Theme toggle wiring
//!
//! - Resolves the initial theme from localStorage and prefers-color-scheme
//! - Flips and persists it on toggle clicks
//! - Follows system theme changes while the visitor has not chosen one

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::log;

use super::dom::{BrowserStorage, DomClasses, document, listen, window};
use crate::core::config::ThemeConfig;
use crate::core::theme::{ThemeController, ThemeMode};
use crate::core::{DecorError, Result};

pub type DomThemeController = ThemeController<BrowserStorage, DomClasses, DomClasses>;

/// Apply the initial theme and bind the toggle control.
pub fn attach(config: &ThemeConfig) -> Result<ThemeMode> {
    let window = window()?;
    let document = document()?;
    let root = document.document_element().ok_or(DecorError::NoDocument)?;

    let toggle = document.get_element_by_id(&config.toggle_id);
    let icon = toggle
        .as_ref()
        .and_then(|toggle| toggle.query_selector(&config.icon_selector).ok().flatten())
        .map(DomClasses);

    let media_query = window.match_media(&config.media_query).ok().flatten();
    let system_prefers_dark = media_query.as_ref().is_some_and(|mq| mq.matches());

    let controller: Rc<RefCell<DomThemeController>> = Rc::new(RefCell::new(
        ThemeController::new(config.clone(), BrowserStorage::open(), DomClasses(root), icon),
    ));
    let mode = controller.borrow_mut().load(system_prefers_dark);

    if let Some(toggle) = toggle {
        let controller = Rc::clone(&controller);
        listen(&toggle, "click", move |_| {
            let mode = controller.borrow_mut().toggle();
            log!("theme switched to {}", mode);
        })?;
    }

    // Listen for system theme changes
    if let Some(media_query) = media_query {
        let controller = Rc::clone(&controller);
        let query = media_query.clone();
        listen(&media_query, "change", move |_| {
            controller
                .borrow_mut()
                .system_preference_changed(query.matches());
        })?;
    }

    Ok(mode)
}
