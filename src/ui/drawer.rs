//! Mobile menu open/close bindings

use std::rc::Rc;

use leptos::web_sys;

use super::dom::{DomClasses, document, listen, query_all};
use crate::core::config::DrawerConfig;
use crate::core::drawer::NavigationDrawer;
use crate::core::{DecorError, Result};

/// Bind every trigger to the drawer. Returns the number of bound triggers;
/// without a menu container nothing is bound.
pub fn attach(config: &DrawerConfig) -> Result<usize> {
    let document = document()?;
    let Some(menu) = document.get_element_by_id(&config.menu_id) else {
        return Ok(0);
    };
    let body: web_sys::Element = document.body().ok_or(DecorError::NoDocument)?.into();

    let drawer = Rc::new(NavigationDrawer::new(
        config,
        DomClasses(menu),
        DomClasses(body),
    ));

    let mut triggers: Vec<web_sys::Element> = [&config.opener_id, &config.closer_id]
        .into_iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect();
    triggers.extend(query_all(&document, &config.link_selector));

    for trigger in &triggers {
        let drawer = Rc::clone(&drawer);
        listen(trigger, "click", move |_| {
            drawer.toggle();
        })?;
    }

    Ok(triggers.len())
}
