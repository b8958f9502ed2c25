//! Mobile navigation drawer state.
//!
//! The drawer is open when the menu lacks its hidden class; the body scroll lock
//! follows it in lockstep.

use super::config::DrawerConfig;
use super::dom::ClassList;

pub struct NavigationDrawer<M, B> {
    menu: M,
    body: B,
    hidden_class: String,
    scroll_lock_class: String,
}

impl<M: ClassList, B: ClassList> NavigationDrawer<M, B> {
    pub fn new(config: &DrawerConfig, menu: M, body: B) -> Self {
        Self {
            menu,
            body,
            hidden_class: config.hidden_class.clone(),
            scroll_lock_class: config.scroll_lock_class.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.menu.contains(&self.hidden_class)
    }

    /// Flip both classes; returns whether the drawer is open afterwards.
    pub fn toggle(&self) -> bool {
        self.menu.toggle(&self.hidden_class);
        self.body.toggle(&self.scroll_lock_class);
        self.is_open()
    }
}
