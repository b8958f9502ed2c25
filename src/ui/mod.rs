//! Browser bindings: attach every decoration to the live page

pub mod canvas;
pub mod dom;
pub mod drawer;
pub mod landing;
pub mod rain;
pub mod reveal;
pub mod scroll;
pub mod sprinkles;
pub mod theme;
pub mod typewriter;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::logging::{log, warn};
use wasm_bindgen::prelude::wasm_bindgen;

use crate::core::{DecorConfig, Result, StopSignal};
use reveal::RevealObserver;

pub use landing::LandingEffects;

/// Everything running on the page after attaching
pub struct Decorations {
    stop: StopSignal,
    rain: Option<Interval>,
    reveal: Option<RevealObserver>,
}

impl Decorations {
    /// Attach every feature. A feature that fails is logged and skipped.
    pub fn attach(config: &DecorConfig) -> Self {
        let stop = StopSignal::new();

        if let Some(mode) = report("theme", theme::attach(&config.theme)) {
            log!("theme: {}", mode);
        }
        if let Some(triggers) = report("drawer", drawer::attach(&config.drawer)) {
            log!("drawer: {} triggers", triggers);
        }
        if let Some(anchors) = report("smooth scroll", scroll::attach(&config.scroll)) {
            log!("smooth scroll: {} anchors", anchors);
        }
        let reveal = report("reveal", RevealObserver::attach(&config.reveal)).flatten();
        if let Some(observer) = &reveal {
            log!("reveal: observing {} elements", observer.targets());
        }
        let rain = report("matrix rain", rain::start(&config.rain)).flatten();
        report("code sprinkles", sprinkles::start(&config.sprinkles, stop.clone()));
        report(
            "typewriter",
            typewriter::start(&config.typewriter, stop.clone()),
        );

        Self { stop, rain, reveal }
    }

    /// Stop every timer, frame loop and observer. Event listeners stay bound.
    pub fn stop(&mut self) {
        self.stop.stop();
        if let Some(interval) = self.rain.take() {
            interval.cancel();
        }
        if let Some(observer) = self.reveal.take() {
            observer.disconnect();
        }
    }
}

fn report<T>(feature: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{} disabled: {}", feature, err);
            None
        }
    }
}

/// Handle returned to JavaScript for tearing the decorations down
#[wasm_bindgen]
pub struct DecorHandle {
    decorations: Rc<RefCell<Option<Decorations>>>,
    cancelled: StopSignal,
}

#[wasm_bindgen]
impl DecorHandle {
    /// Stop all animations. Safe to call more than once, or before the page is ready.
    pub fn stop(&self) {
        self.cancelled.stop();
        if let Some(mut decorations) = self.decorations.borrow_mut().take() {
            decorations.stop();
        }
    }
}

/// Attach with `config` once the DOM is ready.
pub fn launch(config: DecorConfig) -> Result<DecorHandle> {
    let handle = DecorHandle {
        decorations: Rc::new(RefCell::new(None)),
        cancelled: StopSignal::new(),
    };

    let slot = Rc::clone(&handle.decorations);
    let cancelled = handle.cancelled.clone();
    dom::when_ready(move || {
        if cancelled.is_stopped() {
            return;
        }
        *slot.borrow_mut() = Some(Decorations::attach(&config));
    })?;

    Ok(handle)
}
