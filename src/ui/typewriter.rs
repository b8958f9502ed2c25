//! Terminal typing effect over page elements

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::web_sys;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::dom::{document, element_by_id, query_all};
use crate::core::config::{TypewriterConfig, TypewriterMode};
use crate::core::typewriter::{CharDelay, Terminal, TypingSchedule, run_scheduled, run_script};
use crate::core::{Result, StopSignal};

/// [`Terminal`] over the live document
#[derive(Clone)]
pub struct DomTerminal {
    document: web_sys::Document,
    cursor_class: String,
    hidden_class: String,
    fade_animation: String,
}

impl DomTerminal {
    pub fn new(document: web_sys::Document, config: &TypewriterConfig) -> Self {
        Self {
            document,
            cursor_class: config.cursor_class.clone(),
            hidden_class: config.hidden_class.clone(),
            fade_animation: config.fade_animation.clone(),
        }
    }
}

impl Terminal for DomTerminal {
    type Node = web_sys::HtmlElement;

    fn find(&self, id: &str) -> Option<Self::Node> {
        element_by_id(&self.document, id)
    }

    fn text(&self, node: &Self::Node) -> String {
        node.text_content().unwrap_or_default()
    }

    fn begin_typing(&self, node: &Self::Node) {
        node.set_text_content(Some(""));
        let _ = node.class_list().add_1(&self.cursor_class);
    }

    fn write(&self, node: &Self::Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn end_typing(&self, node: &Self::Node) {
        let _ = node.class_list().remove_1(&self.cursor_class);
    }

    fn reveal(&self, node: &Self::Node, fade: bool) {
        let _ = node.class_list().remove_1(&self.hidden_class);
        if fade {
            let style = node.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("animation", &self.fade_animation);
        }
    }

    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }
}

/// Start the configured typing strategy. Returns how many sequences were started.
pub fn start(config: &TypewriterConfig, stop: StopSignal) -> Result<usize> {
    let document = document()?;
    let terminal = DomTerminal::new(document.clone(), config);
    let char_delay = CharDelay::from_config(config);

    match config.mode {
        TypewriterMode::Off => Ok(0),
        TypewriterMode::Scripted => {
            let script = config.script.clone();
            match script.entry() {
                Some(entry) if terminal.find(entry).is_some() => {
                    log!("typewriter: scripted sequence from #{}", entry)
                }
                _ => return Ok(0),
            }
            spawn_local(async move {
                let mut rng = SmallRng::from_entropy();
                run_script(&script, &terminal, char_delay, &mut rng, &stop).await;
            });
            Ok(1)
        }
        TypewriterMode::Declarative => {
            let targets: Vec<web_sys::HtmlElement> = query_all(&document, &config.selector)
                .into_iter()
                .filter_map(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
                .collect();
            log!("typewriter: {} scheduled elements", targets.len());

            for node in &targets {
                let schedule = TypingSchedule::from_attribute(
                    node.get_attribute(&config.delay_attribute).as_deref(),
                    char_delay,
                );
                let node = node.clone();
                let terminal = terminal.clone();
                let stop = stop.clone();
                let cursor_pause_ms = config.cursor_pause_ms;
                spawn_local(async move {
                    let mut rng = SmallRng::from_entropy();
                    run_scheduled(&terminal, &node, schedule, cursor_pause_ms, &mut rng, &stop)
                        .await;
                });
            }
            Ok(targets.len())
        }
    }
}
