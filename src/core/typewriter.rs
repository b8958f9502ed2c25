//! Terminal typewriter effect.
//!
//! Two strategies drive the same typing routine:
//! - [`run_script`]: one ordered [`TerminalScript`] of pauses, typed elements and
//!   revealed result blocks
//! - [`run_scheduled`]: one element typed after its own [`TypingSchedule`] delay;
//!   the browser layer starts one of these per element, concurrently
//!
//! Both talk to the page only through the [`Terminal`] trait.

use std::future::Future;

use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::TypewriterConfig;
use super::task::StopSignal;

/// One step of a scripted terminal session
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[display("pause {_0}ms")]
    Pause(u32),
    /// Type out the element with this id
    #[display("type #{_0}")]
    Type(String),
    /// Unhide the element with this id, optionally fading it in
    #[display("reveal #{id}")]
    Reveal { id: String, fade: bool },
}

impl Step {
    fn typed(id: &str) -> Self {
        Step::Type(id.to_string())
    }

    fn reveal(id: &str, fade: bool) -> Self {
        Step::Reveal {
            id: id.to_string(),
            fade,
        }
    }
}

/// Ordered steps; in JSON a plain array such as `[{"pause": 500}, {"type": "cmd"}]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminalScript {
    steps: Vec<Step>,
}

impl Default for TerminalScript {
    fn default() -> Self {
        Self::standard()
    }
}

impl TerminalScript {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Three commands, each followed by its output, then the status bar.
    pub fn standard() -> Self {
        Self::new(vec![
            Step::Pause(500),
            Step::typed("typewriter-1"),
            Step::Pause(300),
            Step::reveal("cmd-result-1", true),
            Step::Pause(1000),
            Step::reveal("cmd-block-2", false),
            Step::Pause(500),
            Step::typed("typewriter-2"),
            Step::Pause(300),
            Step::reveal("cmd-result-2", true),
            Step::Pause(1500),
            Step::reveal("cmd-block-3", false),
            Step::Pause(500),
            Step::typed("typewriter-3"),
            Step::Pause(300),
            Step::reveal("cmd-result-3", true),
            Step::Pause(500),
            Step::reveal("active-line", false),
            Step::reveal("status-bar", true),
        ])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Id of the first typed element. The script only runs when it is on the page.
    pub fn entry(&self) -> Option<&str> {
        self.steps.iter().find_map(|step| match step {
            Step::Type(id) => Some(id.as_str()),
            _ => None,
        })
    }
}

/// Randomized pause after each typed character: `min_ms + [0, spread_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharDelay {
    pub min_ms: u32,
    pub spread_ms: u32,
}

impl CharDelay {
    pub fn new(min_ms: u32, spread_ms: u32) -> Self {
        Self { min_ms, spread_ms }
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(config.char_delay_min_ms, config.char_delay_spread_ms)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.spread_ms == 0 {
            self.min_ms
        } else {
            self.min_ms.saturating_add(rng.gen_range(0..self.spread_ms))
        }
    }
}

/// Per-element start time for declarative typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingSchedule {
    pub start_delay_ms: u32,
    pub char_delay: CharDelay,
}

impl TypingSchedule {
    /// Read the delay attribute; missing or unparsable values start immediately.
    pub fn from_attribute(value: Option<&str>, char_delay: CharDelay) -> Self {
        let start_delay_ms = value
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .map(|ms| ms.min(f64::from(u32::MAX)) as u32)
            .unwrap_or(0);
        Self {
            start_delay_ms,
            char_delay,
        }
    }
}

/// Character-by-character progress through one element's text
#[derive(Debug, Clone)]
pub struct TypingTask {
    chars: Vec<char>,
    typed: usize,
}

impl TypingTask {
    /// Surrounding whitespace is not typed.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.trim().chars().collect(),
            typed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Type one more character; returns the visible text.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

/// Page elements the typewriter works on
pub trait Terminal {
    type Node;

    fn find(&self, id: &str) -> Option<Self::Node>;

    /// Current text of the element
    fn text(&self, node: &Self::Node) -> String;

    /// Clear the element and show the typing cursor.
    fn begin_typing(&self, node: &Self::Node);

    fn write(&self, node: &Self::Node, text: &str);

    /// Hide the typing cursor.
    fn end_typing(&self, node: &Self::Node);

    fn reveal(&self, node: &Self::Node, fade: bool);

    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Type `node` out. Returns false when stopped before the last character.
///
/// The cursor is left on; callers decide when it goes away.
pub async fn type_out<T, R>(
    terminal: &T,
    node: &T::Node,
    delay: CharDelay,
    rng: &mut R,
    stop: &StopSignal,
) -> bool
where
    T: Terminal,
    R: Rng + ?Sized,
{
    let mut task = TypingTask::new(&terminal.text(node));
    terminal.begin_typing(node);

    while let Some(visible) = task.advance() {
        if stop.is_stopped() {
            return false;
        }
        terminal.write(node, &visible);
        terminal.sleep(delay.sample(rng)).await;
    }
    true
}

/// Play `script` step by step. Missing elements are skipped.
pub async fn run_script<T, R>(
    script: &TerminalScript,
    terminal: &T,
    delay: CharDelay,
    rng: &mut R,
    stop: &StopSignal,
) where
    T: Terminal,
    R: Rng + ?Sized,
{
    for step in script.steps() {
        if stop.is_stopped() {
            return;
        }
        match step {
            Step::Pause(ms) => terminal.sleep(*ms).await,
            Step::Type(id) => {
                if let Some(node) = terminal.find(id) {
                    if type_out(terminal, &node, delay, rng, stop).await {
                        terminal.end_typing(&node);
                    }
                }
            }
            Step::Reveal { id, fade } => {
                if let Some(node) = terminal.find(id) {
                    terminal.reveal(&node, *fade);
                }
            }
        }
    }
}

/// Wait for the schedule, type `node`, then drop the cursor after `cursor_pause_ms`.
pub async fn run_scheduled<T, R>(
    terminal: &T,
    node: &T::Node,
    schedule: TypingSchedule,
    cursor_pause_ms: u32,
    rng: &mut R,
    stop: &StopSignal,
) where
    T: Terminal,
    R: Rng + ?Sized,
{
    terminal.sleep(schedule.start_delay_ms).await;
    if stop.is_stopped() {
        return;
    }
    if !type_out(terminal, node, schedule.char_delay, rng, stop).await {
        return;
    }
    terminal.sleep(cursor_pause_ms).await;
    if !stop.is_stopped() {
        terminal.end_typing(node);
    }
}
