//! Decoration configuration.
//!
//! Every field defaults to the value the landing page markup expects, so an empty
//! object (or `DecorConfig::default()`) is a complete configuration. Partial objects
//! are accepted: each section carries `#[serde(default)]`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{DecorError, Result};
use super::typewriter::TerminalScript;

/// Top-level configuration for all decorations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    pub theme: ThemeConfig,
    pub drawer: DrawerConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub rain: RainConfig,
    pub sprinkles: SprinkleConfig,
    pub typewriter: TypewriterConfig,
}

impl DecorConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DecorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the animations cannot work with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(DecorError::InvalidConfig(msg.to_string()));

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return invalid("reveal.threshold must be within [0, 1]");
        }
        if self.rain.font_size <= 0.0 {
            return invalid("rain.font_size must be positive");
        }
        if self.rain.glyphs.is_empty() {
            return invalid("rain.glyphs must not be empty");
        }
        if self.rain.interval_ms == 0 {
            return invalid("rain.interval_ms must be positive");
        }
        if !(0.0..=1.0).contains(&self.rain.reset_probability) {
            return invalid("rain.reset_probability must be within [0, 1]");
        }
        if self.sprinkles.symbols.is_empty() {
            return invalid("sprinkles.symbols must not be empty");
        }
        if self.sprinkles.colors.is_empty() {
            return invalid("sprinkles.colors must not be empty");
        }
        if self.sprinkles.opacity_ceiling <= 0.0 {
            return invalid("sprinkles.opacity_ceiling must be positive");
        }
        if self.sprinkles.opacity.min < 0.0 {
            return invalid("sprinkles.opacity must not be negative");
        }
        if self.sprinkles.opacity.max > self.sprinkles.opacity_ceiling {
            return invalid("sprinkles.opacity must not exceed sprinkles.opacity_ceiling");
        }
        if self.sprinkles.fade_speed.min <= 0.0 {
            return invalid("sprinkles.fade_speed must be positive");
        }
        for (name, span) in [
            ("sprinkles.size", self.sprinkles.size),
            ("sprinkles.opacity", self.sprinkles.opacity),
            ("sprinkles.fade_speed", self.sprinkles.fade_speed),
        ] {
            if span.min > span.max {
                return Err(DecorError::InvalidConfig(format!(
                    "{name}: min is greater than max"
                )));
            }
        }
        if self
            .typewriter
            .char_delay_min_ms
            .checked_add(self.typewriter.char_delay_spread_ms)
            .is_none()
        {
            return invalid("typewriter char delay overflows");
        }
        Ok(())
    }
}

/// Half-open numeric range `[min, max)` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform sample; a degenerate span always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            self.min
        } else {
            rng.gen_range(self.min..self.max)
        }
    }
}

/// Theme toggle bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key holding "light" or "dark"
    pub storage_key: String,
    pub toggle_id: String,
    /// Selector of the icon inside the toggle control
    pub icon_selector: String,
    /// Attribute set on the document element
    pub attribute: String,
    /// Class present on the document element in dark mode
    pub dark_class: String,
    /// Icon class shown while dark (offers switching to light)
    pub dark_icon_class: String,
    /// Icon class shown while light
    pub light_icon_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            icon_selector: "i".to_string(),
            attribute: "data-theme".to_string(),
            dark_class: "dark".to_string(),
            dark_icon_class: "fa-sun".to_string(),
            light_icon_class: "fa-moon".to_string(),
            media_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

/// Mobile navigation drawer bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub opener_id: String,
    pub closer_id: String,
    pub menu_id: String,
    pub link_selector: String,
    /// Class present on the menu while it is closed
    pub hidden_class: String,
    /// Class present on the body while the menu is open
    pub scroll_lock_class: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            opener_id: "mobile-menu-btn".to_string(),
            closer_id: "close-menu".to_string(),
            menu_id: "mobile-menu".to_string(),
            link_selector: ".mobile-link".to_string(),
            hidden_class: "translate-x-full".to_string(),
            scroll_lock_class: "overflow-hidden".to_string(),
        }
    }
}

/// Smooth scrolling for in-page anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
    /// Height of the fixed header kept clear above the target, in px
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".to_string(),
            header_offset: 100.0,
        }
    }
}

/// Scroll-reveal observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub active_class: String,
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            active_class: "active".to_string(),
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

/// Matrix rain canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub canvas_id: String,
    pub glyphs: String,
    /// Column width and row height, in px
    pub font_size: f64,
    pub font_family: String,
    pub interval_ms: u32,
    /// Alpha of the erasing overlay drawn every tick
    pub fade_alpha: f64,
    /// Per-tick chance that a drop below the bottom restarts at the top
    pub reset_probability: f64,
    /// CSS custom property read for the glyph color
    pub color_property: String,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            canvas_id: "matrix-rain".to_string(),
            glyphs: "0123456789ABCDEF@#$%&<>?/|{}[]".to_string(),
            font_size: 14.0,
            font_family: "monospace".to_string(),
            interval_ms: 50,
            fade_alpha: 0.05,
            reset_probability: 0.025,
            color_property: "--accent-color".to_string(),
        }
    }
}

/// Floating code sprinkles canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprinkleConfig {
    pub canvas_id: String,
    pub count: usize,
    pub symbols: Vec<String>,
    /// `rgba(r, g, b, ` prefixes; opacity and `)` are appended when drawing
    pub colors: Vec<String>,
    pub font_family: String,
    /// Font size in px
    pub size: Span,
    /// Maximum speed per axis, in px per frame
    pub max_speed: f64,
    /// Opacity a particle starts with after a reset
    pub opacity: Span,
    /// Opacity change per frame
    pub fade_speed: Span,
    /// Opacity at which a particle starts fading out
    pub opacity_ceiling: f64,
}

impl Default for SprinkleConfig {
    fn default() -> Self {
        let symbols = [
            "<?php", "->", "::", "=>", "use", "class", "public", "$this", "dd()", "Route", "@if",
            "{{ }}", "[]", ";",
        ];
        let colors = [
            "rgba(255, 45, 32, ",
            "rgba(168, 85, 247, ",
            "rgba(236, 72, 153, ",
            "rgba(255, 255, 255, ",
        ];
        Self {
            canvas_id: "code-sprinkles".to_string(),
            count: 40,
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            font_family: "\"JetBrains Mono\", monospace".to_string(),
            size: Span::new(10.0, 24.0),
            max_speed: 0.25,
            opacity: Span::new(0.1, 0.6),
            fade_speed: Span::new(0.005, 0.015),
            opacity_ceiling: 0.6,
        }
    }
}

/// Which typing strategy drives the terminal blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypewriterMode {
    /// One ordered script of pauses, typed elements and reveals
    #[default]
    Scripted,
    /// Every `[data-typewriter]` element runs on its own `data-delay`
    Declarative,
    /// No typing effect
    Off,
}

/// Terminal typing effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub mode: TypewriterMode,
    /// Steps of the scripted sequence
    pub script: TerminalScript,
    pub selector: String,
    pub delay_attribute: String,
    pub cursor_class: String,
    pub hidden_class: String,
    pub fade_animation: String,
    pub char_delay_min_ms: u32,
    pub char_delay_spread_ms: u32,
    /// Pause before the cursor disappears in declarative mode
    pub cursor_pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            mode: TypewriterMode::Scripted,
            script: TerminalScript::standard(),
            selector: "[data-typewriter]".to_string(),
            delay_attribute: "data-delay".to_string(),
            cursor_class: "typing-cursor".to_string(),
            hidden_class: "hidden".to_string(),
            fade_animation: "fadeIn 0.5s forwards".to_string(),
            char_delay_min_ms: 30,
            char_delay_spread_ms: 50,
            cursor_pause_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DecorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = DecorConfig::from_json("{}").unwrap();
        assert_eq!(config, DecorConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = DecorConfig::from_json(
            r#"{
                "scroll": { "header_offset": 64 },
                "typewriter": { "mode": "declarative" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.scroll.header_offset, 64.0);
        assert_eq!(config.scroll.anchor_selector, "a[href^=\"#\"]");
        assert_eq!(config.typewriter.mode, TypewriterMode::Declarative);
        assert_eq!(config.typewriter.script, TerminalScript::standard());
        assert_eq!(config.rain, RainConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = DecorConfig::from_json("{ \"rain\": ").unwrap_err();
        assert!(matches!(err, DecorError::Config(_)));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = DecorConfig::from_json(r#"{ "typewriter": { "mode": "both" } }"#).unwrap_err();
        assert!(matches!(err, DecorError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DecorConfig::default();
        config.rain.font_size = 0.0;
        assert!(matches!(
            config.validate(),
            Err(DecorError::InvalidConfig(_))
        ));

        let mut config = DecorConfig::default();
        config.reveal.threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = DecorConfig::default();
        config.sprinkles.symbols.clear();
        assert!(config.validate().is_err());

        let mut config = DecorConfig::default();
        config.sprinkles.size = Span::new(30.0, 10.0);
        assert!(config.validate().is_err());

        let mut config = DecorConfig::default();
        config.sprinkles.opacity = Span::new(0.1, 0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_opacity() {
        let err = DecorConfig::from_json(r#"{"sprinkles":{"opacity":{"min":-0.5,"max":0.2}}}"#)
            .unwrap_err();
        assert!(matches!(err, DecorError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_overflowing_char_delay() {
        let err = DecorConfig::from_json(
            r#"{"typewriter":{"char_delay_min_ms":4294967295,"char_delay_spread_ms":50}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecorError::InvalidConfig(_)));

        let mut config = DecorConfig::default();
        config.typewriter.char_delay_min_ms = u32::MAX;
        config.typewriter.char_delay_spread_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_typewriter_script() {
        let config = DecorConfig::from_json(
            r#"{"typewriter":{"script":[{"type":"prompt"},{"pause":250},{"reveal":{"id":"answer","fade":false}}]}}"#,
        )
        .unwrap();
        assert_eq!(config.typewriter.script.entry(), Some("prompt"));
        assert_eq!(config.typewriter.script.steps().len(), 3);
        assert_eq!(config.typewriter.cursor_class, "typing-cursor");
    }

    #[test]
    fn test_span_sample_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let span = Span::new(10.0, 24.0);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!((10.0..24.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_span_returns_min() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Span::new(0.5, 0.5).sample(&mut rng), 0.5);
        assert_eq!(Span::new(0.5, 0.1).sample(&mut rng), 0.5);
    }
}
