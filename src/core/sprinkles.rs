//! Floating code sprinkles.
//!
//! A fixed pool of symbols drifting across the canvas. Each particle "breathes":
//! its opacity rises to a ceiling, falls back to zero, and at zero the particle is
//! re-rolled from scratch at a new random position.

use rand::Rng;

use super::config::SprinkleConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Index into the configured symbols
    pub symbol: usize,
    /// Font size in px
    pub size: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub opacity: f64,
    pub fade_speed: f64,
    pub fading_out: bool,
    /// Index into the configured colors
    pub color: usize,
    /// Canvas font, fixed for the particle's lifetime
    font: String,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(
        config: &SprinkleConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let speed = config.max_speed.abs();
        let mut velocity = || {
            if speed > 0.0 {
                rng.gen_range(-speed..speed)
            } else {
                0.0
            }
        };
        let velocity_x = velocity();
        let velocity_y = velocity();
        let size = config.size.sample(rng);

        Self {
            x: rng.gen_range(0.0..=width.max(0.0)),
            y: rng.gen_range(0.0..=height.max(0.0)),
            symbol: rng.gen_range(0..config.symbols.len().max(1)),
            size,
            velocity_x,
            velocity_y,
            opacity: config
                .opacity
                .sample(rng)
                .clamp(0.0, config.opacity_ceiling.max(0.0)),
            fade_speed: config.fade_speed.sample(rng),
            fading_out: rng.gen_bool(0.5),
            color: rng.gen_range(0..config.colors.len().max(1)),
            font: format!("bold {}px {}", size, config.font_family),
        }
    }

    /// Advance one frame. Returns true when the particle faded out and was re-rolled.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        config: &SprinkleConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> bool {
        self.x += self.velocity_x;
        self.y += self.velocity_y;

        let mut reset = false;
        if self.fading_out {
            self.opacity -= self.fade_speed;
            if self.opacity <= 0.0 {
                *self = Particle::spawn(config, width, height, rng);
                reset = true;
            }
        } else {
            self.opacity += self.fade_speed;
            if self.opacity >= config.opacity_ceiling {
                self.opacity = config.opacity_ceiling;
                self.fading_out = true;
            }
        }

        if self.x > width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }

        reset
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// `rgba(...)` fill for the current opacity
    pub fn fill_style(&self, config: &SprinkleConfig) -> String {
        let prefix = config
            .colors
            .get(self.color)
            .map(String::as_str)
            .unwrap_or("rgba(255, 255, 255, ");
        format!("{}{})", prefix, self.opacity)
    }

    pub fn text<'a>(&self, config: &'a SprinkleConfig) -> &'a str {
        config
            .symbols
            .get(self.symbol)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// What to paint for one particle this frame
#[derive(Debug, Clone, PartialEq)]
pub struct SprinkleDraw<'a> {
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub font: &'a str,
    pub fill: String,
}

pub struct SprinkleField {
    config: SprinkleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl SprinkleField {
    pub fn new<R: Rng + ?Sized>(
        config: SprinkleConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&config, width, height, rng))
            .collect();
        Self {
            config,
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Update every particle, then hand it to `draw`.
    pub fn frame<R, F>(&mut self, rng: &mut R, mut draw: F)
    where
        R: Rng + ?Sized,
        F: FnMut(SprinkleDraw<'_>),
    {
        for particle in &mut self.particles {
            particle.update(&self.config, self.width, self.height, rng);
            draw(SprinkleDraw {
                text: particle.text(&self.config),
                x: particle.x,
                y: particle.y,
                font: particle.font(),
                fill: particle.fill_style(&self.config),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Span;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(seed: u64) -> (SprinkleField, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = SprinkleField::new(SprinkleConfig::default(), 800.0, 600.0, &mut rng);
        (field, rng)
    }

    #[test]
    fn test_pool_size() {
        let (field, _) = field(1);
        assert_eq!(field.particles().len(), 40);
    }

    #[test]
    fn test_spawn_within_configured_ranges() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!((10.0..24.0).contains(&p.size));
            assert!(p.velocity_x.abs() <= 0.25 && p.velocity_y.abs() <= 0.25);
            assert!((0.1..0.6).contains(&p.opacity));
            assert!((0.005..0.015).contains(&p.fade_speed));
            assert!(p.symbol < config.symbols.len());
            assert!(p.color < config.colors.len());
        }
    }

    #[test]
    fn test_opacity_stays_bounded() {
        let (mut field, mut rng) = field(3);
        for _ in 0..5000 {
            field.frame(&mut rng, |_| {});
            for p in field.particles() {
                assert!(p.opacity >= 0.0 && p.opacity <= 0.6, "opacity {}", p.opacity);
            }
        }
    }

    #[test]
    fn test_spawned_opacity_never_negative() {
        let config = SprinkleConfig {
            opacity: Span::new(-0.5, 0.2),
            ..SprinkleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..1000 {
            let p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
            assert!((0.0..=0.6).contains(&p.opacity), "opacity {}", p.opacity);
        }
    }

    #[test]
    fn test_fading_in_flips_at_ceiling() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
        p.fading_out = false;
        p.opacity = 0.595;
        p.fade_speed = 0.01;

        assert!(!p.update(&config, 800.0, 600.0, &mut rng));
        assert!(p.fading_out);
        assert_eq!(p.opacity, 0.6);
    }

    #[test]
    fn test_fade_out_to_zero_rerolls_particle() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
        p.fading_out = true;
        p.opacity = 0.004;
        p.fade_speed = 0.005;
        let before = p.clone();

        assert!(p.update(&config, 800.0, 600.0, &mut rng));
        assert_ne!(p.x, before.x + before.velocity_x);
        assert_ne!(p.y, before.y + before.velocity_y);
        assert_ne!(p.velocity_x, before.velocity_x);
        assert_ne!(p.velocity_y, before.velocity_y);
        assert!(p.opacity > 0.0);
    }

    #[test]
    fn test_rerolls_change_symbol_and_color() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut symbol_changed = false;
        let mut color_changed = false;

        for _ in 0..50 {
            let mut p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
            p.fading_out = true;
            p.opacity = 0.0;
            let before = p.clone();
            assert!(p.update(&config, 800.0, 600.0, &mut rng));
            symbol_changed |= p.symbol != before.symbol;
            color_changed |= p.color != before.color;
        }
        assert!(symbol_changed && color_changed);
    }

    #[test]
    fn test_position_wraps_on_all_edges() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Particle::spawn(&config, 100.0, 50.0, &mut rng);
        p.fading_out = false;
        p.opacity = 0.2;

        p.x = 99.9;
        p.y = 49.9;
        p.velocity_x = 0.2;
        p.velocity_y = 0.2;
        p.update(&config, 100.0, 50.0, &mut rng);
        assert_eq!((p.x, p.y), (0.0, 0.0));

        p.velocity_x = -0.2;
        p.velocity_y = -0.2;
        p.update(&config, 100.0, 50.0, &mut rng);
        assert_eq!((p.x, p.y), (100.0, 50.0));
    }

    #[test]
    fn test_draw_styles() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let config = SprinkleConfig {
            size: Span::new(12.0, 12.0),
            ..config
        };
        let mut p = Particle::spawn(&config, 100.0, 100.0, &mut rng);
        p.color = 1;
        p.opacity = 0.25;
        p.symbol = 0;

        assert_eq!(p.font(), "bold 12px \"JetBrains Mono\", monospace");
        assert_eq!(p.fill_style(&config), "rgba(168, 85, 247, 0.25)");
        assert_eq!(p.text(&config), "<?php");
    }

    #[test]
    fn test_frame_draws_every_particle() {
        let (mut field, mut rng) = field(9);
        let mut count = 0;
        field.frame(&mut rng, |draw| {
            assert!(!draw.text.is_empty());
            count += 1;
        });
        assert_eq!(count, 40);
    }

    #[test]
    fn test_font_follows_rerolled_size() {
        let config = SprinkleConfig::default();
        let mut rng = StdRng::seed_from_u64(13);
        let mut p = Particle::spawn(&config, 800.0, 600.0, &mut rng);
        p.fading_out = true;
        p.opacity = 0.0;
        assert!(p.update(&config, 800.0, 600.0, &mut rng));
        assert_eq!(
            p.font(),
            format!("bold {}px \"JetBrains Mono\", monospace", p.size)
        );
    }

    #[test]
    fn test_resize_updates_bounds() {
        let (mut field, _) = field(10);
        field.resize(320.0, 240.0);
        assert_eq!(field.size(), (320.0, 240.0));
        assert_eq!(field.particles().len(), 40);
    }
}
