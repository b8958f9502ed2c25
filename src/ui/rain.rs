//! Matrix rain canvas animation

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::logging::{log, warn};
use leptos::web_sys;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::canvas::CanvasSurface;
use super::dom::{document, window};
use crate::core::Result;
use crate::core::config::RainConfig;
use crate::core::rain::MatrixRain;

/// Start the rain on its canvas. Dropping or cancelling the interval stops it.
pub fn start(config: &RainConfig) -> Result<Option<Interval>> {
    let Some(surface) = CanvasSurface::find(&config.canvas_id)? else {
        return Ok(None);
    };
    let (width, height) = surface.fit_to_window()?;
    let rain = Rc::new(RefCell::new(MatrixRain::new(config, width, height)));

    {
        let rain = Rc::clone(&rain);
        surface.on_resize(move |width, height| rain.borrow_mut().resize(width, height))?;
    }

    log!(
        "matrix rain: {} columns every {}ms",
        rain.borrow().columns(),
        config.interval_ms
    );

    let root = document()?.document_element();
    let style = RainStyle {
        font: format!("{}px {}", config.font_size, config.font_family),
        fade: format!("rgba(0, 0, 0, {})", config.fade_alpha),
        color_property: config.color_property.clone(),
    };
    let mut rng = SmallRng::from_entropy();
    let mut failed = false;

    let interval = Interval::new(config.interval_ms, move || {
        let result = draw(
            surface.context(),
            &mut rain.borrow_mut(),
            &mut rng,
            root.as_ref(),
            &style,
        );
        if let Err(err) = result {
            // Report once, keep ticking
            if !failed {
                warn!("matrix rain frame failed: {}", err);
                failed = true;
            }
        }
    });

    Ok(Some(interval))
}

struct RainStyle {
    font: String,
    fade: String,
    color_property: String,
}

fn draw(
    ctx: &web_sys::CanvasRenderingContext2d,
    rain: &mut MatrixRain,
    rng: &mut SmallRng,
    root: Option<&web_sys::Element>,
    style: &RainStyle,
) -> Result<()> {
    let (width, height) = rain.size();

    // Erase a little of the previous frames to leave fading trails
    ctx.set_global_composite_operation("destination-out")?;
    ctx.set_fill_style_str(&style.fade);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_global_composite_operation("source-over")?;

    if let Some(color) = root.and_then(|root| css_variable(root, &style.color_property)) {
        ctx.set_fill_style_str(&color);
    }
    ctx.set_font(&style.font);

    let mut result = Ok(());
    let mut buf = [0u8; 4];
    rain.tick(rng, |glyph| {
        if result.is_ok() {
            let text = glyph.glyph.encode_utf8(&mut buf);
            result = ctx.fill_text(text, glyph.x, glyph.y).map_err(Into::into);
        }
    });
    result
}

/// Computed value of a CSS custom property, read live so theme switches apply
fn css_variable(root: &web_sys::Element, property: &str) -> Option<String> {
    let style = window().ok()?.get_computed_style(root).ok().flatten()?;
    let value = style.get_property_value(property).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
