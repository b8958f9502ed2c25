//! Code sprinkles canvas animation

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::log;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::canvas::CanvasSurface;
use super::dom::window;
use crate::core::Result;
use crate::core::StopSignal;
use crate::core::config::SprinkleConfig;
use crate::core::sprinkles::SprinkleField;

/// Start the animation-frame loop. It ends on the frame after `stop` fires.
///
/// Returns false when the page has no sprinkles canvas.
pub fn start(config: &SprinkleConfig, stop: StopSignal) -> Result<bool> {
    let Some(surface) = CanvasSurface::find(&config.canvas_id)? else {
        return Ok(false);
    };
    let window = window()?;
    let (width, height) = surface.fit_to_window()?;
    let mut rng = SmallRng::from_entropy();
    let field = Rc::new(RefCell::new(SprinkleField::new(
        config.clone(),
        width,
        height,
        &mut rng,
    )));

    {
        let field = Rc::clone(&field);
        surface.on_resize(move |width, height| field.borrow_mut().resize(width, height))?;
    }

    log!("code sprinkles: {} particles", config.count);

    let frame = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
    let frame_for_loop = Rc::clone(&frame);

    let animate = move || {
        if stop.is_stopped() {
            // Drop our own closure to end the loop
            frame_for_loop.borrow_mut().take();
            return;
        }

        let ctx = surface.context();
        let mut field = field.borrow_mut();
        let (width, height) = field.size();
        ctx.clear_rect(0.0, 0.0, width, height);
        field.frame(&mut rng, |draw| {
            ctx.set_font(&draw.font);
            ctx.set_fill_style_str(&draw.fill);
            let _ = ctx.fill_text(draw.text, draw.x, draw.y);
        });

        // Request next frame
        if let Some(window) = leptos::web_sys::window() {
            if let Some(closure) = frame_for_loop.borrow().as_ref() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }
    };

    *frame.borrow_mut() = Some(Closure::new(animate));

    // Start animation loop
    if let Some(closure) = frame.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }

    Ok(true)
}
