//! Full-window background canvas shared by the rain and sprinkle animators

use leptos::web_sys;
use wasm_bindgen::JsCast;

use super::dom::{document, element_by_id, listen, window};
use crate::core::{DecorError, Result};

#[derive(Clone)]
pub struct CanvasSurface {
    canvas: web_sys::HtmlCanvasElement,
    context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// The canvas with `id` and its 2d context; `None` if the page has no such canvas.
    pub fn find(id: &str) -> Result<Option<Self>> {
        let document = document()?;
        let Some(canvas) = element_by_id::<web_sys::HtmlCanvasElement>(&document, id) else {
            return Ok(None);
        };
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| DecorError::Js(format!("#{id} has no 2d context")))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| DecorError::Js(format!("#{id} context is not 2d")))?;
        Ok(Some(Self { canvas, context }))
    }

    pub fn context(&self) -> &web_sys::CanvasRenderingContext2d {
        &self.context
    }

    /// Match the canvas to the window size; returns the new size.
    pub fn fit_to_window(&self) -> Result<(f64, f64)> {
        let window = window()?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        Ok((width, height))
    }

    /// Refit on every window resize and report the new size.
    pub fn on_resize<F>(&self, mut resized: F) -> Result<()>
    where
        F: FnMut(f64, f64) + 'static,
    {
        let surface = self.clone();
        listen(&window()?, "resize", move |_| {
            if let Ok((width, height)) = surface.fit_to_window() {
                resized(width, height);
            }
        })
    }
}
