use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, MouseEvent,
};

use crate::board::PieceImage;
use crate::config::CANVAS_ID;
use crate::error::LoadError;
use crate::geometry::{BoardGeometry, Rect};
use crate::render::Surface;

use super::env_error;

impl PieceImage for HtmlImageElement {
    fn width(&self) -> f64 {
        self.natural_width() as f64
    }

    fn height(&self) -> f64 {
        self.natural_height() as f64
    }
}

impl Surface<HtmlImageElement> for CanvasRenderingContext2d {
    fn fill_area(&mut self, rect: Rect, color: &str) {
        self.set_fill_style_str(color);
        self.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn outline_area(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(line_width);
        self.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64) {
        self.draw_image_with_html_image_element(image, x, y).ok();
    }
}

/// Find or create the board canvas and size it to the full staging area.
pub(crate) fn mount(
    document: &Document,
    geo: &BoardGeometry,
) -> Result<HtmlCanvasElement, LoadError> {
    let canvas: HtmlCanvasElement = if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        el.dyn_into()
            .map_err(|_| LoadError::Environment(format!("#{CANVAS_ID} is not a canvas")))?
    } else {
        let c: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(env_error)?
            .dyn_into()
            .map_err(|_| LoadError::Environment("created element is not a canvas".into()))?;
        c.set_id(CANVAS_ID);
        let body = document
            .body()
            .ok_or_else(|| LoadError::Environment("no document body".into()))?;
        body.append_child(&c).map_err(env_error)?;
        c
    };
    canvas.set_width(geo.total_width.ceil() as u32);
    canvas.set_height(geo.total_height.ceil() as u32);
    Ok(canvas)
}

pub(crate) fn context_2d(
    canvas: &HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, LoadError> {
    canvas
        .get_context("2d")
        .map_err(env_error)?
        .ok_or_else(|| LoadError::Environment("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| LoadError::Environment("2d context has unexpected type".into()))
}

/// Pointer position relative to the canvas' top-left corner.
pub(crate) fn canvas_point(canvas: &HtmlCanvasElement, evt: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (evt.client_x() as f64 - rect.left(), evt.client_y() as f64 - rect.top())
}
