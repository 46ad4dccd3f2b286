//! Mouse listeners feeding the board. Every handler runs to completion on the
//! browser's event loop, so the session is never borrowed twice.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent};

use crate::board::{Board, PointerOutcome};

use super::Session;
use super::canvas::canvas_point;

type Handler = fn(&mut Board<HtmlImageElement>, f64, f64) -> PointerOutcome;

pub(crate) fn attach(
    canvas: &HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
) -> Result<(), JsValue> {
    listen(canvas, "mousedown", session.clone(), |b, x, y| b.pointer_down(x, y))?;
    listen(canvas, "mousemove", session.clone(), |b, x, y| b.pointer_move(x, y))?;
    listen(canvas, "mouseup", session.clone(), |b, _, _| b.pointer_up())?;
    // Leaving the canvas counts as letting go.
    listen(canvas, "mouseout", session, |b, _, _| b.pointer_leave())?;
    Ok(())
}

fn listen(
    canvas: &HtmlCanvasElement,
    event: &str,
    session: Rc<RefCell<Session>>,
    handler: Handler,
) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let (x, y) = canvas_point(&target, &evt);
        let mut state = session.borrow_mut();
        let outcome = handler(&mut state.board, x, y);
        state.apply(outcome);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
