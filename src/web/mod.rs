//! Browser glue: reads the page URL, loads the plan and images, mounts the
//! canvas and wires mouse input to the board.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Document, HtmlImageElement, UrlSearchParams, Window};

use crate::board::{Board, PointerOutcome};
use crate::config::{BoardRules, LaunchOptions};
use crate::error::LoadError;
use crate::render::{DEFAULT_PALETTE, render};

mod canvas;
mod input;
mod loader;

const PROGRESS_ID: &str = "pb-progress";
const PROGRESS_STYLE: &str = concat!(
    "position:fixed; top:10px; left:10px; font-family:'Fira Code', monospace; ",
    "font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); color:#fff; ",
    "border:1px solid #333; border-radius:6px; z-index:44;",
);
const SOLVED_MESSAGE: &str = "Congratulations! Puzzle solved!";

/// Everything one puzzle session owns. Shared by the mouse listeners.
pub(crate) struct Session {
    board: Board<HtmlImageElement>,
    ctx: CanvasRenderingContext2d,
    document: Document,
}

impl Session {
    fn redraw(&mut self) {
        render(&self.board, &mut self.ctx, &DEFAULT_PALETTE);
    }

    fn apply(&mut self, outcome: PointerOutcome) {
        if !outcome.needs_redraw() {
            return;
        }
        self.redraw();
        if let PointerOutcome::Snapped { id, solved } = outcome {
            let (placed, total) = self.board.progress();
            console::log!(format!("piece {id} snapped ({placed}/{total})"));
            show_progress(&self.document, placed, total);
            if solved {
                announce_solved(self.board.rules().win_delay_ms);
            }
        }
    }
}

pub(crate) fn start() -> Result<(), JsValue> {
    spawn_local(async {
        if let Err(err) = launch().await {
            console::error!("puzzle could not be initialised:", err.to_string());
            notify(&format!("Failed to load the puzzle: {err}"));
        }
    });
    Ok(())
}

async fn launch() -> Result<(), LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Environment("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| LoadError::Environment("no document".into()))?;
    let options = launch_options(&window)?;
    launch_with(&document, &options).await
}

/// Load everything first; the canvas is only mounted once the plan and every
/// image are in hand, so a failed load leaves the page untouched.
async fn launch_with(document: &Document, options: &LaunchOptions) -> Result<(), LoadError> {
    let plan = loader::fetch_plan(&options.plan_url()).await?;
    console::log!(format!(
        "plan {}: {} pieces, {}x{} target, {}x{} grid",
        options.plan,
        plan.piece_count(),
        plan.canvas.width,
        plan.canvas.height,
        plan.grid.cols,
        plan.grid.rows
    ));
    let images = loader::load_piece_images(&plan, options).await?;

    let seed = options.seed.unwrap_or_else(entropy_seed);
    let mut rng = Pcg32::seed_from_u64(seed);
    let board = Board::assemble(&plan, images, BoardRules::default(), &mut rng);

    let canvas = canvas::mount(document, board.geometry())?;
    let ctx = canvas::context_2d(&canvas)?;
    let (placed, total) = board.progress();
    show_progress(document, placed, total);

    let session = Rc::new(RefCell::new(Session {
        board,
        ctx,
        document: document.clone(),
    }));
    session.borrow_mut().redraw();
    input::attach(&canvas, session).map_err(env_error)?;
    console::log!(format!("board ready (seed {seed})"));
    Ok(())
}

fn launch_options(window: &Window) -> Result<LaunchOptions, LoadError> {
    let search = window.location().search().map_err(env_error)?;
    let params = UrlSearchParams::new_with_str(&search).map_err(env_error)?;
    LaunchOptions::from_query(|key| params.get(key))
}

fn entropy_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    js_sys::Date::now() as u64
}

fn announce_solved(delay_ms: u32) {
    console::log!("puzzle solved");
    // Give the last snap a frame to paint before the modal blocks.
    Timeout::new(delay_ms, || notify(SOLVED_MESSAGE)).forget();
}

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// "placed / total" badge in the corner of the page.
fn show_progress(document: &Document, placed: usize, total: usize) {
    let el = match document.get_element_by_id(PROGRESS_ID) {
        Some(el) => el,
        None => {
            let Some(body) = document.body() else {
                return;
            };
            let Ok(div) = document.create_element("div") else {
                return;
            };
            div.set_id(PROGRESS_ID);
            div.set_attribute("style", PROGRESS_STYLE).ok();
            if body.append_child(&div).is_err() {
                return;
            }
            div
        }
    };
    el.set_text_content(Some(&format!("{placed} / {total} placed")));
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn env_error(value: JsValue) -> LoadError {
    LoadError::Environment(describe(&value))
}
