//! Fetching the plan and decoding piece images.

use futures_util::future::try_join_all;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, Response};

use crate::config::LaunchOptions;
use crate::error::LoadError;
use crate::plan::Plan;

use super::describe;

pub(crate) async fn fetch_plan(url: &str) -> Result<Plan, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Environment("no window".into()))?;
    let fetch_error = |value: JsValue| LoadError::Fetch {
        url: url.to_string(),
        reason: describe(&value),
    };

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_error)?
        .dyn_into()
        .map_err(fetch_error)?;
    if !response.ok() {
        return Err(LoadError::Fetch {
            url: url.to_string(),
            reason: format!("{} {}", response.status(), response.status_text()),
        });
    }
    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    let text = body.as_string().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        reason: "response body is not text".into(),
    })?;
    Plan::from_json(&text)
}

/// Resolves once the browser has decoded the image, so its natural size is known.
pub(crate) async fn load_image(url: String) -> Result<HtmlImageElement, LoadError> {
    let img = HtmlImageElement::new().map_err(|_| LoadError::Image { url: url.clone() })?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    img.set_src(&url);
    if JsFuture::from(promise).await.is_err() {
        return Err(LoadError::Image { url });
    }
    Ok(img)
}

/// All piece images in plan order; the first failure aborts the lot.
pub(crate) async fn load_piece_images(
    plan: &Plan,
    options: &LaunchOptions,
) -> Result<Vec<HtmlImageElement>, LoadError> {
    try_join_all(
        plan.pieces
            .iter()
            .map(|spec| load_image(options.asset_url(&spec.file_rel_path))),
    )
    .await
}
