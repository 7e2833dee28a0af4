use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, Response};

use crate::error::{VizError, VizResult};

pub async fn fetch_text(url: &str) -> VizResult<String> {
    let window = web_sys::window().ok_or_else(|| VizError::asset("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| VizError::asset(format!("fetch {url}: {err:?}")))?
        .dyn_into::<Response>()
        .map_err(|_| VizError::asset(format!("fetch {url}: not a response")))?;
    if !response.ok() {
        return Err(VizError::asset(format!("fetch {url}: HTTP {}", response.status())));
    }
    let promise = response
        .text()
        .map_err(|err| VizError::asset(format!("read {url}: {err:?}")))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| VizError::asset(format!("read {url}: {err:?}")))?
        .as_string()
        .ok_or_else(|| VizError::asset(format!("read {url}: body is not text")))
}

/// Loads and decodes an image so it can be uploaded as a texture.
pub async fn load_image(url: &str) -> VizResult<HtmlImageElement> {
    let image = HtmlImageElement::new().map_err(|err| VizError::asset(format!("{err:?}")))?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|err| VizError::asset(format!("decode {url}: {err:?}")))?;
    if image.natural_width() == 0 || image.natural_height() == 0 {
        return Err(VizError::asset(format!("decode {url}: empty image")));
    }
    Ok(image)
}
