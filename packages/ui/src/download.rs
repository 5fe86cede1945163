//! Offering generated text as a file download.

/// Offer `contents` for download as `filename`.
///
/// In the browser this goes through a Blob object URL and a synthetic anchor
/// click. Native builds (used by tests and headless tooling) write the file
/// into the working directory instead.
pub fn download_csv(filename: &str, contents: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = trigger_browser_download(filename, contents) {
            tracing::error!("csv download failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match std::fs::write(filename, contents) {
            Ok(()) => tracing::info!("csv export written to {filename}"),
            Err(err) => tracing::error!("csv export failed: {err}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn trigger_browser_download(
    filename: &str,
    contents: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
