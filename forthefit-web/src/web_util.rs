use futures::channel::oneshot;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{DragEvent, Event, FileReader, HtmlAnchorElement, HtmlInputElement};

/// First file selected in an `<input type="file">` change event, if any.
pub fn extract_file_from_html_input(event: Event) -> Option<web_sys::File> {
    let target = event.target()?;
    let input_element = target.dyn_into::<HtmlInputElement>().ok()?;
    let files = input_element.files()?;
    files.get(0)
}

/// First file carried by a drop event, if any. Dropping zero files is a
/// no-op for the caller.
pub fn extract_file_from_drop(event: DragEvent) -> Option<web_sys::File> {
    let files = event.data_transfer()?.files()?;
    files.get(0)
}

pub async fn read_file(file: web_sys::File) -> Result<Vec<u8>, JsValue> {
    let (tx, rx) = oneshot::channel::<Result<Vec<u8>, JsValue>>();

    let file_reader = FileReader::new()?;
    let reader = file_reader.clone();
    let onloadend_cb = Closure::once(move || {
        let result = match reader.result() {
            Ok(val) => val,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        };
        let array = js_sys::Uint8Array::new(&result);
        let data: Vec<u8> = array.to_vec();
        let _ = tx.send(Ok(data));
    });

    file_reader.set_onloadend(Some(onloadend_cb.as_ref().unchecked_ref()));
    file_reader.read_as_array_buffer(&file)?;

    rx.await.map_err(|e| JsValue::from_str(&e.to_string()))?
}

/// Derives a display-only preview handle from the slot content. Every handle
/// returned here must eventually pass through [`revoke_preview_url`] exactly
/// once.
pub fn create_preview_url(file: &web_sys::File) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("failed to create preview url: {e:?}");
            None
        }
    }
}

pub fn revoke_preview_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("failed to revoke preview url: {e:?}");
    }
}

/// Saves `href` (a `data:` URI) under `filename` through a transient anchor
/// element.
pub fn trigger_download(href: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

pub fn scroll_to_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn now_timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn sleep_promise(ms: i32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    })
}

pub fn sleep(ms: i32) -> wasm_bindgen_futures::JsFuture {
    wasm_bindgen_futures::JsFuture::from(sleep_promise(ms))
}
