use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortSignal, Document, FormData, Headers, RequestCredentials, RequestInit, Response, Url,
    Window,
};

/// Retrieve the global `window` object, absent outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Whether a rejected fetch was cancelled through its abort signal.
#[must_use]
pub fn is_abort_error(value: &JsValue) -> bool {
    value
        .dyn_ref::<web_sys::DomException>()
        .is_some_and(|err| err.name() == "AbortError")
}

/// Toggle a class on the document root, used to suppress page scroll while
/// the lightbox is open.
pub fn set_root_class(class: &str, on: bool) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    let list = root.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        console_error(&format!(
            "failed to toggle root class {class}: {}",
            js_error_message(&err)
        ));
    }
}

/// Rewrite the address bar's `variant` query parameter without navigating.
pub fn replace_variant_param(variant_id: u64) {
    let Some(win) = window() else { return };
    let Ok(href) = win.location().href() else {
        return;
    };
    let Ok(url) = Url::new(&href) else { return };
    url.search_params()
        .set("variant", &variant_id.to_string());
    let href = url.href();
    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(href.as_str()));
    }
}

/// The `variant` query parameter of the current page, when present.
#[must_use]
pub fn variant_param() -> Option<u64> {
    let win = window()?;
    let href = win.location().href().ok()?;
    let url = Url::new(&href).ok()?;
    url.search_params().get("variant")?.parse().ok()
}

async fn response_text(response: Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}

/// Fetch a same-origin URL and return its body, honoring an abort signal.
///
/// # Errors
///
/// Returns the rejection value when the request fails, is aborted, or the
/// body cannot be read.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(url: &str, signal: Option<&AbortSignal>) -> Result<String, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let init = RequestInit::new();
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_signal(signal);
    let resp = JsFuture::from(win.fetch_with_str_and_init(url, &init)).await?;
    response_text(resp.dyn_into()?).await
}

/// Fetch a JSON endpoint with an `Accept` header and return the raw body.
///
/// # Errors
///
/// Returns the rejection value when the request or body read fails.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_json_text(url: &str) -> Result<String, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let headers = Headers::new()?;
    headers.append("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_headers(headers.as_ref());
    let resp = JsFuture::from(win.fetch_with_str_and_init(url, &init)).await?;
    response_text(resp.dyn_into()?).await
}

/// Outcome of a form-encoded POST: HTTP success flag plus the raw body.
#[derive(Debug, Clone)]
pub struct PostOutcome {
    pub ok: bool,
    pub body: String,
}

/// POST form data to a same-origin endpoint expecting a JSON response.
///
/// # Errors
///
/// Returns the rejection value when the request or body read fails; HTTP
/// error statuses are reported through [`PostOutcome::ok`] instead.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_form(url: &str, form: &FormData) -> Result<PostOutcome, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let headers = Headers::new()?;
    headers.append("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(form.as_ref());
    let resp = JsFuture::from(win.fetch_with_str_and_init(url, &init)).await?;
    let resp: Response = resp.dyn_into()?;
    let ok = resp.ok();
    let body = response_text(resp).await?;
    Ok(PostOutcome { ok, body })
}
