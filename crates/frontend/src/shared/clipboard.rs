//! Clipboard access through the Web Clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard. Fails when there is no window or the
/// browser refuses (insecure context, denied permission).
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
