use dioxus::prelude::*;

use crate::toast::Toaster;

pub fn copy_with_toast(text: String, toaster: Toaster) {
    spawn(async move {
        match write_clipboard(&text).await {
            Ok(()) => toaster.success("Copied to clipboard", None),
            Err(err) => {
                tracing::warn!("clipboard: {err}");
                toaster.error("Copy failed", Some(&err));
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("clipboard unavailable")?;
    let clipboard = window.navigator().clipboard();
    let promise = clipboard.write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "clipboard write failed")?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_clipboard(_text: &str) -> Result<(), String> {
    Err("clipboard unavailable".to_string())
}
