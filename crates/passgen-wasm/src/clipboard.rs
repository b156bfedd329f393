use js_sys::{Promise, Reflect};
use passgen_generators::{Clipboard, ClipboardError};
use tracing::warn;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Clipboard)]
    type JsClipboard;

    #[wasm_bindgen(method, catch, js_name = writeText)]
    fn write_text(this: &JsClipboard, text: &str) -> Result<Promise, JsValue>;
}

/// The browser clipboard, reached through `navigator.clipboard`.
///
/// The API is only exposed in secure contexts and may be missing entirely outside of a browser.
/// Both cases surface as [`ClipboardError::Unavailable`].
#[derive(Debug, Default)]
pub struct NavigatorClipboard;

impl NavigatorClipboard {
    fn resolve() -> Result<JsClipboard, ClipboardError> {
        let navigator = property(&js_sys::global(), "navigator")?;
        let clipboard = property(&navigator, "clipboard")?;
        Ok(clipboard.unchecked_into())
    }
}

impl Clipboard for NavigatorClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let promise = Self::resolve()?
            .write_text(text)
            .map_err(|error| ClipboardError::Unavailable(describe(&error)))?;

        // The write is acknowledged asynchronously, a rejection can only be reported
        spawn_local(async move {
            if let Err(error) = JsFuture::from(promise).await {
                warn!(error = %describe(&error), "Clipboard write was rejected");
            }
        });

        Ok(())
    }
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, ClipboardError> {
    let value = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|error| ClipboardError::Unavailable(describe(&error)))?;

    if value.is_undefined() || value.is_null() {
        return Err(ClipboardError::Unavailable(format!("{name} is not available")));
    }
    Ok(value)
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
