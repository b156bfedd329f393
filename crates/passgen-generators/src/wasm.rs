use wasm_bindgen::prelude::*;

use crate::{ClipboardError, ErrorVariant, PasswordError};

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
    export interface PasswordError extends Error {
        name: "PasswordError";
        variant: "InvalidConfiguration";
    };

    export interface ClipboardError extends Error {
        name: "ClipboardError";
        variant: "ClipboardUnavailable";
    };
"#;

// Importing the JavaScript `Error` class instead of exporting a Rust struct lets the errors we
// throw be `instanceof Error` and print with a stack trace in the console.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Error)]
    type JsError;

    #[wasm_bindgen(constructor, js_class = Error)]
    fn new(message: String) -> JsError;

    #[wasm_bindgen(method, setter, structural)]
    fn set_name(this: &JsError, name: String);

    #[wasm_bindgen(method, setter, structural)]
    fn set_variant(this: &JsError, variant: String);
}

fn to_js_error<E: ErrorVariant + ToString>(name: &str, error: &E) -> JsValue {
    let js_error = JsError::new(error.to_string());
    js_error.set_name(name.to_owned());
    js_error.set_variant(error.error_variant().to_owned());
    js_error.into()
}

impl From<PasswordError> for JsValue {
    fn from(error: PasswordError) -> Self {
        to_js_error("PasswordError", &error)
    }
}

impl From<ClipboardError> for JsValue {
    fn from(error: ClipboardError) -> Self {
        to_js_error("ClipboardError", &error)
    }
}

/// Read the `variant` property set on errors thrown by this crate.
pub fn error_variant_of(error: &JsValue) -> Option<String> {
    js_sys::Reflect::get(error, &JsValue::from_str("variant"))
        .ok()
        .and_then(|variant| variant.as_string())
}
