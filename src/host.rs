//! Host Page Interop
//!
//! Globals the server-rendered page may define (`window.portfolioData`,
//! `window.siteConfig`) and the Bootstrap modal API.

use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Read `window[name]` and deserialize it. `Ok(None)` when absent or null.
pub fn read_global<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = Reflect::get(&window, &JsValue::from_str(name)).map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value).map(Some).map_err(|e| e.to_string())
}

/// `bootstrap.Modal.getOrCreateInstance(el)`
fn bootstrap_modal(el: &Element) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    let modal_class = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))?;
    let factory: Function = Reflect::get(&modal_class, &JsValue::from_str("getOrCreateInstance"))?.dyn_into()?;
    factory.call1(&modal_class, el)
}

/// Show the Bootstrap modal bound to `el`
pub fn show_bootstrap_modal(el: &Element) -> Result<(), JsValue> {
    let instance = bootstrap_modal(el)?;
    let show: Function = Reflect::get(&instance, &JsValue::from_str("show"))?.dyn_into()?;
    show.call0(&instance)?;
    Ok(())
}
