use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("host page does not provide {0}")]
    MissingCapability(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_wasm_bindgen::Error> for DomError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        DomError::Js(value.to_string())
    }
}

/// Serializes plain-object options for a JS library (maps become objects, not `Map`s).
pub fn to_js_options<T: Serialize>(value: &T) -> Result<JsValue, DomError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

pub fn get_window() -> Result<Window, DomError> {
    window().ok_or(DomError::NoWindow)
}

pub fn get_document() -> Result<Document, DomError> {
    get_window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> f64 {
    get_window()
        .and_then(|w| w.scroll_y().map_err(DomError::from))
        .unwrap_or(0.0)
}

pub fn viewport_width() -> Option<f64> {
    get_window().ok()?.inner_width().ok()?.as_f64()
}

/// Looks up a global exposed by a script tag on the host page.
pub fn capability(name: &'static str) -> Result<JsValue, DomError> {
    let window = get_window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(DomError::MissingCapability(name));
    }
    Ok(value)
}

pub fn capability_function(name: &'static str) -> Result<Function, DomError> {
    capability(name)?
        .dyn_into::<Function>()
        .map_err(|_| DomError::MissingCapability(name))
}

/// Walks `a.b.c` style property paths on a JS object.
pub fn get_path(root: &JsValue, path: &[&str]) -> Result<JsValue, DomError> {
    path.iter().try_fold(root.clone(), |value, key| {
        let next = Reflect::get(&value, &JsValue::from_str(key))?;
        if next.is_undefined() || next.is_null() {
            return Err(DomError::Js(format!("missing property {}", key)));
        }
        Ok(next)
    })
}

pub fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), DomError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let target = get_path(root, parents)?;
    Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}

fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    get_window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls so the element with `id` sits just below the fixed navbar.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let target = get_document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        log::debug!("No scroll target #{}", id);
        return;
    };
    let top = target.offset_top() as f64 - config::SCROLL_TARGET_OFFSET_PX;
    if let Err(e) = smooth_scroll_to(top) {
        log::warn!("Scrolling to #{} failed: {}", id, e);
    }
}

pub fn scroll_to_top() {
    if let Err(e) = smooth_scroll_to(0.0) {
        log::warn!("Scrolling to top failed: {}", e);
    }
}

/// Cancel-and-rearm timer: only the last call within `wait_ms` fires.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F: FnOnce() + 'static>(&self, f: F) {
        let timeout = Timeout::new(self.wait_ms, f);
        // Replacing the old handle drops it, which cancels it.
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
