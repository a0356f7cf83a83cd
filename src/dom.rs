use crate::core::{Rect, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

impl DomError {
    pub fn from_js(e: JsValue) -> Self {
        match e.dyn_ref::<js_sys::Error>() {
            Some(err) => DomError::Js(String::from(err.message())),
            None => DomError::Js(format!("{:?}", e)),
        }
    }
}

#[inline]
pub fn window_document() -> Result<web::Document, DomError> {
    web::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Create an element with the given class list.
pub fn html(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Result<web::HtmlElement, DomError> {
    let el = document.create_element(tag).map_err(DomError::from_js)?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| DomError::Js(format!("{:?}", e)))
}

pub fn html_with_text(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<web::HtmlElement, DomError> {
    let el = html(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) -> Result<(), DomError> {
    parent.append_child(child).map(|_| ()).map_err(DomError::from_js)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Attach an event listener; the returned guard removes it and frees the closure.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<Subscription, DomError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(DomError::from_js)?;
    let target = target.clone();
    Ok(Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}

pub fn enable_smooth_scroll(document: &web::Document) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, "scroll-behavior", "smooth");
    }
}
