use crate::core::HoverReveal;
use web_sys as web;

#[inline]
pub fn show(panel: &web::HtmlElement) {
    _ = panel.set_attribute("style", "");
}

#[inline]
pub fn hide(panel: &web::HtmlElement) {
    _ = panel.set_attribute("style", "display:none");
}

/// Only the active item's panel is ever visible.
pub fn sync(panels: &[web::HtmlElement], hover: &HoverReveal) {
    for (i, panel) in panels.iter().enumerate() {
        if hover.is_revealed(i) {
            show(panel);
        } else {
            hide(panel);
        }
    }
}
