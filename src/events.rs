use crate::core::{HoverReveal, PointerHandler, PointerSource, Subscription, TiltTracker};
use crate::dom::{self, DomError};
use crate::tooltip;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Top-level `pointermove` on the window; one listener per subscription.
pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new() -> Result<Self, DomError> {
        Ok(Self {
            window: web::window().ok_or(DomError::NoWindow)?,
        })
    }
}

impl PointerSource for WindowPointerSource {
    fn subscribe(&self, mut handler: PointerHandler) -> Subscription {
        match dom::listen(&self.window, "pointermove", move |ev: web::PointerEvent| {
            handler(client_pos(&ev))
        }) {
            Ok(sub) => sub,
            Err(e) => {
                log::error!("[pointer] subscribe failed: {}", e);
                Subscription::empty()
            }
        }
    }
}

/// Tilt a card toward the pointer while hovered.
pub fn wire_tilt(card: &web::HtmlElement) -> Result<[Subscription; 2], DomError> {
    let tracker = Rc::new(RefCell::new(TiltTracker::new()));

    let card_move = card.clone();
    let tracker_move = tracker.clone();
    let on_move = dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&card_move);
        let tilt = tracker_move.borrow_mut().on_move(client_pos(&ev), rect);
        dom::set_style(&card_move, "transform", &tilt.css_transform());
    })?;

    let card_leave = card.clone();
    let on_leave = dom::listen(card, "mouseleave", move |_ev: web::MouseEvent| {
        let tilt = tracker.borrow_mut().on_leave();
        dom::set_style(&card_leave, "transform", &tilt.css_transform());
    })?;

    Ok([on_move, on_leave])
}

/// Show the tooltip of whichever pipeline step is hovered.
pub fn wire_hover_reveal(
    items: &[web::HtmlElement],
    panels: Rc<Vec<web::HtmlElement>>,
) -> Result<Vec<Subscription>, DomError> {
    let hover = Rc::new(RefCell::new(HoverReveal::new(items.len())));
    let mut guards = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        let hover_enter = hover.clone();
        let panels_enter = panels.clone();
        guards.push(dom::listen(item, "mouseenter", move |_ev: web::MouseEvent| {
            if hover_enter.borrow_mut().enter(i) {
                tooltip::sync(&panels_enter, &hover_enter.borrow());
            }
        })?);

        let hover_leave = hover.clone();
        let panels_leave = panels.clone();
        guards.push(dom::listen(item, "mouseleave", move |_ev: web::MouseEvent| {
            if hover_leave.borrow_mut().leave(i) {
                tooltip::sync(&panels_leave, &hover_leave.borrow());
            }
        })?);
    }
    Ok(guards)
}

/// Radial glow in the hero that follows the pointer without smoothing.
pub fn wire_hero_glow(
    section: &web::HtmlElement,
    glow: &web::HtmlElement,
) -> Result<Subscription, DomError> {
    let section_move = section.clone();
    let glow = glow.clone();
    dom::listen(section, "mousemove", move |ev: web::MouseEvent| {
        let local = dom::element_rect(&section_move).local(client_pos(&ev));
        dom::set_style(
            &glow,
            "background-image",
            &crate::content::hero_glow_gradient(local),
        );
    })
}
