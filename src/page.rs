//! Page composition: builds the section markup and wires the interaction
//! primitives onto it. [`Page`] owns every listener, timer and frame loop it
//! starts, and releases all of them on unmount.

use crate::constants::TYPED_POLL_MS;
use crate::content::{self, SECTIONS};
use crate::core::{PointerFollower, Subscription, TypedText, TypedTextConfig};
use crate::dom::{self, html, html_with_text, DomError};
use crate::events::{self, WindowPointerSource};
use crate::frame::{self, FrameContext};
use crate::{timer, tooltip};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub struct Page {
    root: web::HtmlElement,
    follower: Rc<RefCell<PointerFollower>>,
    guards: Vec<Subscription>,
    mounted: bool,
}

impl Page {
    pub fn mount(document: &web::Document) -> Result<Page, DomError> {
        let host: web::Node = match document.get_element_by_id("app") {
            Some(el) => el.into(),
            None => document
                .body()
                .ok_or(DomError::MissingElement("body"))?
                .into(),
        };
        dom::enable_smooth_scroll(document);

        let root = html(document, "div", "page")?;
        let mut guards = Vec::new();

        // Cursor flame
        let flame = html(document, "div", "cursor-flame")?;
        flame.set_attribute("aria-hidden", "true").map_err(DomError::from_js)?;
        dom::append(&root, &flame)?;
        let follower = Rc::new(RefCell::new(PointerFollower::default()));
        follower.borrow_mut().start(&WindowPointerSource::new()?);
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(follower.clone(), flame)));
        guards.push(frame::start_loop(frame_ctx));

        build_hero(document, &root, &mut guards)?;
        for (id, title, subtitle) in SECTIONS {
            let body = build_section(document, &root, id, title, subtitle)?;
            match id {
                "about" => build_about(document, &body)?,
                "architecture" => build_architecture(document, &body, &mut guards)?,
                "tech" => build_tech(document, &body)?,
                "pros" => build_pros_cons(document, &body, &mut guards)?,
                "team" => build_team(document, &body)?,
                _ => {}
            }
        }
        let footer = html(document, "footer", "footer")?;
        dom::append(&footer, &html_with_text(document, "p", "footer-line", content::FOOTER)?)?;
        dom::append(&root, &footer)?;

        dom::append(&host, &root)?;
        log::info!("[page] mounted with {} guards", guards.len());
        Ok(Page {
            root,
            follower,
            guards,
            mounted: true,
        })
    }

    /// Release every subscription and remove the markup. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.follower.borrow_mut().stop();
        for guard in self.guards.iter_mut() {
            guard.cancel();
        }
        self.guards.clear();
        self.root.remove();
        log::info!("[page] unmounted");
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn build_section(
    document: &web::Document,
    root: &web::HtmlElement,
    id: &str,
    title: &str,
    subtitle: Option<&str>,
) -> Result<web::HtmlElement, DomError> {
    let section = html(document, "section", "section")?;
    section.set_id(id);
    let header = html(document, "div", "section-header")?;
    dom::append(&header, &html_with_text(document, "h2", "section-title", title)?)?;
    if let Some(sub) = subtitle {
        dom::append(&header, &html_with_text(document, "p", "section-subtitle", sub)?)?;
    }
    dom::append(&section, &header)?;
    let body = html(document, "div", "section-body")?;
    dom::append(&section, &body)?;
    dom::append(root, &section)?;
    Ok(body)
}

fn build_hero(
    document: &web::Document,
    root: &web::HtmlElement,
    guards: &mut Vec<Subscription>,
) -> Result<(), DomError> {
    let hero = html(document, "section", "hero")?;

    // Rendered by the viewer element; nothing is read back from it.
    let scene = html(document, content::SCENE_VIEWER_TAG, "hero-scene")?;
    scene
        .set_attribute("url", content::BACKGROUND_SCENE_URL)
        .map_err(DomError::from_js)?;
    dom::append(&hero, &scene)?;

    let glow = html(document, "div", "hero-glow")?;
    dom::append(&hero, &glow)?;
    guards.push(events::wire_hero_glow(&hero, &glow)?);

    let inner = html(document, "div", "hero-content")?;
    let badge = html(document, "div", "hero-badge")?;
    badge.set_inner_html(content::SHIELD_ICON_SVG);
    dom::append(&inner, &badge)?;
    let title = html_with_text(
        document,
        "h1",
        "hero-title",
        content::title_or_placeholder(""),
    )?;
    dom::append(&inner, &title)?;
    guards.push(mount_typed_title(&title, content::HERO_TITLE)?);
    dom::append(&inner, &html_with_text(document, "p", "hero-subtitle", content::HERO_SUBTITLE)?)?;
    dom::append(&inner, &html_with_text(document, "p", "hero-tagline", content::TAGLINE)?)?;
    let cta = html_with_text(document, "a", "hero-cta", content::HERO_CTA)?;
    cta.set_attribute("href", "#about").map_err(DomError::from_js)?;
    dom::append(&inner, &cta)?;
    dom::append(&inner, &build_scroll_indicator(document)?)?;
    dom::append(&hero, &inner)?;
    dom::append(root, &hero)
}

fn build_scroll_indicator(document: &web::Document) -> Result<web::HtmlElement, DomError> {
    let indicator = html(document, "div", "scroll-indicator")?;
    let ring = html(document, "div", "scroll-ring")?;
    dom::append(&ring, &html(document, "div", "scroll-pulse")?)?;
    let arrow = html(document, "div", "scroll-arrow")?;
    arrow.set_inner_html(content::ARROW_DOWN_ICON_SVG);
    dom::append(&ring, &arrow)?;
    dom::append(&indicator, &ring)?;
    dom::append(&indicator, &html_with_text(document, "span", "scroll-label", content::SCROLL_HINT)?)?;
    Ok(indicator)
}

fn mount_typed_title(title: &web::HtmlElement, text: &str) -> Result<Subscription, DomError> {
    let mut typed = TypedText::new(text, TypedTextConfig::default());
    let title = title.clone();
    let mut last = Instant::now();
    timer::set_interval(Duration::from_millis(TYPED_POLL_MS), move |handle| {
        let now = Instant::now();
        let emitted = typed.advance(now - last);
        last = now;
        if !emitted.is_empty() {
            title.set_text_content(Some(content::title_or_placeholder(typed.revealed())));
        }
        if typed.is_done() {
            handle.clear();
            log::info!(
                "[typed] {:?} complete after {}ms",
                typed.full_text(),
                typed.elapsed().as_millis()
            );
        }
    })
}

fn build_about(document: &web::Document, body: &web::HtmlElement) -> Result<(), DomError> {
    let card = html(document, "div", "card")?;
    dom::append(&card, &html_with_text(document, "h3", "card-title", content::ABOUT_TITLE)?)?;
    dom::append(&card, &html_with_text(document, "p", "card-body", content::ABOUT_BODY)?)?;
    let features = html(document, "div", "features")?;
    for f in content::ABOUT_FEATURES.iter() {
        dom::append(&features, &html_with_text(document, "div", "feature", f.label)?)?;
    }
    dom::append(&card, &features)?;
    dom::append(body, &card)?;

    let motto = html(document, "div", "card card-centered")?;
    dom::append(&motto, &html_with_text(document, "p", "card-body", content::TAGLINE)?)?;
    dom::append(body, &motto)
}

fn build_architecture(
    document: &web::Document,
    body: &web::HtmlElement,
    guards: &mut Vec<Subscription>,
) -> Result<(), DomError> {
    let flow = html(document, "div", "pipeline")?;
    let mut steps = Vec::with_capacity(content::PIPELINE.len());
    let mut panels = Vec::with_capacity(content::PIPELINE.len());
    for (i, step) in content::PIPELINE.iter().enumerate() {
        let el = html(document, "div", "pipeline-step")?;
        dom::append(&el, &html_with_text(document, "div", "step-label", step.label)?)?;
        if i + 1 < content::PIPELINE.len() {
            dom::append(&el, &html(document, "div", "step-connector")?)?;
        }
        let panel = html_with_text(document, "div", "step-tooltip", step.detail)?;
        tooltip::hide(&panel);
        dom::append(&el, &panel)?;
        dom::append(&flow, &el)?;
        steps.push(el);
        panels.push(panel);
    }
    dom::append(body, &flow)?;
    guards.extend(events::wire_hover_reveal(&steps, Rc::new(panels))?);
    Ok(())
}

fn build_tech(document: &web::Document, body: &web::HtmlElement) -> Result<(), DomError> {
    let grid = html(document, "div", "tech-grid")?;
    for label in content::TECH_STACK {
        dom::append(&grid, &html_with_text(document, "div", "tech-item", label)?)?;
    }
    dom::append(body, &grid)?;
    dom::append(body, &html(document, "div", "tech-flow")?)?;
    dom::append(body, &html_with_text(document, "p", "tech-note", content::TECH_FLOW_NOTE)?)
}

fn build_pros_cons(
    document: &web::Document,
    body: &web::HtmlElement,
    guards: &mut Vec<Subscription>,
) -> Result<(), DomError> {
    for (heading, items, class) in [
        ("Pros", content::PROS, "tilt-card pros"),
        ("Cons", content::CONS, "tilt-card cons"),
    ] {
        let card = html(document, "div", class)?;
        dom::append(&card, &html_with_text(document, "h3", "card-title", heading)?)?;
        let list = html(document, "ul", "card-list")?;
        for item in items {
            dom::append(&list, &html_with_text(document, "li", "card-item", item)?)?;
        }
        dom::append(&card, &list)?;
        dom::append(body, &card)?;
        guards.extend(events::wire_tilt(&card)?);
    }
    Ok(())
}

fn build_team(document: &web::Document, body: &web::HtmlElement) -> Result<(), DomError> {
    let grid = html(document, "div", "team-grid")?;
    for m in content::TEAM.iter() {
        let card = html(document, "div", "card member")?;
        dom::append(&card, &html(document, "div", "member-avatar")?)?;
        dom::append(&card, &html_with_text(document, "h4", "member-name", m.name)?)?;
        dom::append(&card, &html_with_text(document, "p", "member-role", m.role)?)?;
        dom::append(&card, &html_with_text(document, "p", "member-id", m.id)?)?;
        dom::append(&grid, &card)?;
    }
    dom::append(body, &grid)
}
