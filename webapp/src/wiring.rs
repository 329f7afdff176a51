use std::rc::Rc;

use anyhow::{Context, Result};
use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlImageElement, KeyboardEvent};

use angelic_common::{
    Disposition, Element, Key, Site, SiteConfig, SiteEvent,
    anchor::AnchorScroll,
    blog::{BlogFilter, Categorized},
    contract::{
        ANCHOR_SELECTOR, BLOG_CARD_SELECTOR, CATEGORY_BTN_SELECTOR, DATA_CATEGORY,
        DROPDOWN_ITEM_SELECTOR, DROPDOWN_TOGGLE_SELECTOR, FEATURED_CARD_SELECTOR,
        GALLERY_IMG_SELECTOR, GALLERY_ITEM_SELECTOR, HAMBURGER_ID, HEADER_ID, HREF,
        LIGHTBOX_CLOSE_SELECTOR, LIGHTBOX_CONTENT_SELECTOR, LIGHTBOX_ID, LIGHTBOX_IMG_ID,
        LIGHTBOX_NEXT_SELECTOR, LIGHTBOX_PREV_SELECTOR, NAV_ID, OVERLAY,
    },
    lightbox::{ClickTarget, GalleryImage, Lightbox},
    nav::{Dropdown, Navigation},
    scroll::ScrollEffect,
};

use crate::{
    dom::{DomElement, WebPage},
    runtime::{Runtime, WebSite},
};

// elements that receive listeners, kept apart from the controllers that only write to them
#[derive(Default)]
struct Targets {
    hamburger: Option<DomElement>,
    overlay: Option<DomElement>,
    dropdowns: Vec<(DomElement, Option<DomElement>)>,
    anchors: Vec<DomElement>,
    categories: Vec<DomElement>,
    gallery: Vec<(DomElement, usize)>,
    lightbox: Option<LightboxTargets>,
}

struct LightboxTargets {
    root: DomElement,
    image: DomElement,
    content: Option<DomElement>,
    close: Option<DomElement>,
    prev: Option<DomElement>,
    next: Option<DomElement>,
}

fn apply(event: &Event, disposition: Disposition) {
    if disposition.prevent_default {
        event.prevent_default();
    }
    if disposition.stop_propagation {
        event.stop_propagation();
    }
}

// attach a listener that translates the dom event into a site event
//
// listeners live as long as the page, like the callbacks in the rest of the webapp
fn listen<F>(runtime: &Rc<Runtime>, target: &EventTarget, kind: &'static str, translate: F)
where
    F: Fn(&Event) -> Option<SiteEvent> + 'static,
{
    let runtime = runtime.clone();
    EventListener::new_with_options(
        target,
        kind,
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            if let Some(site_event) = translate(event) {
                let disposition = runtime.dispatch(site_event);
                apply(event, disposition);
            }
        },
    )
    .forget();
}

fn click(runtime: &Rc<Runtime>, element: &DomElement, site_event: SiteEvent) {
    listen(runtime, element.0.as_ref(), "click", move |_| {
        Some(site_event.clone())
    });
}

fn category(element: &DomElement) -> Option<String> {
    element.attribute(DATA_CATEGORY)
}

// read the page once and build the controllers for whatever markup is present
fn build(page: &WebPage, config: &SiteConfig) -> Result<(WebSite, Targets)> {
    let body = page.body()?;
    let header = page.by_id(HEADER_ID);
    let mut targets = Targets::default();

    let mut site: WebSite = Site::new(body.clone(), AnchorScroll::new(header.clone()));

    match (page.by_id(NAV_ID), page.by_id(HAMBURGER_ID)) {
        (Some(nav), Some(hamburger)) => {
            let overlay = page.create("div").context("failed to create nav overlay")?;
            overlay.set_class(OVERLAY, true);
            body.0
                .append_child(&overlay.0)
                .map_err(|err| anyhow::Error::msg(format!("failed to attach nav overlay: {err:?}")))?;

            let items: Vec<_> = page
                .query_all(DROPDOWN_ITEM_SELECTOR)
                .into_iter()
                .map(|item| {
                    let toggle = item.query(DROPDOWN_TOGGLE_SELECTOR);
                    (item, toggle)
                })
                .collect();
            let dropdowns = items
                .iter()
                .map(|(item, toggle)| Dropdown::new(item.clone(), toggle.clone()))
                .collect();

            site = site.with_navigation(Navigation::new(
                nav,
                hamburger.clone(),
                overlay.clone(),
                dropdowns,
                config.nav.clone(),
            ));
            targets.hamburger = Some(hamburger);
            targets.overlay = Some(overlay);
            targets.dropdowns = items;
        }
        _ => debug!("navigation markup absent, skipping"),
    }

    match header {
        Some(header) => {
            site = site.with_scroll_effect(ScrollEffect::new(header, config.scroll.clone()))
        }
        None => debug!("header absent, skipping scroll effect"),
    }

    targets.anchors = page.query_all(ANCHOR_SELECTOR);

    let buttons = page.query_all(CATEGORY_BTN_SELECTOR);
    if buttons.is_empty() {
        debug!("no category buttons, skipping blog filter");
    } else {
        let cards = page
            .query_all(BLOG_CARD_SELECTOR)
            .into_iter()
            .map(|card| {
                let category = category(&card);
                Categorized::new(card, category)
            })
            .collect();
        let featured = page.query(FEATURED_CARD_SELECTOR).map(|card| {
            let category = category(&card);
            Categorized::new(card, category)
        });
        let filter_buttons = buttons
            .iter()
            .map(|button| Categorized::new(button.clone(), category(button)))
            .collect();

        site = site.with_blog_filter(BlogFilter::new(
            filter_buttons,
            cards,
            featured,
            config.blog.clone(),
        ));
        targets.categories = buttons;
    }

    match (page.by_id(LIGHTBOX_ID), page.by_id(LIGHTBOX_IMG_ID)) {
        (Some(root), Some(image)) => {
            let mut images = Vec::new();
            for item in page.query_all(GALLERY_ITEM_SELECTOR) {
                let Some(img) = item
                    .query(GALLERY_IMG_SELECTOR)
                    .and_then(|img| img.0.dyn_into::<HtmlImageElement>().ok())
                else {
                    continue;
                };

                targets.gallery.push((item, images.len()));
                images.push(GalleryImage {
                    src: img.src(),
                    alt: img.alt(),
                });
            }

            targets.lightbox = Some(LightboxTargets {
                content: root.query(LIGHTBOX_CONTENT_SELECTOR),
                close: root.query(LIGHTBOX_CLOSE_SELECTOR),
                prev: root.query(LIGHTBOX_PREV_SELECTOR),
                next: root.query(LIGHTBOX_NEXT_SELECTOR),
                root: root.clone(),
                image: image.clone(),
            });
            site = site.with_lightbox(Lightbox::new(root, image, images, config.lightbox.clone()));
        }
        _ => debug!("lightbox markup absent, skipping"),
    }

    Ok((site, targets))
}

fn attach(runtime: &Rc<Runtime>, targets: Targets) {
    let page = runtime.page();
    let document: &EventTarget = page.document.as_ref();
    let window: &EventTarget = page.window.as_ref();

    if let Some(hamburger) = &targets.hamburger {
        click(runtime, hamburger, SiteEvent::HamburgerClick);

        listen(runtime, document, "click", |event| {
            let inside_dropdown = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(DROPDOWN_ITEM_SELECTOR).ok().flatten())
                .is_some();

            Some(SiteEvent::DocumentClick { inside_dropdown })
        });
    }
    if let Some(overlay) = &targets.overlay {
        click(runtime, overlay, SiteEvent::OverlayClick);
    }

    for (index, (item, toggle)) in targets.dropdowns.iter().enumerate() {
        if let Some(toggle) = toggle {
            click(runtime, toggle, SiteEvent::DropdownToggleClick(index));
        }
        listen(runtime, item.0.as_ref(), "mouseenter", move |_| {
            Some(SiteEvent::DropdownEnter(index))
        });
        listen(runtime, item.0.as_ref(), "mouseleave", move |_| {
            Some(SiteEvent::DropdownLeave(index))
        });
    }

    listen(runtime, document, "keydown", |event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|event| SiteEvent::KeyDown(Key::from(event.key().as_str())))
    });

    // passive: the scroll handler never cancels anything
    let scroll_runtime = runtime.clone();
    EventListener::new(window, "scroll", move |_| {
        scroll_runtime.dispatch(SiteEvent::Scroll);
    })
    .forget();

    // the href is read at click time so later markup edits are respected
    for anchor in targets.anchors {
        let target = anchor.clone();
        listen(runtime, anchor.0.as_ref(), "click", move |_| {
            target
                .attribute(HREF)
                .map(|href| SiteEvent::AnchorClick { href })
        });
    }

    for (index, button) in targets.categories.iter().enumerate() {
        click(runtime, button, SiteEvent::CategoryClick(index));
    }

    for (item, index) in &targets.gallery {
        click(runtime, item, SiteEvent::GalleryItemClick(*index));
    }

    if let Some(lightbox) = targets.lightbox {
        let LightboxTargets {
            root,
            image,
            content,
            close,
            prev,
            next,
        } = lightbox;

        if let Some(close) = &close {
            click(runtime, close, SiteEvent::LightboxCloseClick);
        }
        if let Some(prev) = &prev {
            click(runtime, prev, SiteEvent::LightboxPrevClick);
        }
        if let Some(next) = &next {
            click(runtime, next, SiteEvent::LightboxNextClick);
        }

        // only the backdrop and the content wrapper close; the image and the buttons do not
        let backdrop = root.clone();
        listen(runtime, backdrop.0.as_ref(), "click", move |event| {
            let target: JsValue = event.target()?.into();
            let kind = if root.is(&target) {
                ClickTarget::Backdrop
            } else if content.as_ref().is_some_and(|content| content.is(&target)) {
                ClickTarget::Content
            } else if image.is(&target) {
                ClickTarget::Image
            } else {
                ClickTarget::Other
            };

            Some(SiteEvent::LightboxClick(kind))
        });
    }
}

pub fn wire(page: WebPage, config: &SiteConfig) -> Result<Rc<Runtime>> {
    let (site, targets) = build(&page, config)?;
    let runtime = Runtime::new(site, page);

    attach(&runtime, targets);
    runtime.start();

    info!("site behavior wired");
    Ok(runtime)
}
