use tracing::{instrument, trace};

use crate::{
    anchor::AnchorScroll,
    blog::BlogFilter,
    dom::{Element, Page},
    lightbox::{ClickTarget, Lightbox},
    nav::Navigation,
    schedule::{Scheduler, Wake},
    scroll::ScrollEffect,
    scroll_lock::ScrollLock,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

// every gesture the page reacts to, after the binding has resolved which element it
// happened on
#[derive(Clone, Debug, PartialEq)]
pub enum SiteEvent {
    HamburgerClick,
    OverlayClick,
    DropdownToggleClick(usize),
    DropdownEnter(usize),
    DropdownLeave(usize),
    DocumentClick { inside_dropdown: bool },
    KeyDown(Key),
    Scroll,
    AnchorClick { href: String },
    CategoryClick(usize),
    GalleryItemClick(usize),
    LightboxCloseClick,
    LightboxPrevClick,
    LightboxNextClick,
    LightboxClick(ClickTarget),
    Wake(Wake),
}

// default actions the binding has to suppress on the originating dom event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Disposition {
    pub const PASS: Disposition = Disposition {
        prevent_default: false,
        stop_propagation: false,
    };

    pub const PREVENT: Disposition = Disposition {
        prevent_default: true,
        stop_propagation: false,
    };

    pub const SWALLOW: Disposition = Disposition {
        prevent_default: true,
        stop_propagation: true,
    };
}

// the whole page
//
// each feature is optional: a page without blog markup simply has no blog filter, and the
// events aimed at it fall through as no-ops.  the controllers never talk to each other
// directly; the only state they share is the scroll lock, owned here
pub struct Site<E: Element, S: Scheduler> {
    lock: ScrollLock<E>,
    pub nav: Option<Navigation<E, S::Timeout>>,
    pub scroll: Option<ScrollEffect<E, S::Frame>>,
    pub anchors: AnchorScroll<E>,
    pub blog: Option<BlogFilter<E>>,
    pub lightbox: Option<Lightbox<E, S::Timeout>>,
}

impl<E: Element, S: Scheduler> Site<E, S> {
    pub fn new(body: E, anchors: AnchorScroll<E>) -> Self {
        Site {
            lock: ScrollLock::new(body),
            nav: None,
            scroll: None,
            anchors,
            blog: None,
            lightbox: None,
        }
    }

    pub fn with_navigation(mut self, nav: Navigation<E, S::Timeout>) -> Self {
        self.nav = Some(nav);
        self
    }

    pub fn with_scroll_effect(mut self, scroll: ScrollEffect<E, S::Frame>) -> Self {
        self.scroll = Some(scroll);
        self
    }

    pub fn with_blog_filter(mut self, blog: BlogFilter<E>) -> Self {
        self.blog = Some(blog);
        self
    }

    pub fn with_lightbox(mut self, lightbox: Lightbox<E, S::Timeout>) -> Self {
        self.lightbox = Some(lightbox);
        self
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    // initial state that does not wait for an event
    pub fn start<P: Page>(&mut self, page: &P) {
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.check(page.scroll_y());
        }
    }

    #[instrument(level = "trace", skip(self, page, scheduler))]
    pub fn dispatch<P: Page>(&mut self, event: SiteEvent, page: &P, scheduler: &S) -> Disposition {
        match event {
            SiteEvent::HamburgerClick => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.toggle_menu(&mut self.lock);
                }
                Disposition::PASS
            }
            SiteEvent::OverlayClick => {
                self.close_menu();
                Disposition::PASS
            }
            SiteEvent::DropdownToggleClick(index) => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.toggle_dropdown(index);
                }
                Disposition::SWALLOW
            }
            SiteEvent::DropdownEnter(index) => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.pointer_enter(index, page.viewport_width());
                }
                Disposition::PASS
            }
            SiteEvent::DropdownLeave(index) => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.pointer_leave(index, page.viewport_width(), scheduler);
                }
                Disposition::PASS
            }
            SiteEvent::DocumentClick { inside_dropdown } => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.document_click(inside_dropdown);
                }
                Disposition::PASS
            }
            SiteEvent::KeyDown(key) => {
                self.key_down(key, scheduler);
                Disposition::PASS
            }
            SiteEvent::Scroll => {
                if let Some(scroll) = self.scroll.as_mut() {
                    scroll.on_scroll(scheduler);
                }
                Disposition::PASS
            }
            SiteEvent::AnchorClick { href } => self.anchor_click(&href, page),
            SiteEvent::CategoryClick(index) => {
                if let Some(blog) = self.blog.as_mut() {
                    blog.select(index);
                }
                Disposition::SWALLOW
            }
            SiteEvent::GalleryItemClick(index) => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.open(index, &mut self.lock);
                }
                Disposition::PASS
            }
            SiteEvent::LightboxCloseClick => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.close(&mut self.lock, scheduler);
                }
                Disposition::PASS
            }
            SiteEvent::LightboxPrevClick => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.prev();
                }
                Disposition::PASS
            }
            SiteEvent::LightboxNextClick => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.next();
                }
                Disposition::PASS
            }
            SiteEvent::LightboxClick(target) => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.click(target, &mut self.lock, scheduler);
                }
                Disposition::PASS
            }
            SiteEvent::Wake(wake) => {
                self.wake(wake, page);
                Disposition::PASS
            }
        }
    }

    fn close_menu(&mut self) {
        if let Some(nav) = self.nav.as_mut() {
            nav.close_menu(&mut self.lock);
        }
    }

    // navigation sees the key first, then the lightbox
    fn key_down(&mut self, key: Key, scheduler: &S) {
        if key == Key::Escape {
            if let Some(nav) = self.nav.as_mut() {
                nav.escape(&mut self.lock);
            }
        }

        let Some(lightbox) = self.lightbox.as_mut() else {
            return;
        };
        if !lightbox.is_open() {
            return;
        }

        match key {
            Key::Escape => lightbox.close(&mut self.lock, scheduler),
            Key::ArrowLeft => lightbox.prev(),
            Key::ArrowRight => lightbox.next(),
            Key::Other => {}
        }
    }

    fn anchor_click<P: Page>(&mut self, href: &str, page: &P) -> Disposition {
        let Some(top) = self.anchors.target(href, page) else {
            return Disposition::PASS;
        };

        self.close_menu();
        self.anchors.scroll_to(top, page);
        Disposition::PREVENT
    }

    fn wake<P: Page>(&mut self, wake: Wake, page: &P) {
        trace!(?wake, "wake");

        match wake {
            Wake::DropdownClose(index) => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.close_delay_elapsed(index);
                }
            }
            Wake::LightboxHide => {
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.hide_elapsed();
                }
            }
            Wake::ScrollFrame => {
                if let Some(scroll) = self.scroll.as_mut() {
                    scroll.on_frame(page.scroll_y());
                }
            }
        }
    }
}
