use tracing::{debug, instrument};

use crate::{
    config::LightboxConfig,
    contract::{ALT, HIDDEN, LIGHTBOX_ACTIVE, SRC},
    dom::Element,
    schedule::{Scheduler, Wake},
    scroll_lock::{Holder, ScrollLock},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open,
    // active class removed, waiting for the fade-out before hiding
    Closing,
}

// what a click inside the lightbox landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
    Image,
    Other,
}

// modal image viewer
//
// the gallery sequence is collected once at startup in dom order.  navigation wraps in both
// directions, and visibility always moves together with the scroll lock
pub struct Lightbox<E: Element, T> {
    root: E,
    image: E,
    images: Vec<GalleryImage>,
    index: usize,
    state: LightboxState,
    pending_hide: Option<T>,
    config: LightboxConfig,
}

impl<E: Element, T> Lightbox<E, T> {
    pub fn new(root: E, image: E, images: Vec<GalleryImage>, config: LightboxConfig) -> Self {
        debug!({ images = images.len() }, "wiring lightbox");

        Lightbox {
            root,
            image,
            images,
            index: 0,
            state: LightboxState::Closed,
            pending_hide: None,
            config,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == LightboxState::Open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn show(&mut self, index: usize) {
        self.index = index;

        let GalleryImage { src, alt } = &self.images[index];
        self.image.set_attribute(SRC, src);
        self.image.set_attribute(ALT, alt);
    }

    #[instrument(level = "debug", skip(self, lock))]
    pub fn open(&mut self, index: usize, lock: &mut ScrollLock<E>) {
        if index >= self.images.len() {
            return;
        }

        // reopening during the fade-out must not be hidden by the old timer
        self.pending_hide = None;

        self.show(index);
        self.root.remove_attribute(HIDDEN);
        self.root.reflow();
        self.root.set_class(LIGHTBOX_ACTIVE, true);
        lock.set(Holder::Lightbox, true);

        self.state = LightboxState::Open;
    }

    pub fn close<S>(&mut self, lock: &mut ScrollLock<E>, scheduler: &S)
    where
        S: Scheduler<Timeout = T>,
    {
        if self.state != LightboxState::Open {
            return;
        }

        debug!("closing lightbox");
        self.root.set_class(LIGHTBOX_ACTIVE, false);
        lock.set(Holder::Lightbox, false);

        self.state = LightboxState::Closing;
        self.pending_hide =
            Some(scheduler.set_timeout(self.config.hide_delay_ms, Wake::LightboxHide));
    }

    // fade-out finished: hide the container and drop the image reference
    pub fn hide_elapsed(&mut self) {
        if self.pending_hide.take().is_none() || self.state != LightboxState::Closing {
            return;
        }

        self.root.set_attribute(HIDDEN, "");
        self.image.set_attribute(SRC, "");
        self.state = LightboxState::Closed;
    }

    pub fn prev(&mut self) {
        if !self.is_open() || self.images.is_empty() {
            return;
        }

        let len = self.images.len();
        self.show((self.index + len - 1) % len);
    }

    pub fn next(&mut self) {
        if !self.is_open() || self.images.is_empty() {
            return;
        }

        self.show((self.index + 1) % self.images.len());
    }

    // the image itself swallows clicks, anything around it closes
    pub fn click<S>(&mut self, target: ClickTarget, lock: &mut ScrollLock<E>, scheduler: &S)
    where
        S: Scheduler<Timeout = T>,
    {
        match target {
            ClickTarget::Backdrop | ClickTarget::Content => self.close(lock, scheduler),
            ClickTarget::Image | ClickTarget::Other => {}
        }
    }
}
