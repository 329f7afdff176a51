use tracing::trace;

use crate::{
    config::ScrollConfig,
    contract::HEADER_SCROLLED,
    dom::Element,
    schedule::{Scheduler, Wake},
};

// header styling on scroll
//
// scroll events only ever request a frame; the threshold check runs when the frame arrives.
// a pending frame handle doubles as the "already scheduled" flag, so any number of scroll
// events between two frames collapse into one check
pub struct ScrollEffect<E: Element, F> {
    header: E,
    scrolled: bool,
    last_offset: f64,
    pending_frame: Option<F>,
    config: ScrollConfig,
}

impl<E: Element, F> ScrollEffect<E, F> {
    pub fn new(header: E, config: ScrollConfig) -> Self {
        ScrollEffect {
            header,
            scrolled: false,
            last_offset: 0.0,
            pending_frame: None,
            config,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn frame_pending(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn on_scroll<S>(&mut self, scheduler: &S)
    where
        S: Scheduler<Frame = F>,
    {
        if self.pending_frame.is_none() {
            self.pending_frame = Some(scheduler.request_frame(Wake::ScrollFrame));
        }
    }

    pub fn on_frame(&mut self, offset: f64) {
        self.pending_frame = None;
        self.check(offset);
    }

    // also run once at startup so a page loaded mid-scroll starts out styled correctly
    pub fn check(&mut self, offset: f64) {
        self.scrolled = offset > self.config.threshold;
        self.last_offset = offset;

        trace!(offset, scrolled = self.scrolled, "scroll check");
        self.header.set_class(HEADER_SCROLLED, self.scrolled);
    }
}
