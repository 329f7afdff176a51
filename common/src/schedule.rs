// deferred work
//
// the controllers own the handles returned here.  dropping a handle cancels whatever it was
// waiting for, which is also how gloo's Timeout and AnimationFrame behave, so "cancel the
// pending close" is just `self.pending = None`
//
// callbacks do not capture controller state: when a handle fires, the binding feeds the
// associated Wake back into Site::dispatch

/// What a scheduled callback is for, routed back to the owning controller when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wake {
    // hover close delay for the dropdown at this index elapsed
    DropdownClose(usize),
    // lightbox fade-out finished
    LightboxHide,
    // the frame a scroll check was deferred to has arrived
    ScrollFrame,
}

pub trait Scheduler {
    type Timeout;
    type Frame;

    fn set_timeout(&self, delay_ms: u32, wake: Wake) -> Self::Timeout;

    fn request_frame(&self, wake: Wake) -> Self::Frame;
}
