use std::rc::Weak;

use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;

use angelic_common::{Scheduler, SiteEvent, Wake};

use crate::runtime::Runtime;

// browser scheduler
//
// both handle types cancel on drop, which is exactly the contract the controllers expect.
// the callbacks only hold a weak reference back to the runtime and re-enter it with the wake
#[derive(Clone)]
pub struct WebScheduler {
    runtime: Weak<Runtime>,
}

impl WebScheduler {
    pub fn new(runtime: Weak<Runtime>) -> Self {
        WebScheduler { runtime }
    }

    fn wake(runtime: &Weak<Runtime>, wake: Wake) {
        if let Some(runtime) = runtime.upgrade() {
            runtime.dispatch(SiteEvent::Wake(wake));
        }
    }
}

impl Scheduler for WebScheduler {
    type Timeout = Timeout;
    type Frame = AnimationFrame;

    fn set_timeout(&self, delay_ms: u32, wake: Wake) -> Timeout {
        let runtime = self.runtime.clone();
        Timeout::new(delay_ms, move || WebScheduler::wake(&runtime, wake))
    }

    fn request_frame(&self, wake: Wake) -> AnimationFrame {
        let runtime = self.runtime.clone();
        request_animation_frame(move |_| WebScheduler::wake(&runtime, wake))
    }
}
