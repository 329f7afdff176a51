// in-memory stand-ins for the browser, used by the unit tests
//
// MockElement records every write so tests can assert on the projected dom state as well as
// on the order of writes (the lightbox reflow dance depends on it).  FakeScheduler is a
// virtual clock: nothing fires until the test advances it, and cancelled handles never fire
use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap},
    rc::Rc,
};

use crate::{
    dom::{Element, Page},
    schedule::{Scheduler, Wake},
};

#[derive(Debug, Default)]
struct MockState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    offset_height: f64,
    ops: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MockElement {
    state: Rc<RefCell<MockState>>,
}

impl MockElement {
    pub fn new() -> Self {
        MockElement::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_offset_height(self, height: f64) -> Self {
        self.state.borrow_mut().offset_height = height;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn ops(&self) -> Vec<String> {
        self.state.borrow().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.state.borrow_mut().ops.clear();
    }
}

impl Element for MockElement {
    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        if on {
            state.classes.insert(class.to_owned());
            state.ops.push(format!("+{class}"));
        } else {
            state.classes.remove(class);
            state.ops.push(format!("-{class}"));
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        state.attributes.insert(name.to_owned(), value.to_owned());
        state.ops.push(format!("{name}={value}"));
    }

    fn remove_attribute(&self, name: &str) {
        let mut state = self.state.borrow_mut();
        state.attributes.remove(name);
        state.ops.push(format!("!{name}"));
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_owned(), value.to_owned());
        }
        state.ops.push(format!("style {property}:{value}"));
    }

    fn offset_height(&self) -> f64 {
        self.state.borrow().offset_height
    }

    fn reflow(&self) {
        self.state.borrow_mut().ops.push(String::from("reflow"));
    }
}

#[derive(Debug, Default)]
pub struct MockPage {
    pub width: Cell<f64>,
    pub scroll: Cell<f64>,
    pub fragments: HashMap<String, f64>,
    pub scrolled_to: RefCell<Vec<f64>>,
}

impl MockPage {
    pub fn desktop() -> Self {
        MockPage {
            width: Cell::new(1280.0),
            ..Default::default()
        }
    }

    pub fn mobile() -> Self {
        MockPage {
            width: Cell::new(400.0),
            ..Default::default()
        }
    }

    pub fn with_fragment(mut self, id: &str, top: f64) -> Self {
        self.fragments.insert(id.to_owned(), top);
        self
    }
}

impl Page for MockPage {
    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn fragment_top(&self, id: &str) -> Option<f64> {
        self.fragments.get(id).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }
}

#[derive(Debug)]
struct PendingTimer {
    due: u64,
    seq: u64,
    wake: Wake,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Debug, Default)]
struct Clock {
    now: u64,
    seq: u64,
    timers: Vec<PendingTimer>,
    frames: Vec<(Wake, Rc<Cell<bool>>)>,
    frames_requested: usize,
}

// dropping the handle cancels, like gloo's Timeout and AnimationFrame
#[derive(Debug)]
pub struct FakeHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        FakeScheduler::default()
    }

    // move the clock forward, returning the wakes of every live timer that came due, in
    // the order they were due
    pub fn advance(&self, ms: u64) -> Vec<Wake> {
        let mut clock = self.clock.borrow_mut();
        clock.now += ms;
        let now = clock.now;

        let (mut due, rest): (Vec<_>, Vec<_>) = clock
            .timers
            .drain(..)
            .filter(|timer| !timer.cancelled.get())
            .partition(|timer| timer.due <= now);
        clock.timers = rest;

        due.sort_by_key(|timer| (timer.due, timer.seq));
        due.into_iter().map(|timer| timer.wake).collect()
    }

    // deliver the next animation frame
    pub fn run_frame(&self) -> Vec<Wake> {
        self.clock
            .borrow_mut()
            .frames
            .drain(..)
            .filter(|(_, cancelled)| !cancelled.get())
            .map(|(wake, _)| wake)
            .collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .count()
    }

    pub fn frames_requested(&self) -> usize {
        self.clock.borrow().frames_requested
    }
}

impl Scheduler for FakeScheduler {
    type Timeout = FakeHandle;
    type Frame = FakeHandle;

    fn set_timeout(&self, delay_ms: u32, wake: Wake) -> FakeHandle {
        let mut clock = self.clock.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let timer = PendingTimer {
            due: clock.now + u64::from(delay_ms),
            seq: clock.seq,
            wake,
            cancelled: cancelled.clone(),
        };
        clock.seq += 1;
        clock.timers.push(timer);

        FakeHandle { cancelled }
    }

    fn request_frame(&self, wake: Wake) -> FakeHandle {
        let mut clock = self.clock.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        clock.frames.push((wake, cancelled.clone()));
        clock.frames_requested += 1;

        FakeHandle { cancelled }
    }
}
