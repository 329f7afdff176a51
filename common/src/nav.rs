use tracing::{debug, instrument};

use crate::{
    config::NavConfig,
    contract::{ARIA_EXPANDED, DATA_OPEN, HAMBURGER_ACTIVE, NAV_OPEN, OVERLAY_VISIBLE},
    dom::{Element, bool_str},
    schedule::{Scheduler, Wake},
    scroll_lock::{Holder, ScrollLock},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

// one .nav__item--dropdown
//
// the toggle control is optional; without it the item still opens on hover and still
// takes part in close-all
pub struct Dropdown<E: Element, T> {
    item: E,
    toggle: Option<E>,
    state: DropdownState,
    pending_close: Option<T>,
}

impl<E: Element, T> Dropdown<E, T> {
    pub fn new(item: E, toggle: Option<E>) -> Self {
        Dropdown {
            item,
            toggle,
            state: DropdownState::Closed,
            pending_close: None,
        }
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    // state is authoritative, the attributes are only ever written from it
    fn set(&mut self, state: DropdownState) {
        self.state = state;

        let open = bool_str(state == DropdownState::Open);
        self.item.set_attribute(DATA_OPEN, open);
        if let Some(toggle) = &self.toggle {
            toggle.set_attribute(ARIA_EXPANDED, open);
        }
    }
}

// hamburger menu plus dropdowns
//
// at most one dropdown is open at any time, and closing the mobile menu cascades to every
// dropdown
pub struct Navigation<E: Element, T> {
    nav: E,
    hamburger: E,
    overlay: E,
    menu: MenuState,
    dropdowns: Vec<Dropdown<E, T>>,
    config: NavConfig,
}

impl<E: Element, T> Navigation<E, T> {
    pub fn new(
        nav: E,
        hamburger: E,
        overlay: E,
        dropdowns: Vec<Dropdown<E, T>>,
        config: NavConfig,
    ) -> Self {
        debug!({ dropdowns = dropdowns.len() }, "wiring navigation");

        Navigation {
            nav,
            hamburger,
            overlay,
            menu: MenuState::Closed,
            dropdowns,
            config,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn dropdown(&self, index: usize) -> Option<DropdownState> {
        self.dropdowns.get(index).map(|dropdown| dropdown.state)
    }

    pub fn dropdown_count(&self) -> usize {
        self.dropdowns.len()
    }

    pub fn has_toggle(&self, index: usize) -> bool {
        self.dropdowns
            .get(index)
            .is_some_and(|dropdown| dropdown.has_toggle())
    }

    #[instrument(level = "debug", skip_all)]
    pub fn toggle_menu(&mut self, lock: &mut ScrollLock<E>) {
        match self.menu {
            MenuState::Closed => self.set_menu(MenuState::Open, lock),
            MenuState::Open => self.close_menu(lock),
        }
    }

    // safe to call when already closed, it just rewrites the closed projection
    pub fn close_menu(&mut self, lock: &mut ScrollLock<E>) {
        self.set_menu(MenuState::Closed, lock);
        self.close_all();
    }

    fn set_menu(&mut self, state: MenuState, lock: &mut ScrollLock<E>) {
        self.menu = state;

        let open = state == MenuState::Open;
        self.nav.set_class(NAV_OPEN, open);
        self.hamburger.set_class(HAMBURGER_ACTIVE, open);
        self.hamburger.set_attribute(ARIA_EXPANDED, bool_str(open));
        self.overlay.set_class(OVERLAY_VISIBLE, open);
        lock.set(Holder::Menu, open);
    }

    pub fn close_all(&mut self) {
        for dropdown in self.dropdowns.iter_mut() {
            dropdown.set(DropdownState::Closed);
        }
    }

    // open this dropdown and close every other one, dropping their pending closes
    fn open_only(&mut self, index: usize) {
        for (i, dropdown) in self.dropdowns.iter_mut().enumerate() {
            if i == index {
                dropdown.pending_close = None;
                dropdown.set(DropdownState::Open);
            } else if dropdown.state == DropdownState::Open {
                dropdown.pending_close = None;
                dropdown.set(DropdownState::Closed);
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn toggle_dropdown(&mut self, index: usize) {
        let Some(state) = self.dropdown(index) else {
            return;
        };

        match state {
            DropdownState::Closed => self.open_only(index),
            DropdownState::Open => {
                let dropdown = &mut self.dropdowns[index];
                dropdown.pending_close = None;
                dropdown.set(DropdownState::Closed);
            }
        }
    }

    fn hover_enabled(&self, viewport_width: f64) -> bool {
        viewport_width > self.config.hover_breakpoint
    }

    pub fn pointer_enter(&mut self, index: usize, viewport_width: f64) {
        if !self.hover_enabled(viewport_width) || index >= self.dropdowns.len() {
            return;
        }

        self.open_only(index);
    }

    pub fn pointer_leave<S>(&mut self, index: usize, viewport_width: f64, scheduler: &S)
    where
        S: Scheduler<Timeout = T>,
    {
        if !self.hover_enabled(viewport_width) {
            return;
        }

        let delay = self.config.close_delay_ms;
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            // replacing an older handle cancels it
            dropdown.pending_close = Some(scheduler.set_timeout(delay, Wake::DropdownClose(index)));
        }
    }

    pub fn close_delay_elapsed(&mut self, index: usize) {
        let Some(dropdown) = self.dropdowns.get_mut(index) else {
            return;
        };

        // a handle that was cancelled in the meantime has nothing to close
        if dropdown.pending_close.take().is_some() {
            debug!(index, "closing dropdown after hover delay");
            dropdown.set(DropdownState::Closed);
        }
    }

    pub fn document_click(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.close_all();
        }
    }

    pub fn escape(&mut self, lock: &mut ScrollLock<E>) {
        self.close_all();
        self.close_menu(lock);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        contract::OVERFLOW,
        testing::{FakeHandle, FakeScheduler, MockElement},
    };

    struct Fixture {
        nav: MockElement,
        hamburger: MockElement,
        overlay: MockElement,
        body: MockElement,
        items: Vec<MockElement>,
        toggles: Vec<MockElement>,
        lock: ScrollLock<MockElement>,
        navigation: Navigation<MockElement, FakeHandle>,
    }

    fn fixture(count: usize) -> Fixture {
        let nav = MockElement::new();
        let hamburger = MockElement::new();
        let overlay = MockElement::new();
        let body = MockElement::new();
        let items: Vec<_> = (0..count).map(|_| MockElement::new()).collect();
        let toggles: Vec<_> = (0..count).map(|_| MockElement::new()).collect();

        let dropdowns = items
            .iter()
            .zip(toggles.iter())
            .map(|(item, toggle)| Dropdown::new(item.clone(), Some(toggle.clone())))
            .collect();

        Fixture {
            navigation: Navigation::new(
                nav.clone(),
                hamburger.clone(),
                overlay.clone(),
                dropdowns,
                NavConfig::default(),
            ),
            lock: ScrollLock::new(body.clone()),
            nav,
            hamburger,
            overlay,
            body,
            items,
            toggles,
        }
    }

    fn open_indices(fx: &Fixture) -> Vec<usize> {
        (0..fx.navigation.dropdown_count())
            .filter(|&i| fx.navigation.dropdown(i) == Some(DropdownState::Open))
            .collect()
    }

    #[test]
    fn toggle_menu_projects_every_flag() {
        let mut fx = fixture(0);

        fx.navigation.toggle_menu(&mut fx.lock);
        assert_eq!(fx.navigation.menu(), MenuState::Open);
        assert!(fx.nav.has_class(NAV_OPEN));
        assert!(fx.hamburger.has_class(HAMBURGER_ACTIVE));
        assert_eq!(fx.hamburger.attribute(ARIA_EXPANDED), Some("true".into()));
        assert!(fx.overlay.has_class(OVERLAY_VISIBLE));
        assert_eq!(fx.body.style(OVERFLOW), Some("hidden".into()));

        fx.navigation.toggle_menu(&mut fx.lock);
        assert_eq!(fx.navigation.menu(), MenuState::Closed);
        assert!(!fx.nav.has_class(NAV_OPEN));
        assert!(!fx.hamburger.has_class(HAMBURGER_ACTIVE));
        assert_eq!(fx.hamburger.attribute(ARIA_EXPANDED), Some("false".into()));
        assert!(!fx.overlay.has_class(OVERLAY_VISIBLE));
        assert_eq!(fx.body.style(OVERFLOW), None);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut fx = fixture(1);

        fx.navigation.close_menu(&mut fx.lock);
        fx.navigation.close_menu(&mut fx.lock);

        assert_eq!(fx.navigation.menu(), MenuState::Closed);
        assert!(!fx.nav.has_class(NAV_OPEN));
        assert_eq!(fx.body.style(OVERFLOW), None);
    }

    #[test]
    fn opening_a_dropdown_closes_the_others() {
        let mut fx = fixture(3);

        for index in [0, 2, 1, 1, 0] {
            fx.navigation.toggle_dropdown(index);
            assert!(open_indices(&fx).len() <= 1);
        }

        fx.navigation.toggle_dropdown(2);
        assert_eq!(open_indices(&fx), vec![2]);
        assert_eq!(fx.items[2].attribute(DATA_OPEN), Some("true".into()));
        assert_eq!(fx.toggles[2].attribute(ARIA_EXPANDED), Some("true".into()));
        assert_eq!(fx.items[0].attribute(DATA_OPEN), Some("false".into()));
        assert_eq!(fx.toggles[0].attribute(ARIA_EXPANDED), Some("false".into()));

        fx.navigation.toggle_dropdown(2);
        assert_eq!(open_indices(&fx), Vec::<usize>::new());
    }

    #[test]
    fn closing_menu_cascades_to_dropdowns() {
        let mut fx = fixture(2);

        fx.navigation.toggle_menu(&mut fx.lock);
        fx.navigation.toggle_dropdown(1);
        assert_eq!(open_indices(&fx), vec![1]);

        fx.navigation.toggle_menu(&mut fx.lock);
        assert_eq!(open_indices(&fx), Vec::<usize>::new());
        assert_eq!(fx.items[1].attribute(DATA_OPEN), Some("false".into()));
    }

    #[test]
    fn hover_is_ignored_below_breakpoint() {
        let mut fx = fixture(1);
        let scheduler = FakeScheduler::new();

        fx.navigation.pointer_enter(0, 968.0);
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Closed));

        fx.navigation.toggle_dropdown(0);
        fx.navigation.pointer_leave(0, 968.0, &scheduler);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn leaving_closes_after_delay() {
        let mut fx = fixture(1);
        let scheduler = FakeScheduler::new();

        fx.navigation.pointer_enter(0, 1280.0);
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Open));

        fx.navigation.pointer_leave(0, 1280.0, &scheduler);
        assert_eq!(scheduler.advance(249), Vec::<Wake>::new());
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Open));

        assert_eq!(scheduler.advance(1), vec![Wake::DropdownClose(0)]);
        fx.navigation.close_delay_elapsed(0);
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Closed));
    }

    #[test]
    fn reentering_cancels_pending_close() {
        let mut fx = fixture(1);
        let scheduler = FakeScheduler::new();

        fx.navigation.pointer_enter(0, 1280.0);
        fx.navigation.pointer_leave(0, 1280.0, &scheduler);
        scheduler.advance(100);
        fx.navigation.pointer_enter(0, 1280.0);

        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(scheduler.advance(1000), Vec::<Wake>::new());
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Open));
    }

    #[test]
    fn toggle_click_cancels_pending_hover_close() {
        let mut fx = fixture(1);
        let scheduler = FakeScheduler::new();

        fx.navigation.pointer_enter(0, 1280.0);
        fx.navigation.pointer_leave(0, 1280.0, &scheduler);
        fx.navigation.document_click(false);
        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Closed));

        fx.navigation.toggle_dropdown(0);
        for wake in scheduler.advance(300) {
            if let Wake::DropdownClose(index) = wake {
                fx.navigation.close_delay_elapsed(index);
            }
        }

        assert_eq!(fx.navigation.dropdown(0), Some(DropdownState::Open));
        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(fx.items[0].attribute(DATA_OPEN), Some("true".into()));
    }

    #[test]
    fn outside_click_closes_all_inside_click_does_not() {
        let mut fx = fixture(2);

        fx.navigation.toggle_dropdown(0);
        fx.navigation.document_click(true);
        assert_eq!(open_indices(&fx), vec![0]);

        fx.navigation.document_click(false);
        assert_eq!(open_indices(&fx), Vec::<usize>::new());
    }

    #[test]
    fn escape_closes_everything_regardless_of_state() {
        let mut fx = fixture(2);

        fx.navigation.escape(&mut fx.lock);
        assert_eq!(fx.navigation.menu(), MenuState::Closed);

        fx.navigation.toggle_menu(&mut fx.lock);
        fx.navigation.toggle_dropdown(1);
        fx.navigation.escape(&mut fx.lock);

        assert_eq!(fx.navigation.menu(), MenuState::Closed);
        assert_eq!(open_indices(&fx), Vec::<usize>::new());
        assert_eq!(fx.body.style(OVERFLOW), None);
    }

    #[test]
    fn dropdown_without_toggle_still_hovers() {
        let item = MockElement::new();
        let body = MockElement::new();
        let mut lock = ScrollLock::new(body);
        let mut navigation: Navigation<MockElement, FakeHandle> = Navigation::new(
            MockElement::new(),
            MockElement::new(),
            MockElement::new(),
            vec![Dropdown::new(item.clone(), None)],
            NavConfig::default(),
        );

        assert!(!navigation.has_toggle(0));
        navigation.pointer_enter(0, 1280.0);
        assert_eq!(item.attribute(DATA_OPEN), Some("true".into()));

        navigation.close_menu(&mut lock);
        assert_eq!(item.attribute(DATA_OPEN), Some("false".into()));
    }
}
