use tracing::debug;

use crate::{
    contract::OVERFLOW,
    dom::Element,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Holder {
    Menu,
    Lightbox,
}

// page scroll lock
//
// both the mobile menu and the lightbox suppress page scrolling.  each holds the lock
// independently and body overflow is hidden while either of them does, so closing the
// menu underneath an open lightbox leaves the page locked
pub struct ScrollLock<E: Element> {
    body: E,
    menu: bool,
    lightbox: bool,
}

impl<E: Element> ScrollLock<E> {
    pub fn new(body: E) -> Self {
        ScrollLock {
            body,
            menu: false,
            lightbox: false,
        }
    }

    pub fn set(&mut self, holder: Holder, held: bool) {
        match holder {
            Holder::Menu => self.menu = held,
            Holder::Lightbox => self.lightbox = held,
        }

        debug!({menu = self.menu, lightbox = self.lightbox}, "scroll lock updated");
        self.body
            .set_style(OVERFLOW, if self.is_locked() { "hidden" } else { "" });
    }

    pub fn is_locked(&self) -> bool {
        self.menu || self.lightbox
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::MockElement;

    #[test]
    fn either_holder_locks() {
        let body = MockElement::new();
        let mut lock = ScrollLock::new(body.clone());

        lock.set(Holder::Menu, true);
        assert_eq!(body.style(OVERFLOW), Some("hidden".into()));

        lock.set(Holder::Lightbox, true);
        lock.set(Holder::Menu, false);
        assert!(lock.is_locked());
        assert_eq!(body.style(OVERFLOW), Some("hidden".into()));

        lock.set(Holder::Lightbox, false);
        assert!(!lock.is_locked());
        assert_eq!(body.style(OVERFLOW), None);
    }
}
