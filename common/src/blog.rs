use tracing::{debug, instrument};

use crate::{
    config::BlogConfig,
    contract::{CATEGORY_BTN_ACTIVE, DATA_HIDDEN, DISPLAY},
    dom::Element,
};

// an element tagged with data-category
//
// the category is read once when the page is wired; a missing attribute is kept as None
// and only ever matches a button that is missing it too
pub struct Categorized<E: Element> {
    element: E,
    category: Option<String>,
}

impl<E: Element> Categorized<E> {
    pub fn new(element: E, category: Option<String>) -> Self {
        Categorized { element, category }
    }
}

// a card plus its current visibility
struct Card<E: Element> {
    inner: Categorized<E>,
    visible: bool,
}

impl<E: Element> Card<E> {
    fn new(inner: Categorized<E>) -> Self {
        Card {
            inner,
            visible: true,
        }
    }

    fn show(&mut self, visible: bool) {
        self.visible = visible;

        let element = &self.inner.element;
        if visible {
            element.remove_attribute(DATA_HIDDEN);
            element.set_style(DISPLAY, "");
        } else {
            element.set_attribute(DATA_HIDDEN, "true");
            element.set_style(DISPLAY, "none");
        }
    }
}

// blog listing category filter
//
// single-select: the clicked button becomes the only active one, and every card (plus the
// featured card, when the page has one) is re-rendered from the selected category alone
pub struct BlogFilter<E: Element> {
    buttons: Vec<Categorized<E>>,
    cards: Vec<Card<E>>,
    featured: Option<Card<E>>,
    selected: Option<usize>,
    config: BlogConfig,
}

impl<E: Element> BlogFilter<E> {
    pub fn new(
        buttons: Vec<Categorized<E>>,
        cards: Vec<Categorized<E>>,
        featured: Option<Categorized<E>>,
        config: BlogConfig,
    ) -> Self {
        debug!(
            { buttons = buttons.len(), cards = cards.len(), featured = featured.is_some() },
            "wiring blog filter"
        );

        BlogFilter {
            buttons,
            cards: cards.into_iter().map(Card::new).collect(),
            featured: featured.map(Card::new),
            selected: None,
            config,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.buttons.get(index))
            .and_then(|button| button.category.as_deref())
    }

    pub fn card_visible(&self, index: usize) -> Option<bool> {
        self.cards.get(index).map(|card| card.visible)
    }

    pub fn featured_visible(&self) -> Option<bool> {
        self.featured.as_ref().map(|card| card.visible)
    }

    fn matches(&self, selected: Option<&str>, card: Option<&str>) -> bool {
        selected == Some(self.config.all_category.as_str()) || selected == card
    }

    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, index: usize) {
        if index >= self.buttons.len() {
            return;
        }

        for (i, button) in self.buttons.iter().enumerate() {
            button.element.set_class(CATEGORY_BTN_ACTIVE, i == index);
        }
        self.selected = Some(index);

        let selected = self.buttons[index].category.clone();
        let selected = selected.as_deref();

        let visibility: Vec<bool> = self
            .cards
            .iter()
            .map(|card| self.matches(selected, card.inner.category.as_deref()))
            .collect();
        for (card, visible) in self.cards.iter_mut().zip(visibility) {
            card.show(visible);
        }

        let featured = self
            .featured
            .as_ref()
            .map(|card| self.matches(selected, card.inner.category.as_deref()));
        if let (Some(card), Some(visible)) = (self.featured.as_mut(), featured) {
            card.show(visible);
        }
    }
}
