use tracing::debug;

use crate::dom::{Element, Page};

// in-page anchor navigation
//
// scrolls so that the target lands just below the fixed header instead of underneath it.
// when the page has no header the offset is zero
pub struct AnchorScroll<E: Element> {
    header: Option<E>,
}

impl<E: Element> AnchorScroll<E> {
    pub fn new(header: Option<E>) -> Self {
        AnchorScroll { header }
    }

    /// Resolves an anchor href to the document offset of its target.
    ///
    /// `None` means the click should keep its default behavior: either the bare `#`, an
    /// href that is not a fragment, or a fragment with no matching element.
    pub fn target<P: Page>(&self, href: &str, page: &P) -> Option<f64> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;

        let top = page.fragment_top(id);
        if top.is_none() {
            debug!(href, "anchor target missing, leaving default navigation");
        }
        top
    }

    pub fn destination(&self, target_top: f64) -> f64 {
        let header_height = self
            .header
            .as_ref()
            .map_or(0.0, |header| header.offset_height());

        target_top - header_height
    }

    pub fn scroll_to<P: Page>(&self, target_top: f64, page: &P) {
        let top = self.destination(target_top);

        debug!(top, "smooth scrolling to anchor");
        page.smooth_scroll_to(top);
    }
}
