use std::{cell::RefCell, rc::Rc};

use tracing::warn;

use angelic_common::{Disposition, Site, SiteEvent};

use crate::{
    dom::{DomElement, WebPage},
    scheduler::WebScheduler,
};

pub type WebSite = Site<DomElement, WebScheduler>;

// owns the site for the lifetime of the page
//
// every listener and every scheduled callback funnels through dispatch, so the site is only
// ever borrowed by one event at a time
pub struct Runtime {
    site: RefCell<WebSite>,
    page: WebPage,
    scheduler: WebScheduler,
}

impl Runtime {
    pub fn new(site: WebSite, page: WebPage) -> Rc<Self> {
        Rc::new_cyclic(|weak| Runtime {
            site: RefCell::new(site),
            page,
            scheduler: WebScheduler::new(weak.clone()),
        })
    }

    pub fn page(&self) -> &WebPage {
        &self.page
    }

    pub fn start(&self) {
        match self.site.try_borrow_mut() {
            Ok(mut site) => site.start(&self.page),
            Err(_) => warn!("site busy during startup"),
        }
    }

    pub fn dispatch(&self, event: SiteEvent) -> Disposition {
        // browsers do not nest these events, but a synchronous dom write that fires another
        // event would; drop it rather than panic on the borrow
        let Ok(mut site) = self.site.try_borrow_mut() else {
            warn!(?event, "dropping re-entrant event");
            return Disposition::PASS;
        };

        site.dispatch(event, &self.page, &self.scheduler)
    }
}
