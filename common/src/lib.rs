// angelic photo site behavior
//
// target-independent half of the site script: the controllers, the dom and scheduler seams
// they are injected with, and the dispatcher that routes page events to them.  the wasm
// binding in the webapp crate implements the seams over web_sys; tests use crate::testing
pub mod anchor;
pub mod blog;
pub mod config;
pub mod contract;
pub mod dom;
pub mod lightbox;
pub mod nav;
pub mod schedule;
pub mod scroll;
pub mod scroll_lock;
pub mod site;

#[cfg(test)]
pub mod testing;

pub use config::{SiteConfig, read_config};
pub use dom::{Element, Page};
pub use schedule::{Scheduler, Wake};
pub use site::{Disposition, Key, Site, SiteEvent};
