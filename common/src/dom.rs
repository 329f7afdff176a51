// dom seams
//
// controllers only ever write to the page through these traits.  the browser binding wraps
// web_sys elements, tests use the recording mocks in crate::testing.  all methods take &self
// because dom handles are shared references, not owned values

/// A single element the controllers project their state onto.
pub trait Element {
    fn set_class(&self, class: &str, on: bool);

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Sets an inline style property; the empty string clears the override.
    fn set_style(&self, property: &str, value: &str);

    fn offset_height(&self) -> f64;

    /// Forces a synchronous layout so that a class added afterwards transitions from the
    /// current computed style instead of being coalesced with earlier writes.
    fn reflow(&self);
}

/// Window-level geometry and scrolling.
pub trait Page {
    fn viewport_width(&self) -> f64;

    fn scroll_y(&self) -> f64;

    /// Document-relative top of the element with the given id, if there is one.
    fn fragment_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
