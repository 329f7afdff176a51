// markup and stylesheet contract
//
// the controllers never invent names of their own: every id, class and attribute they read
// or write is listed here and must match the static pages and site.css

// element ids
pub const HEADER_ID: &str = "header";
pub const NAV_ID: &str = "nav";
pub const HAMBURGER_ID: &str = "hamburger";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub const CONFIG_ID: &str = "site-config";

// navigation
pub const NAV_OPEN: &str = "nav--open";
pub const HAMBURGER_ACTIVE: &str = "hamburger--active";
pub const OVERLAY: &str = "nav-overlay";
pub const OVERLAY_VISIBLE: &str = "nav-overlay--visible";
pub const DROPDOWN_ITEM_SELECTOR: &str = ".nav__item--dropdown";
pub const DROPDOWN_TOGGLE_SELECTOR: &str = ".nav__link--dropdown-toggle";

// header
pub const HEADER_SCROLLED: &str = "header--scrolled";

// anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// blog
pub const CATEGORY_BTN_SELECTOR: &str = ".blog-categories__btn";
pub const CATEGORY_BTN_ACTIVE: &str = "blog-categories__btn--active";
pub const BLOG_CARD_SELECTOR: &str = ".blog-listing__grid .blog-card";
pub const FEATURED_CARD_SELECTOR: &str = ".blog-featured-card";

// gallery and lightbox
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-grid__item, .gallery-masonry__item";
pub const GALLERY_IMG_SELECTOR: &str = ".gallery-grid__img, .gallery-masonry__img";
pub const LIGHTBOX_ACTIVE: &str = "lightbox--active";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox__close";
pub const LIGHTBOX_PREV_SELECTOR: &str = ".lightbox__prev";
pub const LIGHTBOX_NEXT_SELECTOR: &str = ".lightbox__next";
pub const LIGHTBOX_CONTENT_SELECTOR: &str = ".lightbox__content";

// attributes
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const DATA_OPEN: &str = "data-open";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_HIDDEN: &str = "data-hidden";
pub const HIDDEN: &str = "hidden";
pub const SRC: &str = "src";
pub const ALT: &str = "alt";
pub const HREF: &str = "href";

// inline styles
pub const OVERFLOW: &str = "overflow";
pub const DISPLAY: &str = "display";
