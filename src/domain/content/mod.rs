//! Content module - posts read from markdown files and site navigation.

pub mod front_matter;
mod item;
mod navigation;

pub use front_matter::{FrontMatter, FrontMatterError, ParsedContent};
pub use item::{listing_order, paginate, sort_for_listing, ContentItem, ContentPage, Page};
pub use navigation::{navigation, NavLink, Navigation, SITE_TITLE};
