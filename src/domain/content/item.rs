//! Content items and listing order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

/// Listing metadata for one content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// File name without extension.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub published_date: Option<DateTime<Utc>>,
}

/// A content item together with its rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPage {
    #[serde(flatten)]
    pub item: ContentItem,
    pub html: String,
}

/// Listing order: newest first, undated items last, slug as tie-breaker.
pub fn listing_order(a: &ContentItem, b: &ContentItem) -> Ordering {
    match (&a.published_date, &b.published_date) {
        (Some(da), Some(db)) => db.cmp(da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    }
}

/// Sort items into listing order.
pub fn sort_for_listing(items: &mut [ContentItem]) {
    items.sort_by(listing_order);
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

/// Slice `items` into the requested 1-based page.
///
/// Page 0 is treated as page 1; a page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len() as u64;
    let total_pages = ((total + per_page as u64 - 1) / per_page as u64) as u32;
    let start = (page as u64 - 1) * per_page as u64;

    let items: Vec<T> = items
        .into_iter()
        .skip(start as usize)
        .take(per_page as usize)
        .collect();
    let has_more = start + (items.len() as u64) < total;

    Page {
        items,
        page,
        per_page,
        total,
        total_pages,
        has_more,
    }
}
