//! Site navigation header model.

use serde::Serialize;

pub const SITE_TITLE: &str = "BlogToo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub site_title: &'static str,
    pub home_href: &'static str,
    pub links: Vec<NavLink>,
}

/// Build the header for the page at `current_path`.
///
/// Home is active only on `/`; Blog is active on `/blog` and everything under it.
pub fn navigation(current_path: &str) -> Navigation {
    Navigation {
        site_title: SITE_TITLE,
        home_href: "/",
        links: vec![
            NavLink {
                label: "Home",
                href: "/",
                active: current_path == "/",
            },
            NavLink {
                label: "Blog",
                href: "/blog",
                active: current_path.starts_with("/blog"),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(nav: &Navigation) -> Vec<&str> {
        nav.links.iter().filter(|l| l.active).map(|l| l.label).collect()
    }

    #[test]
    fn home_is_active_on_root() {
        assert_eq!(active(&navigation("/")), vec!["Home"]);
    }

    #[test]
    fn blog_is_active_on_posts() {
        assert_eq!(active(&navigation("/blog")), vec!["Blog"]);
        assert_eq!(active(&navigation("/blog/hello-world")), vec!["Blog"]);
    }

    #[test]
    fn nothing_active_elsewhere() {
        assert!(active(&navigation("/about")).is_empty());
    }
}
