//! Filesystem-backed content source.
//!
//! Every `.md` or `.mdx` file in the posts directory is one content item.
//! The slug is the file name without its extension.

use async_trait::async_trait;
use std::collections::btree_map::{BTreeMap, Entry};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::markdown::render_markdown;
use crate::domain::content::front_matter::{self, parse_date, FrontMatterError};
use crate::domain::content::{sort_for_listing, ContentItem, ContentPage, FrontMatter};
use crate::ports::{ContentError, ContentSource};

const EXTENSIONS: [&str; 2] = ["mdx", "md"];

pub struct FilesystemContentSource {
    root: PathBuf,
}

impl FilesystemContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the file for a slug, preferring `.mdx` over `.md`.
    async fn locate(&self, slug: &str) -> Option<PathBuf> {
        for ext in EXTENSIONS {
            let candidate = self.root.join(format!("{}.{}", slug, ext));
            if fs::metadata(&candidate).await.map(|m| m.is_file()).unwrap_or(false) {
                return Some(candidate);
            }
        }
        None
    }
}

#[async_trait]
impl ContentSource for FilesystemContentSource {
    async fn list(&self) -> Result<Vec<ContentItem>, ContentError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(dir = %self.root.display(), "Content directory missing, listing is empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error(&self.root, e)),
        };

        // Keyed by slug so the listing order of the directory never decides
        // which file of a .md/.mdx pair wins.
        let mut candidates: BTreeMap<String, PathBuf> = BTreeMap::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&self.root, e))? {
            let path = entry.path();
            let Some(slug) = slug_of(&path) else {
                continue;
            };
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    tracing::debug!(file = %path.display(), "Skipping non-file content entry");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable content file");
                    continue;
                }
            }
            match candidates.entry(slug) {
                Entry::Vacant(slot) => {
                    slot.insert(path);
                }
                Entry::Occupied(mut slot) => {
                    if is_mdx(&path) {
                        slot.insert(path);
                    }
                }
            }
        }

        let mut items = Vec::with_capacity(candidates.len());
        for (slug, path) in candidates {
            let raw = match fs::read_to_string(&path).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable content file");
                    continue;
                }
            };
            match front_matter::parse(&raw) {
                Ok(parsed) => items.push(to_item(&slug, parsed.front_matter.as_ref())),
                Err(e) => skip_invalid(&path, &e),
            }
        }

        sort_for_listing(&mut items);
        Ok(items)
    }

    async fn get(&self, slug: &str) -> Result<Option<ContentPage>, ContentError> {
        if !is_safe_slug(slug) {
            return Ok(None);
        }
        let Some(path) = self.locate(slug).await else {
            return Ok(None);
        };

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable content file");
                return Ok(None);
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        match front_matter::parse(&raw) {
            Ok(parsed) => Ok(Some(ContentPage {
                item: to_item(slug, parsed.front_matter.as_ref()),
                html: render_markdown(&parsed.body),
            })),
            Err(e) => {
                skip_invalid(&path, &e);
                Ok(None)
            }
        }
    }
}

fn slug_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| stem.to_string())
}

fn is_mdx(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(EXTENSIONS[0])
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains('/') && !slug.contains('\\') && !slug.contains("..")
}

fn to_item(slug: &str, front_matter: Option<&FrontMatter>) -> ContentItem {
    let title = front_matter
        .and_then(|fm| fm.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(slug)
        .to_string();
    let description = front_matter
        .and_then(|fm| fm.description.clone())
        .unwrap_or_default();

    let published_date = front_matter.and_then(|fm| fm.raw_date()).and_then(|raw| {
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            tracing::warn!(slug = %slug, date = %raw, "Unparseable date in front matter");
        }
        parsed
    });

    ContentItem {
        slug: slug.to_string(),
        title,
        description,
        published_date,
    }
}

fn skip_invalid(path: &Path, error: &FrontMatterError) {
    tracing::warn!(file = %path.display(), error = %error, "Skipping content file");
}

fn io_error(path: &Path, e: std::io::Error) -> ContentError {
    ContentError::Io(format!("{}: {}", path.display(), e))
}
