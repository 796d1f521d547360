//! YAML front matter extraction.
//!
//! Content files may open with a `---` fenced YAML block carrying
//! `title`, `description` and `date`. Files without the block are valid
//! and simply have no metadata.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Closing fence: a line holding only `---`.
static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^---[ \t]*$").expect("closing fence pattern compiles"));

/// Metadata fields recognized in front matter. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept as a raw YAML value: authors write dates quoted, unquoted or as bare years.
    #[serde(default)]
    pub date: Option<serde_yaml::Value>,
}

impl FrontMatter {
    /// The `date` field rendered as text, if it is a scalar.
    pub fn raw_date(&self) -> Option<String> {
        match self.date.as_ref()? {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A content file split into metadata and markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent {
    pub front_matter: Option<FrontMatter>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("Front matter is not closed with ---")]
    Unclosed,

    #[error("Front matter is not valid YAML: {0}")]
    InvalidYaml(String),
}

/// Split a content file into front matter and body.
///
/// A UTF-8 BOM is stripped and line endings are normalized to `\n` first.
pub fn parse(raw: &str) -> Result<ParsedContent, FrontMatterError> {
    let normalized = normalize(raw);

    let Some(after_open) = normalized.strip_prefix("---\n") else {
        return Ok(ParsedContent {
            front_matter: None,
            body: normalized,
        });
    };

    let fence = CLOSING_FENCE
        .find(after_open)
        .ok_or(FrontMatterError::Unclosed)?;

    let yaml = &after_open[..fence.start()];
    let body = after_open[fence.end()..]
        .strip_prefix('\n')
        .unwrap_or(&after_open[fence.end()..])
        .to_string();

    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?
    };

    Ok(ParsedContent {
        front_matter: Some(front_matter),
        body,
    })
}

/// Parse a front matter date.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and plain
/// `YYYY-MM-DD` dates (taken as midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn normalize(raw: &str) -> String {
    raw.strip_prefix('\u{FEFF}')
        .unwrap_or(raw)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}
