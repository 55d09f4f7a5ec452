use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

/// A listed event. The slug is the external lookup key and is kept
/// normalized (trimmed, lowercase) on every write and lookup.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Event {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub tags: Vec<String>,
    pub agenda: Vec<String>,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

/// Derives a slug from an event title: lowercased, with every run of
/// non-alphanumeric characters collapsed into a single dash.
pub fn slugify(title: &str) -> anyhow::Result<String> {
    let re = Regex::new(r"[^a-z0-9]+")?;
    let lowered = title.trim().to_lowercase();
    let slug = re.replace_all(&lowered, "-");

    Ok(slug.trim_matches('-').to_string())
}
