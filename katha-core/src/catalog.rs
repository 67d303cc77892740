//! The story catalog: the fixed, ordered set of stories on the dashboard.
//!
//! Records are validated once, when the catalog is constructed; after that
//! the catalog is read-only for the life of the process. Reads are pure and
//! always return the same records in the same order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A single entry in the story catalog.
///
/// A record is plain data; nothing is checked until it is handed to
/// [`Catalog::new`]. Two records may legitimately share a `route` (several
/// framings of the same experience), so equality covers every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Display title shown on the card.
    pub name: String,

    /// Short summary shown under the title.
    pub description: String,

    /// Path segment of the destination view, addressed as `/{route}`.
    pub route: String,

    /// Glyph giving the card its visual identity.
    pub image: String,

    /// Free-text category label shown on the genre badge.
    pub genre: String,
}

impl StoryRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        route: impl Into<String>,
        image: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            route: route.into(),
            image: image.into(),
            genre: genre.into(),
        }
    }
}

/// Errors detected while building a catalog.
///
/// Raised once, at startup. One bad record rejects the whole catalog, so a
/// partially valid catalog never reaches the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("story record {index}: required field `{field}` is empty")]
    MissingField { index: usize, field: &'static str },

    #[error("story record {index}: route {route:?} is not a URL-safe token")]
    InvalidRoute { index: usize, route: String },
}

/// A route backed by more than one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCollision {
    /// The shared route token.
    pub route: String,

    /// Titles of every record backing the route, in catalog order.
    pub names: Vec<String>,
}

/// The ordered, immutable story catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<StoryRecord>,
}

impl Catalog {
    /// Validate `records` and build the catalog, preserving their order.
    ///
    /// Every record needs a non-blank name and description and a non-empty
    /// URL-safe route. Validation stops at the first offender.
    pub fn new(records: Vec<StoryRecord>) -> Result<Self, CatalogError> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    index,
                    field: "name",
                });
            }
            if record.description.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    index,
                    field: "description",
                });
            }
            if record.route.is_empty() {
                return Err(CatalogError::MissingField {
                    index,
                    field: "route",
                });
            }
            if !is_url_safe_token(&record.route) {
                return Err(CatalogError::InvalidRoute {
                    index,
                    route: record.route.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// All records, in display order. Pure read; never reorders.
    pub fn records(&self) -> &[StoryRecord] {
        &self.records
    }

    /// The record at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&StoryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `record` is one of this catalog's own entries.
    pub fn contains(&self, record: &StoryRecord) -> bool {
        self.records.iter().any(|r| r == record)
    }

    /// Report every route backed by more than one entry.
    ///
    /// Shared routes are tolerated, not an error; this exists so content
    /// authors can tell intentional reuse from a data-entry slip. Collisions
    /// come back in order of each route's first appearance, with names in
    /// catalog order.
    pub fn route_collisions(&self) -> Vec<RouteCollision> {
        let mut order: Vec<&str> = Vec::new();
        let mut names_by_route: HashMap<&str, Vec<&str>> = HashMap::new();
        for record in &self.records {
            let names = names_by_route.entry(record.route.as_str()).or_default();
            if names.is_empty() {
                order.push(record.route.as_str());
            }
            names.push(record.name.as_str());
        }
        order
            .into_iter()
            .filter(|route| names_by_route[route].len() > 1)
            .map(|route| RouteCollision {
                route: route.to_string(),
                names: names_by_route[route].iter().map(|n| n.to_string()).collect(),
            })
            .collect()
    }
}

/// RFC 3986 unreserved characters, the set that never needs percent-encoding.
fn is_url_safe_token(route: &str) -> bool {
    route
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// The six stories shipped with the dashboard.
///
/// Two pairs deliberately share a destination (`cleanliness` and
/// `mahakumbh`); see [`Catalog::route_collisions`].
pub fn sample_records() -> Vec<StoryRecord> {
    vec![
        StoryRecord::new(
            "Whispering Fort",
            "Whispering Fort: A place where ancient secrets echo through time.",
            "golconda",
            "🏰",
            "Historical",
        ),
        StoryRecord::new(
            "Clean Brilliance",
            "A fun and interactive way to learn about cleanliness and hygiene.",
            "cleanliness",
            "🧹",
            "Awareness",
        ),
        StoryRecord::new(
            "The Kumbh Quest of Pratappur",
            "Embark on a journey to discover the ancient mysteries of the Mahakumbh!",
            "mahakumbh",
            "⚔️",
            "Cultural",
        ),
        StoryRecord::new(
            "Charminar",
            "Charminar the glimpse of Hyderabad!",
            "charminar",
            "🕌",
            "Historical",
        ),
        StoryRecord::new(
            "The Lost Temple of Hampi",
            "A hidden temple a lost legend!",
            "cleanliness",
            "🏛️",
            "Mythological",
        ),
        StoryRecord::new(
            "Sunset Over Konark",
            "A chariot frozen in time!",
            "mahakumbh",
            "🌅",
            "Archaeological",
        ),
    ]
}
