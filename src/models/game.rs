use serde::{Deserialize, Serialize};

/// Untyped nested record as returned by the catalog API. Never mutated.
pub type RawRecord = serde_json::Value;

/// Flattened representation of one game
///
/// `None` marks a field that was absent from the raw record. Collection fields are
/// either absent or fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: i64,
    pub name: String,
    pub release_year: Option<i32>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    /// Raw tag codes, untranslated
    pub tags: Option<Vec<String>>,
    pub age_ratings: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub rating_count: i64,
    pub similar_games: Option<Vec<String>>,
    pub themes: Option<Vec<String>>,
    pub summary: Option<String>,
    pub involved_companies: Option<Vec<String>>,
}

/// Result of matching catalog candidates against a title
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateMatch {
    NoMatch,
    /// The payload held exactly one acceptable candidate
    Single(RawRecord),
    /// The payload held several candidates; these are the accepted ones
    Multiple(Vec<RawRecord>),
}

impl CandidateMatch {
    pub fn is_match(&self) -> bool {
        !matches!(self, CandidateMatch::NoMatch)
    }

    pub fn len(&self) -> usize {
        match self {
            CandidateMatch::NoMatch => 0,
            CandidateMatch::Single(_) => 1,
            CandidateMatch::Multiple(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            CandidateMatch::NoMatch => vec![],
            CandidateMatch::Single(record) => vec![record],
            CandidateMatch::Multiple(records) => records,
        }
    }
}

/// One row of the tabular corpus
///
/// Column names match the `CanonicalRecord` fields; list fields are stored as
/// comma-joined strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub platforms: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub age_ratings: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: i64,
    #[serde(default)]
    pub similar_games: Option<String>,
    #[serde(default)]
    pub themes: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub involved_companies: Option<String>,
}

fn join(values: Option<Vec<String>>) -> Option<String> {
    values.map(|v| v.join(","))
}

impl From<CanonicalRecord> for GameRow {
    fn from(record: CanonicalRecord) -> Self {
        GameRow {
            id: record.id,
            name: record.name,
            release_year: record.release_year,
            category: record.category,
            slug: record.slug,
            platforms: join(record.platforms),
            genres: join(record.genres),
            tags: join(record.tags),
            age_ratings: join(record.age_ratings),
            rating: record.rating,
            rating_count: record.rating_count,
            similar_games: join(record.similar_games),
            themes: join(record.themes),
            summary: record.summary,
            involved_companies: join(record.involved_companies),
        }
    }
}

impl GameRow {
    /// Cell value of a named column, as text
    ///
    /// Returns `None` for unknown columns and `Some(None)` for absent cells.
    pub fn cell(&self, column: &str) -> Option<Option<String>> {
        let value = match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "release_year" => self.release_year.map(|y| y.to_string()),
            "category" => self.category.clone(),
            "slug" => self.slug.clone(),
            "platforms" => self.platforms.clone(),
            "genres" => self.genres.clone(),
            "tags" => self.tags.clone(),
            "age_ratings" => self.age_ratings.clone(),
            "rating" => self.rating.map(|r| r.to_string()),
            "rating_count" => Some(self.rating_count.to_string()),
            "similar_games" => self.similar_games.clone(),
            "themes" => self.themes.clone(),
            "summary" => self.summary.clone(),
            "involved_companies" => self.involved_companies.clone(),
            _ => return None,
        };
        Some(value)
    }
}
