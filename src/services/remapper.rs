/// Corpus-level canonicalization of platform, age rating and genre cells.
///
/// Every remapping here is a fixed point: running it over an already remapped corpus
/// changes nothing.
use std::collections::{BTreeSet, HashMap};

use crate::{
    error::RemapError,
    models::{Corpus, GameRow},
    vocabulary::{canonical_genre, platform_alias, remap_rating, RATING_BOARD_SCALE},
};

/// Splits a stored list cell back into labels
///
/// Accepts both comma-joined text (`E,T`) and list literals (`['E', 'T']`).
pub fn parse_label_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(|label| {
            label
                .trim()
                .trim_matches(|c: char| c == '[' || c == ']')
                .trim()
                .trim_matches(|c: char| c == '\'' || c == '"')
                .to_string()
        })
        .filter(|label| !label.is_empty())
        .collect()
}

/// Replaces each comma-separated platform with its short alias, if it has one
pub fn fold_platforms(cell: &str) -> String {
    cell.split(',')
        .map(|platform| platform_alias(platform).unwrap_or(platform))
        .collect::<Vec<_>>()
        .join(",")
}

/// Collapses a rating list to a single value on the rating-board scale
///
/// The scale is scanned in priority order and the first value present in the list wins.
/// When no scale value is present, a lone label goes through the rating remap table; with
/// several labels the first one the table knows is used. Returns `None` when the list is
/// empty or nothing maps.
pub fn consolidate_age_rating(cell: &str) -> Option<String> {
    let ratings = parse_label_list(cell);

    if let Some(direct) = RATING_BOARD_SCALE
        .iter()
        .find(|scale_value| ratings.iter().any(|rating| rating == *scale_value))
    {
        return Some(direct.to_string());
    }

    match ratings.as_slice() {
        [] => None,
        [single] => remap_rating(single).map(str::to_string),
        many => many
            .iter()
            .find_map(|rating| remap_rating(rating))
            .map(str::to_string),
    }
}

/// Remaps a genre cell through the genre vocabulary
///
/// Several genres are filtered: unknown ones are dropped and the rest rejoined. A single
/// genre must be in the vocabulary, otherwise `RemapError::UnknownGenre` is returned.
pub fn remap_genres(cell: &str) -> Result<Option<String>, RemapError> {
    let genres = parse_label_list(cell);

    match genres.as_slice() {
        [] => Ok(None),
        [single] => canonical_genre(single)
            .map(|genre| Some(genre.to_string()))
            .ok_or_else(|| RemapError::UnknownGenre(single.clone())),
        many => {
            let kept: Vec<&str> = many.iter().filter_map(|g| canonical_genre(g)).collect();
            if kept.is_empty() {
                Ok(None)
            } else {
                Ok(Some(kept.join(",")))
            }
        }
    }
}

pub fn remap_row(row: &GameRow) -> Result<GameRow, RemapError> {
    let genres = match row.genres.as_deref() {
        Some(cell) => remap_genres(cell).map_err(|e| {
            tracing::warn!(id = row.id, name = %row.name, error = %e, "Genre remap failed");
            e
        })?,
        None => None,
    };

    Ok(GameRow {
        platforms: row.platforms.as_deref().map(fold_platforms),
        age_ratings: row.age_ratings.as_deref().and_then(consolidate_age_rating),
        genres,
        ..row.clone()
    })
}

impl Corpus {
    /// Applies platform folding, rating consolidation and genre remap to every row
    pub fn remap(&self) -> Result<Corpus, RemapError> {
        let rows = self
            .rows
            .iter()
            .map(remap_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(rows = rows.len(), "Corpus remapped");

        Ok(Corpus::new(rows))
    }

    /// Removes carriage returns and newlines from every summary
    pub fn strip_summary_escapes(&self) -> Corpus {
        let rows = self
            .rows
            .iter()
            .map(|row| GameRow {
                summary: row.summary.as_deref().map(|s| strip_escape_chars(s, None)),
                ..row.clone()
            })
            .collect();
        Corpus::new(rows)
    }
}

/// Removes `chars` from `text`, or `\r` and `\n` when no characters are given
pub fn strip_escape_chars(text: &str, chars: Option<&[char]>) -> String {
    let chars = chars.unwrap_or(&['\r', '\n']);
    text.chars().filter(|c| !chars.contains(c)).collect()
}

/// Counts each unordered combination of genres across a genre column
pub fn count_genre_combinations<I, S>(cells: I) -> HashMap<BTreeSet<String>, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = HashMap::new();
    for cell in cells {
        let combination: BTreeSet<String> = parse_label_list(cell.as_ref()).into_iter().collect();
        *counts.entry(combination).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(platforms: &str, age_ratings: &str, genres: &str) -> GameRow {
        GameRow {
            id: 1,
            name: "Test".to_string(),
            platforms: Some(platforms.to_string()),
            age_ratings: Some(age_ratings.to_string()),
            genres: Some(genres.to_string()),
            ..GameRow::default()
        }
    }

    #[test]
    fn test_parse_label_list_formats() {
        assert_eq!(parse_label_list("E,T"), vec!["E", "T"]);
        assert_eq!(parse_label_list("['E', 'T']"), vec!["E", "T"]);
        assert_eq!(parse_label_list("[\"CERO_B\"]"), vec!["CERO_B"]);
        assert!(parse_label_list("").is_empty());
        assert!(parse_label_list("[]").is_empty());
    }

    #[test]
    fn test_fold_platforms() {
        assert_eq!(
            fold_platforms("PlayStation 4,Xbox One,UnknownPlat"),
            "PS4,XB1,UnknownPlat"
        );
        assert_eq!(fold_platforms("Nintendo Switch"), "NS");
        assert_eq!(fold_platforms(""), "");
    }

    #[test]
    fn test_rating_scale_priority() {
        assert_eq!(consolidate_age_rating("M,T,Eighteen").as_deref(), Some("T"));
        assert_eq!(consolidate_age_rating("['AO', 'RP']").as_deref(), Some("RP"));
    }

    #[test]
    fn test_single_off_scale_rating_uses_remap() {
        assert_eq!(consolidate_age_rating("CERO_B").as_deref(), Some("E10"));
        assert_eq!(consolidate_age_rating("['CERO_B']").as_deref(), Some("E10"));
    }

    #[test]
    fn test_multiple_off_scale_ratings_use_first_known() {
        assert_eq!(consolidate_age_rating("Eighteen,CERO_Z").as_deref(), Some("M"));
        assert_eq!(consolidate_age_rating("Bogus,USK_6").as_deref(), Some("E10"));
    }

    #[test]
    fn test_missing_ratings() {
        assert_eq!(consolidate_age_rating(""), None);
        assert_eq!(consolidate_age_rating("Bogus"), None);
    }

    #[test]
    fn test_multi_genre_drops_unknown() {
        assert_eq!(
            remap_genres("Role-playing (RPG),Horror,Shooter").unwrap().as_deref(),
            Some("RPG,Shooter")
        );
        assert_eq!(remap_genres("Horror,Survival").unwrap(), None);
    }

    #[test]
    fn test_single_genre_must_be_known() {
        assert_eq!(remap_genres("Platform").unwrap().as_deref(), Some("Platformer"));
        assert_eq!(
            remap_genres("Horror"),
            Err(RemapError::UnknownGenre("Horror".to_string()))
        );
    }

    #[test]
    fn test_remap_row() {
        let remapped = remap_row(&row(
            "PlayStation 4,PC (Microsoft Windows)",
            "Eighteen,M,CERO_D",
            "Shooter,Adventure",
        ))
        .unwrap();
        assert_eq!(remapped.platforms.as_deref(), Some("PS4,Windows"));
        assert_eq!(remapped.age_ratings.as_deref(), Some("M"));
        assert_eq!(remapped.genres.as_deref(), Some("Shooter,Adventure"));
        assert_eq!(remapped.name, "Test");
    }

    #[test]
    fn test_remap_is_a_fixed_point() {
        let corpus = Corpus::new(vec![
            row("PlayStation 4,Xbox One,UnknownPlat", "CERO_B", "Role-playing (RPG),Music"),
            row("Genesis", "USK_18,PEGI", "Platform"),
            row("Nintendo Switch", "Bogus", "Puzzle,Horror"),
        ]);
        let once = corpus.remap().unwrap();
        let twice = once.remap().unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.rows[0].genres.as_deref(), Some("RPG,Rhythm"));
        assert_eq!(once.rows[2].age_ratings, None);
    }

    #[test]
    fn test_corpus_remap_fails_on_unknown_single_genre() {
        let corpus = Corpus::new(vec![row("Xbox", "E", "Horror")]);
        assert!(corpus.remap().is_err());
    }

    #[test]
    fn test_remap_leaves_input_untouched() {
        let corpus = Corpus::new(vec![row("Xbox", "E", "Arcade")]);
        let before = corpus.clone();
        corpus.remap().unwrap();
        assert_eq!(corpus, before);
    }

    #[test]
    fn test_strip_escape_chars() {
        assert_eq!(strip_escape_chars("line one\r\nline two", None), "line oneline two");
        assert_eq!(strip_escape_chars("a-b_c", Some(&['-', '_'])), "abc");
    }

    #[test]
    fn test_strip_summary_escapes() {
        let corpus = Corpus::new(vec![GameRow {
            summary: Some("Save the\nprincess.".to_string()),
            ..GameRow::default()
        }]);
        let cleaned = corpus.strip_summary_escapes();
        assert_eq!(cleaned.rows[0].summary.as_deref(), Some("Save theprincess."));
    }

    #[test]
    fn test_count_genre_combinations_ignores_order() {
        let counts = count_genre_combinations(["RPG,Shooter", "Shooter,RPG", "Puzzle"]);
        let rpg_shooter: BTreeSet<String> = ["RPG", "Shooter"].iter().map(|s| s.to_string()).collect();
        assert_eq!(counts[&rpg_shooter], 2);
        assert_eq!(counts.len(), 2);
    }
}
