use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::error::RemapError;

/// All individual company names in a column, de-duplicated in first-seen order
///
/// Multi-company cells are split on commas.
pub fn get_unique_companies<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut companies = Vec::new();

    for cell in cells {
        for company in cell.as_ref().split(',') {
            if seen.insert(company.to_string()) {
                companies.push(company.to_string());
            }
        }
    }

    companies
}

/// Case-insensitive frequency of every company name in a column
pub fn count_companies<I, S>(cells: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = HashMap::new();
    for cell in cells {
        for company in cell.as_ref().to_lowercase().split(',') {
            *counts.entry(company.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Cells naming a branded subsidiary of `parent`, i.e. `"<parent> <word>"`
///
/// The pattern is anchored at the start of the cell unless `match_anywhere` is set.
/// `parent` is matched literally.
pub fn find_simple_company_subsidiaries<I, S>(
    parent: &str,
    cells: I,
    match_anywhere: bool,
) -> Result<Vec<String>, RemapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let anchor = if match_anywhere { "" } else { "^" };
    let pattern = format!(r"{}{}\s\w+", anchor, regex::escape(parent));
    let regex = Regex::new(&pattern).map_err(|e| RemapError::InvalidPattern(e.to_string()))?;

    Ok(cells
        .into_iter()
        .filter(|cell| regex.is_match(cell.as_ref()))
        .map(|cell| cell.as_ref().to_string())
        .collect())
}
