/// Flattens raw catalog records into `CanonicalRecord`s.
///
/// Optional fields are translated only when their key is present; a missing key (or an
/// explicit `null`) becomes `None`. `rating_count` defaults to 0. `release_dates` is read
/// unconditionally and a list element missing its expected sub-key fails the whole record.
use serde_json::Value;

use crate::{
    error::NormalizeError,
    models::{CanonicalRecord, RawRecord},
    vocabulary::{age_rating_label, category_label},
};

type NormalizeResult<T> = Result<T, NormalizeError>;

/// Normalizes every record, failing on the first malformed one
pub fn normalize_records(records: &[RawRecord]) -> NormalizeResult<Vec<CanonicalRecord>> {
    records.iter().map(normalize_record).collect()
}

pub fn normalize_record(record: &RawRecord) -> NormalizeResult<CanonicalRecord> {
    let id = field(record, "id")
        .ok_or(NormalizeError::MissingField("id"))?
        .as_i64()
        .ok_or(NormalizeError::UnexpectedShape {
            field: "id",
            expected: "an integer",
        })?;

    let name = field(record, "name")
        .ok_or(NormalizeError::MissingField("name"))?
        .as_str()
        .ok_or(NormalizeError::UnexpectedShape {
            field: "name",
            expected: "a string",
        })?
        .to_string();

    let category = field(record, "category")
        .map(|value| {
            let code = value.as_i64().ok_or(NormalizeError::UnexpectedShape {
                field: "category",
                expected: "an integer code",
            })?;
            category_label(code)
                .map(str::to_string)
                .ok_or(NormalizeError::UnknownCategory(code))
        })
        .transpose()?;

    let age_ratings = optional_list(record, "age_ratings", |element| {
        let code = element
            .get("rating")
            .and_then(Value::as_i64)
            .ok_or(NormalizeError::UnexpectedShape {
                field: "age_ratings",
                expected: "objects with an integer 'rating'",
            })?;
        age_rating_label(code)
            .map(str::to_string)
            .ok_or(NormalizeError::UnknownAgeRating(code))
    })?;

    Ok(CanonicalRecord {
        id,
        name,
        release_year: release_year(record)?,
        category,
        slug: optional_string(record, "slug")?,
        platforms: optional_list(record, "platforms", |e| named(e, "platforms"))?,
        genres: optional_list(record, "genres", |e| named(e, "genres"))?,
        tags: optional_list(record, "tags", |e| Ok(stringify(e)))?,
        age_ratings,
        rating: field(record, "rating")
            .map(|value| {
                value.as_f64().ok_or(NormalizeError::UnexpectedShape {
                    field: "rating",
                    expected: "a number",
                })
            })
            .transpose()?,
        rating_count: field(record, "rating_count")
            .map(|value| {
                value.as_i64().ok_or(NormalizeError::UnexpectedShape {
                    field: "rating_count",
                    expected: "an integer",
                })
            })
            .transpose()?
            .unwrap_or(0),
        similar_games: optional_list(record, "similar_games", |e| named(e, "similar_games"))?,
        themes: optional_list(record, "themes", |e| named(e, "themes"))?,
        summary: optional_string(record, "summary")?,
        involved_companies: optional_list(record, "involved_companies", |element| {
            element
                .get("company")
                .and_then(|company| company.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(NormalizeError::UnexpectedShape {
                    field: "involved_companies",
                    expected: "objects with a 'company.name' string",
                })
        })?,
    })
}

/// A present, non-null field
fn field<'a>(record: &'a RawRecord, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

fn release_year(record: &RawRecord) -> NormalizeResult<Option<i32>> {
    let dates = field(record, "release_dates")
        .ok_or(NormalizeError::MissingField("release_dates"))?
        .as_array()
        .ok_or(NormalizeError::UnexpectedShape {
            field: "release_dates",
            expected: "an array",
        })?;

    let first = dates.first().ok_or(NormalizeError::EmptyReleaseDates)?;

    Ok(first
        .get("y")
        .and_then(Value::as_i64)
        .and_then(|year| i32::try_from(year).ok()))
}

fn optional_string(record: &RawRecord, key: &'static str) -> NormalizeResult<Option<String>> {
    field(record, key)
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or(NormalizeError::UnexpectedShape {
                    field: key,
                    expected: "a string",
                })
        })
        .transpose()
}

/// Translates a list field element-wise; any element that fails fails the whole field
fn optional_list<F>(
    record: &RawRecord,
    key: &'static str,
    translate: F,
) -> NormalizeResult<Option<Vec<String>>>
where
    F: Fn(&Value) -> NormalizeResult<String>,
{
    let Some(value) = field(record, key) else {
        return Ok(None);
    };

    let elements = value.as_array().ok_or(NormalizeError::UnexpectedShape {
        field: key,
        expected: "an array",
    })?;

    elements
        .iter()
        .map(translate)
        .collect::<NormalizeResult<Vec<_>>>()
        .map(Some)
}

fn named(element: &Value, key: &'static str) -> NormalizeResult<String> {
    element
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(NormalizeError::UnexpectedShape {
            field: key,
            expected: "objects with a 'name' string",
        })
}

fn stringify(element: &Value) -> String {
    match element {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
