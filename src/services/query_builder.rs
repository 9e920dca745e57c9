/// Builds APIcalypse query bodies for the catalog `games` endpoint.
///
/// A query is made of a field list, a filter clause, an optional sort clause and the
/// pagination clauses, always in that order. Results are restricted to the allowed
/// category codes and to entries without a version parent.
use crate::{
    models::{BuiltQuery, QueryOptions, SearchType},
    vocabulary::ALLOWED_CATEGORY_CODES,
};

/// Fields requested for every game
pub const GAME_FIELDS: [&str; 15] = [
    "id",
    "name",
    "release_dates.y",
    "category",
    "slug",
    "platforms.name",
    "genres.name",
    "tags",
    "age_ratings.rating",
    "rating",
    "rating_count",
    "similar_games.name",
    "themes.name",
    "summary",
    "involved_companies.company.name",
];

/// Builds the query body for a title lookup
///
/// An unrecognized `search_type` falls back to `name equals`; the fallback is logged and
/// reported through `BuiltQuery::warning`. Sorting is skipped for `search` mode because the
/// API rejects `search` combined with `sort`.
pub fn build_query(options: &QueryOptions) -> BuiltQuery {
    let (search_type, warning) = match SearchType::parse(&options.search_type) {
        Some(search_type) => (search_type, None),
        None => {
            let message = format!(
                "Incorrect value '{}' provided for search_type. Defaulting to \"name equals\"",
                options.search_type
            );
            tracing::warn!(
                search_type = %options.search_type,
                title = %options.title,
                "Unrecognized search type, falling back to name equals"
            );
            (SearchType::NameEquals, Some(message))
        }
    };

    let mut body = format!("f {};", GAME_FIELDS.join(","));
    body.push_str(&filter_clause(search_type, &options.title));

    if options.sort_results && search_type.supports_sorting() {
        body.push_str(&format!("sort {};", options.sort_by));
    } else if options.sort_results {
        tracing::debug!(title = %options.title, "Sorting skipped for search mode");
    }

    body.push_str(&format!("limit {};offset {};", options.limit, options.offset));

    BuiltQuery {
        body,
        search_type,
        warning,
    }
}

fn filter_clause(search_type: SearchType, title: &str) -> String {
    let title = escape_title(title);
    let restriction = format!(
        "(category = ({})) & (version_parent = null)",
        ALLOWED_CATEGORY_CODES
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    match search_type {
        SearchType::Search => format!("search \"{}\";where {};", title, restriction),
        SearchType::NameEquals => format!("where (name = \"{}\") & {};", title, restriction),
        SearchType::NameLike => format!("where (name ~*\"{}\"*) & {};", title, restriction),
    }
}

/// Escapes characters that would terminate the quoted title literal
fn escape_title(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}
