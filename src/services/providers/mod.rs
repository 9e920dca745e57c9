/// Catalog data provider abstraction
///
/// The lookup pipeline only needs one operation from the outside world: post a built
/// query to a catalog endpoint and get back the raw candidate records. Keeping it behind a
/// trait lets the pipeline run against a mock in tests.
use crate::{
    error::AppResult,
    models::{BuiltQuery, RawRecord},
};

pub mod igdb;

pub use igdb::IgdbProvider;

/// Trait for game catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Posts a query to `endpoint` and returns the raw candidate records
    ///
    /// No retries; transport failures and non-array payloads are errors.
    async fn query(&self, endpoint: &str, query: &BuiltQuery) -> AppResult<Vec<RawRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
