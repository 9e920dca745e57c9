pub mod companies;
pub mod game_lookup;
pub mod normalizer;
pub mod providers;
pub mod query_builder;
pub mod recommendations;
pub mod remapper;
pub mod response_validator;

pub use game_lookup::{lookup_title, LookupOutcome, LookupRequest};
