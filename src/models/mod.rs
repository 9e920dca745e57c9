pub mod corpus;
pub mod game;
pub mod query;

pub use corpus::Corpus;
pub use game::{CandidateMatch, CanonicalRecord, GameRow, RawRecord};
pub use query::{BuiltQuery, QueryOptions, SearchType};
