/// Static vocabulary tables
///
/// Process-wide, read-only lookup maps initialised on first use. `catalog` holds the
/// tables for the codes the catalog API emits; `corpus` holds the secondary tables used
/// when remapping an assembled corpus.
pub mod catalog;
pub mod corpus;

pub use catalog::{age_rating_label, category_label, ALLOWED_CATEGORY_CODES};
pub use corpus::{canonical_genre, platform_alias, remap_rating, RATING_BOARD_SCALE};
