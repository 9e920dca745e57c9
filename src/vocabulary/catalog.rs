//! Lookup tables for the numeric codes the catalog API returns.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Category codes the query builder restricts results to: main game, DLC/add-on,
/// expansion, remake, remaster, expanded edition and port.
pub const ALLOWED_CATEGORY_CODES: [i64; 7] = [0, 1, 2, 8, 9, 10, 11];

static CATEGORIES: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "main_game"),
        (1, "dlc_addon"),
        (2, "expansion"),
        (3, "bundle"),
        (4, "standalone_expansion"),
        (5, "mod"),
        (6, "episode"),
        (7, "season"),
        (8, "remake"),
        (9, "remaster"),
        (10, "expanded_game"),
        (11, "port"),
        (12, "fork"),
        (13, "pack"),
        (14, "update"),
    ])
});

// Board-qualified: PEGI (1-5), ESRB (6-12), CERO, USK, GRAC, ClassInd, ACB.
static AGE_RATINGS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Three"),
        (2, "Seven"),
        (3, "Twelve"),
        (4, "Sixteen"),
        (5, "Eighteen"),
        (6, "RP"),
        (7, "EC"),
        (8, "E"),
        (9, "E10"),
        (10, "T"),
        (11, "M"),
        (12, "AO"),
        (13, "CERO_A"),
        (14, "CERO_B"),
        (15, "CERO_C"),
        (16, "CERO_D"),
        (17, "CERO_Z"),
        (18, "USK_0"),
        (19, "USK_6"),
        (20, "USK_12"),
        (21, "USK_16"),
        (22, "USK_18"),
        (23, "GRAC_ALL"),
        (24, "GRAC_Twelve"),
        (25, "GRAC_Fifteen"),
        (26, "GRAC_Eighteen"),
        (27, "GRAC_TESTING"),
        (28, "CLASS_IND_L"),
        (29, "CLASS_IND_Ten"),
        (30, "CLASS_IND_Twelve"),
        (31, "CLASS_IND_Fourteen"),
        (32, "CLASS_IND_Sixteen"),
        (33, "CLASS_IND_Eighteen"),
        (34, "ACB_G"),
        (35, "ACB_PG"),
        (36, "ACB_M"),
        (37, "ACB_MA15"),
        (38, "ACB_R18"),
        (39, "ACB_RC"),
    ])
});

/// Label for a catalog category code
pub fn category_label(code: i64) -> Option<&'static str> {
    CATEGORIES.get(&code).copied()
}

/// Board-qualified label for an age rating code
pub fn age_rating_label(code: i64) -> Option<&'static str> {
    AGE_RATINGS.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_code_has_a_distinct_label() {
        let labels: HashSet<&str> = (0..=14)
            .map(|code| category_label(code).unwrap())
            .collect();
        assert_eq!(labels.len(), 15);
        assert_eq!(category_label(0), Some("main_game"));
        assert_eq!(category_label(14), Some("update"));
    }

    #[test]
    fn test_unknown_category_code() {
        assert_eq!(category_label(15), None);
        assert_eq!(category_label(-1), None);
    }

    #[test]
    fn test_age_rating_codes() {
        assert_eq!(AGE_RATINGS.len(), 39);
        assert_eq!(age_rating_label(1), Some("Three"));
        assert_eq!(age_rating_label(14), Some("CERO_B"));
        assert_eq!(age_rating_label(39), Some("ACB_RC"));
        assert_eq!(age_rating_label(0), None);
    }

    #[test]
    fn test_allowed_categories_are_known() {
        for code in ALLOWED_CATEGORY_CODES {
            assert!(category_label(code).is_some());
        }
    }
}
