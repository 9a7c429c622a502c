//! Merge engine for combining two parsed card lists
//!
//! The two lists conventionally come from two physical passes over the same
//! binder: a base pass (every record already labeled "Normal" by an override
//! at parse time) and a second pass for alternate finishes. A second-pass
//! card that also appeared in the base pass is known to exist as a reverse
//! holo, so it is appended with that fixed label instead of its parsed
//! variant.

use crate::record::{Record, VARIANT_REVERSE_HOLO};
use std::collections::HashSet;

/// Merge two record lists, relabeling cross-list duplicates.
///
/// Output order is all of `primary` first (unchanged), then every
/// `secondary` record in its original order. A secondary record whose
/// `(name, number)` key matches a record in `primary` is appended as a
/// copy with the variant forced to "Reverse Holo"; all other secondary
/// records pass through untouched.
///
/// Membership is checked against `primary` only. Two secondary records
/// sharing a key with each other but not with `primary` are both appended
/// as-is, and duplicate keys already inside `primary` all survive.
pub fn merge_with_duplicates(primary: &[Record], secondary: &[Record]) -> Vec<Record> {
    let seen: HashSet<(&str, &str)> = primary.iter().map(Record::key).collect();

    let mut result: Vec<Record> = primary.to_vec();
    for item in secondary {
        if seen.contains(&item.key()) {
            result.push(Record::new(
                item.name.clone(),
                item.number.clone(),
                VARIANT_REVERSE_HOLO,
            ));
        } else {
            result.push(item.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, number: &str, variant: &str) -> Record {
        Record::new(name, number, variant)
    }

    #[test]
    fn test_merge_relabels_duplicate() {
        let primary = vec![rec("Pikachu", "025/102", "Holo")];
        let secondary = vec![
            rec("Pikachu", "025/102", "Common"),
            rec("Bulbasaur", "001/102", "Common"),
        ];

        let merged = merge_with_duplicates(&primary, &secondary);

        assert_eq!(
            merged,
            vec![
                rec("Pikachu", "025/102", "Holo"),
                rec("Pikachu", "025/102", "Reverse Holo"),
                rec("Bulbasaur", "001/102", "Common"),
            ]
        );
    }

    #[test]
    fn test_merge_length_is_sum_of_inputs() {
        let primary = vec![rec("A", "1/10", "Normal"), rec("B", "2/10", "Normal")];
        let secondary = vec![
            rec("A", "1/10", "x"),
            rec("C", "3/10", "x"),
            rec("B", "2/10", "x"),
        ];

        let merged = merge_with_duplicates(&primary, &secondary);
        assert_eq!(merged.len(), primary.len() + secondary.len());
    }

    #[test]
    fn test_primary_records_are_not_mutated_or_reordered() {
        let primary = vec![
            rec("B", "2/10", "Normal"),
            rec("A", "1/10", "Special"),
        ];
        let secondary = vec![rec("A", "1/10", "Common")];

        let merged = merge_with_duplicates(&primary, &secondary);

        assert_eq!(&merged[..2], &primary[..]);
    }

    #[test]
    fn test_non_matching_secondary_keeps_its_variant() {
        let primary = vec![rec("A", "1/10", "Normal")];
        let secondary = vec![rec("C", "3/10", "Jungle")];

        let merged = merge_with_duplicates(&primary, &secondary);
        assert_eq!(merged[1], rec("C", "3/10", "Jungle"));
    }

    #[test]
    fn test_name_must_match_exactly() {
        // Identity is case-sensitive on both name and number.
        let primary = vec![rec("Pikachu", "025/102", "Normal")];
        let secondary = vec![rec("pikachu", "025/102", "Common")];

        let merged = merge_with_duplicates(&primary, &secondary);
        assert_eq!(merged[1].variant, "Common");
    }

    #[test]
    fn test_empty_secondary_returns_primary() {
        let primary = vec![rec("A", "1/10", "Normal"), rec("B", "2/10", "Normal")];

        let merged = merge_with_duplicates(&primary, &[]);
        assert_eq!(merged, primary);
    }

    #[test]
    fn test_empty_primary_passes_secondary_through() {
        let secondary = vec![rec("A", "1/10", "Jungle")];

        let merged = merge_with_duplicates(&[], &secondary);
        assert_eq!(merged, secondary);
    }

    #[test]
    fn test_both_empty() {
        assert!(merge_with_duplicates(&[], &[]).is_empty());
    }

    #[test]
    fn test_secondary_internal_duplicates_are_not_relabeled() {
        // The seen-set is built from primary only; two secondary records
        // sharing a key are both appended unchanged.
        let primary = vec![rec("A", "1/10", "Normal")];
        let secondary = vec![rec("C", "3/10", "x"), rec("C", "3/10", "y")];

        let merged = merge_with_duplicates(&primary, &secondary);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[1].variant, "x");
        assert_eq!(merged[2].variant, "y");
    }

    #[test]
    fn test_duplicate_keys_inside_primary_both_survive() {
        let primary = vec![rec("A", "1/10", "Normal"), rec("A", "1/10", "Normal")];
        let secondary = vec![rec("A", "1/10", "Common")];

        let merged = merge_with_duplicates(&primary, &secondary);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2].variant, "Reverse Holo");
    }
}
