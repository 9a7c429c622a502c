//! Sorting of stored sheets by collector number and variant tier

use crate::record::{Record, VARIANT_NORMAL, VARIANT_REVERSE_HOLO};

/// Sort rank for a variant label.
///
/// The base label sorts before the duplicate label, so a card and its
/// reverse holo end up adjacent with the normal print first. Unknown
/// labels sort after both.
pub fn variant_rank(variant: &str) -> u8 {
    match variant {
        VARIANT_NORMAL => 0,
        VARIANT_REVERSE_HOLO => 1,
        _ => 2,
    }
}

/// Order records by collector number, then variant tier.
///
/// Numbers are compared as text; collector numbers are zero-padded in the
/// source listings ("004/102"), so lexicographic order matches numeric
/// order within a set. The sort is stable, preserving input order for
/// records that tie on both keys.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| {
        a.number
            .cmp(&b.number)
            .then_with(|| variant_rank(&a.variant).cmp(&variant_rank(&b.variant)))
    });
}
