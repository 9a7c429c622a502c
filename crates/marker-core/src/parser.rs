//! Heuristic block parser for pasted card listings
//!
//! Input is a flat sequence of lines with no explicit delimiter between
//! cards. Each card is a repeating group of the form:
//!
//! ```text
//! 1              <- quantity (anchors the block)
//! Pikachu        <- name
//! 025/102        <- collector number
//! Base Set       <- set name (optional, position varies)
//! PAR            <- set code (optional, position varies)
//! $2.50          <- price (ends the block)
//! ```
//!
//! The number of lines between the collector number and the price marker is
//! not fixed, so the scan is pattern-driven rather than offset-driven, and
//! resynchronizes on the next quantity line after a malformed block.

use crate::record::Record;

/// True if the whole trimmed line is a decimal quantity (block anchor).
fn is_quantity(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.chars().all(|c| c.is_ascii_digit())
}

/// True if the line carries a collector number such as "025/102".
fn looks_like_number(line: &str) -> bool {
    line.contains('/')
}

/// True if the trimmed line is a price marker ("$2.50").
fn looks_like_price(line: &str) -> bool {
    line.trim().starts_with('$')
}

/// True if the trimmed line is a short set code: 2-5 characters, each an
/// uppercase ASCII letter, digit, or hyphen (e.g., "PAR", "SWSH", "151").
fn looks_like_set_code(line: &str) -> bool {
    let t = line.trim();
    (2..=5).contains(&t.len())
        && t.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}

/// Maximum lines scanned for a set code / set name before falling back to a
/// plain skip-to-price.
const LOOKAHEAD_LIMIT: usize = 6;

/// Parse a pasted card listing into records.
///
/// If `variant_override` is given, every emitted record gets that variant
/// verbatim and the set-code/set-name heuristics are bypassed.
///
/// There is no error path: unrecognized lines are skipped one at a time,
/// and a block missing a name or collector number is dropped silently. An
/// empty result may therefore mean either empty input or all-noise input.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], variant_override: Option<&str>) -> Vec<Record> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let n = lines.len();
    let mut records = Vec::new();
    let mut i = 0;

    while i < n {
        // Skip blanks between blocks
        while i < n && lines[i].trim().is_empty() {
            i += 1;
        }
        if i >= n {
            break;
        }

        // A block anchors at a quantity line; anything else is noise.
        // Advancing one line at a time bounds the damage of a malformed
        // block to that block.
        if !is_quantity(lines[i]) {
            i += 1;
            continue;
        }
        // The quantity value itself is not kept; it only marks the start.
        i += 1;

        let Some(&name_line) = lines.get(i) else {
            // End of input mid-block: partial data is dropped.
            break;
        };
        let name = name_line.trim();
        i += 1;

        let mut number = "";
        if i < n && looks_like_number(lines[i]) {
            number = lines[i].trim();
            i += 1;
        }

        // Bounded lookahead for a set code, keeping the first plain text
        // line as a fallback set name. Only the price marker stops this
        // scan early; each scanned line is consumed.
        let mut set_name = "";
        let mut set_name_taken = false;
        let mut variant_code = "";
        let mut lookahead = 0;
        while i < n && lookahead < LOOKAHEAD_LIMIT && !looks_like_price(lines[i]) {
            let s = lines[i].trim();
            if !set_name_taken && !s.is_empty() && !looks_like_set_code(s) && !looks_like_number(s)
            {
                set_name = s;
                set_name_taken = true;
            }
            if variant_code.is_empty() && looks_like_set_code(s) {
                variant_code = s;
            }
            lookahead += 1;
            i += 1;
        }

        // Skip the remainder of the block up to its price line, but stop
        // short of a quantity line, which is presumed to start the next
        // block.
        while i < n && !looks_like_price(lines[i]) {
            if is_quantity(lines[i]) {
                break;
            }
            i += 1;
        }
        if i < n && looks_like_price(lines[i]) {
            i += 1;
        }

        if name.is_empty() || number.is_empty() {
            continue;
        }

        let variant = match variant_override {
            Some(v) => v,
            None if !variant_code.is_empty() => variant_code,
            None => set_name,
        };
        records.push(Record::new(name, number, variant));
    }

    records
}
