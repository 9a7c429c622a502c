//! Record model for parsed card entries

use serde::{Deserialize, Serialize};

/// Variant label applied to every record of the base pass.
pub const VARIANT_NORMAL: &str = "Normal";

/// Variant label given to second-pass records that duplicate a base record.
pub const VARIANT_REVERSE_HOLO: &str = "Reverse Holo";

/// One card entry in the output table
///
/// Field order and serde renames define the spreadsheet columns:
/// `Name`, `Number`, `Variant Type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Card display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Collector number (e.g., "025/102")
    #[serde(rename = "Number")]
    pub number: String,
    /// Variant classification: detected set code, fallback set name,
    /// caller override, or the duplicate label assigned during merge
    #[serde(rename = "Variant Type")]
    pub variant: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            variant: variant.into(),
        }
    }

    /// Identity key used for duplicate detection across lists
    ///
    /// The variant label is deliberately not part of the key: the same card
    /// in a different finish is still the same card.
    pub fn key(&self) -> (&str, &str) {
        (self.name.as_str(), self.number.as_str())
    }
}
