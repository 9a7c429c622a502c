//! marker-core: Core library for parsing and merging collectible card lists
//!
//! This library provides functionality to:
//! - Parse pasted multi-line card listings into structured records
//! - Merge two record lists, relabeling cross-list duplicates
//! - Read and write the record table as a CSV spreadsheet
//! - Sort a stored table by collector number and variant tier

pub mod error;
pub mod merger;
pub mod parser;
pub mod record;
pub mod sheet;
pub mod sorter;

pub use error::{Error, Result};
pub use merger::merge_with_duplicates;
pub use parser::parse_lines;
pub use record::{Record, VARIANT_NORMAL, VARIANT_REVERSE_HOLO};
pub use sheet::{find_latest_sheet, load_csv, read_csv, save_csv, write_csv, write_json};
pub use sorter::{sort_records, variant_rank};
