//! Cut-file ingestion
//!
//! Parses an uploaded file, normalizes every row and persists the batch
//! together with its records in one transaction.

pub mod clock;
pub mod parser;
mod service;


pub use clock::{Clock, FixedClock, SystemClock};
pub use parser::{ParsedFile, parse_csv};
pub use service::{BatchIngestor, MAX_FILENAME_LEN, UNNAMED_UPLOAD};
