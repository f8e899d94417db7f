pub mod convert;
pub mod io;
pub mod metadata;
pub mod models;
pub mod output;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{Conversion, convert, convert_file};
pub use io::*;
pub use metadata::{SuffixRule, SuffixTable};
pub use models::*;
pub use output::{OutputDocument, render_outline};
pub use parsing::{ParseOptions, ParsedDoc, parse_document};
