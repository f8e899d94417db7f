pub mod date_range;
pub mod header;
pub mod level_tag;
pub mod marker;
pub mod noise;
pub mod ruler;

pub use date_range::{DatePattern, DateRange};
pub use header::{Header, Section};
pub use level_tag::{LevelTag, TagMatch};
pub use marker::{LineStart, Marker};
pub use noise::{DEFAULT_NOISE_PATTERNS, NoiseFilter};
pub use ruler::{RulerTable, ruler_words};
