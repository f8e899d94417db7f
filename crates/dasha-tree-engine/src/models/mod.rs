pub mod input_file;
pub mod level;
pub mod period;
pub mod tree;
pub mod warning;

pub use input_file::InputFile;
pub use level::{DashaLevel, LEVEL_COUNT};
pub use period::PeriodNode;
pub use tree::{DashaTree, PersonRecord, SummaryEntry};
pub use warning::{Warning, WarningKind};
