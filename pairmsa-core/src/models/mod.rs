pub mod alignment;
pub mod paired;
pub mod row;

// re-export for cleaner imports
pub use self::alignment::ParsedAlignment;
pub use self::paired::{PairedAlignment, PairedColumns, PairedRow};
pub use self::row::AlignmentRow;
