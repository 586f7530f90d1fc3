pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

// Re-exports for the most commonly used helpers
pub use date::{parse_date, weekday_zh};
pub use formatting::display_width;
