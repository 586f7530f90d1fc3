pub mod daily_total;
pub mod event;
pub mod project;
pub mod shift;

pub use daily_total::DailyTotal;
pub use event::LaborEvent;
pub use project::Project;
pub use shift::Shift;
