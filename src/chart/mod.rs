pub mod builder;
pub mod spec;

pub use builder::build_trend;
pub use spec::ChartSpec;
