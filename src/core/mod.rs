pub mod aggregate;
pub mod holiday;
pub mod journal;
pub mod registry;
pub mod store;
