pub mod add;
pub mod chart;
pub mod export;
pub mod journal;
pub mod project;
pub mod table;
pub mod totals;
pub mod worktype;
