//! Terminal output for computed statistics.

pub mod format;

pub use format::format_statistics_table;
