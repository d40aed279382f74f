//! Presenting outcomes to the shopper: reply text and CSV download

pub mod export;
pub mod render;

pub use export::{export_csv, title_case, to_csv_string, write_csv};
pub use render::{heading, render};
