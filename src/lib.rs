pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod surface;
pub mod templates;

pub use error::BriefError;

/// Trim a form field the way the browser form does: Unicode white space plus BOM.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
