use super::Formatter;
use crate::Result;

/// Leaves the text as rendered.
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn format(&self, _name: &str, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}
