//! INI-style section

use std::fmt;

/// One `[header]` block of key/value fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub header: String,
    pub fields: Vec<(&'static str, String)>,
}

impl RenderedSection {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }
}

/// Writes the section followed by a blank separator line
impl fmt::Display for RenderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.header)?;
        for (key, value) in &self.fields {
            writeln!(f, "{} = {}", key, value)?;
        }
        f.write_str("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let section = RenderedSection::new("profile")
            .field("a", "1")
            .field("b", "");
        assert_eq!(section.to_string(), "[profile]\na = 1\nb = \n\n\n");
    }

    #[test]
    fn test_display_without_fields() {
        assert_eq!(RenderedSection::new("x").to_string(), "[x]\n\n\n");
    }
}
