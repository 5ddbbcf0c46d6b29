//! Types shared by several commands

use clap::ValueEnum;
use std::fmt;

/// How responses and dry-run payloads are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON body
    Json,
    /// YAML rendering of the same body
    Yaml,
    /// Field or grant table
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Table => "table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from_str("yaml", true), Ok(OutputFormat::Yaml));
        assert!(OutputFormat::from_str("csv", true).is_err());
    }
}
