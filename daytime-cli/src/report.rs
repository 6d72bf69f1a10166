//! Rendering of command results, as plain text or as JSON

use std::fmt::{self, Display};

use serde::Serialize;

/// A single evaluated expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub section: &'static str,
    pub expression: String,
    pub result: String,
}

/// The ordered results of a command
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn push(
        &mut self,
        section: &'static str,
        expression: impl Into<String>,
        result: impl ToString,
    ) {
        self.entries.push(Entry {
            section,
            expression: expression.into(),
            result: result.to_string(),
        });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain text form: a heading per section, followed by one
/// `expression = result` line per entry.
impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;

        for entry in &self.entries {
            if current != Some(entry.section) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "{}", entry.section)?;
                current = Some(entry.section);
            }

            writeln!(f, "    {} = {}", entry.expression, entry.result)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::default();
        report.push("Format", "12:12:12", "12:12:12");
        report.push("Compare", "12:12:12 < 00:00:00", false);
        report.push("Compare", "12:12:12 > 00:00:00", true);
        report
    }

    #[test]
    fn text() {
        assert_eq!(
            sample().to_string(),
            "Format\n    12:12:12 = 12:12:12\n\nCompare\n    12:12:12 < 00:00:00 = false\n    12:12:12 > 00:00:00 = true\n"
        );
        assert_eq!(Report::default().to_string(), "");
    }

    #[test]
    fn json() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
        assert_eq!(value["entries"][1]["section"], "Compare");
        assert_eq!(value["entries"][2]["result"], "true");
    }
}
