//! # Lesson Transcripts
//!
//! Lessons record what they observe into a [`Transcript`] instead of
//! printing it. The runner decides how to render it; tests inspect it.

use std::fmt;

use log::debug;
use serde::Serialize;

/// One recorded observation. Notes carry no label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

/// The observations made by one lesson, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Transcript {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        debug!("lesson started: {title}");
        Self {
            title,
            entries: Vec::new(),
        }
    }

    /// Records `value` under `label` using its `Debug` form.
    pub fn record(&mut self, label: impl Into<String>, value: &impl fmt::Debug) -> &mut Self {
        let label = label.into();
        let value = format!("{value:?}");
        debug!("[{}] {label} = {value}", self.title);
        self.entries.push(Entry {
            label: Some(label),
            value,
        });
        self
    }

    /// Records a free-text remark.
    pub fn note(&mut self, text: impl Into<String>) -> &mut Self {
        let value = text.into();
        debug!("[{}] {value}", self.title);
        self.entries.push(Entry { label: None, value });
        self
    }

    /// Value recorded under `label`, if any. Notes are never matched.
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label.as_deref() == Some(label))
            .map(|entry| entry.value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        for entry in &self.entries {
            match &entry.label {
                Some(label) => writeln!(f, "  {label}: {}", entry.value)?,
                None => writeln!(f, "  {}", entry.value)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_and_lookup() {
        let mut transcript = Transcript::new("Reduce");
        transcript
            .record("sum", &12)
            .record("digits", &"011235")
            .note("reduce is a left fold");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.value_of("sum"), Some("12"));
        assert_eq!(transcript.value_of("digits"), Some("\"011235\""));
        assert_eq!(transcript.value_of("missing"), None);
    }

    #[test]
    fn test_notes_are_not_labelled_values() {
        let mut transcript = Transcript::new("forEach");
        transcript
            .note("first remark")
            .record("", &1)
            .note("second remark");

        // Only the entry recorded with an empty label matches "".
        assert_eq!(transcript.value_of(""), Some("1"));

        let mut notes_only = Transcript::new("Sets");
        notes_only.note("just a remark");
        assert_eq!(notes_only.value_of(""), None);
        assert_eq!(notes_only.entries[0].label, None);
    }

    #[test]
    fn test_display_rendering() {
        let mut transcript = Transcript::new("Map");
        transcript.record("squares", &vec![1, 4, 9]).note("done");

        assert_eq!(
            transcript.to_string(),
            "=== Map ===\n  squares: [1, 4, 9]\n  done\n"
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let mut transcript = Transcript::new("Sets");
        transcript.record("contains 3", &true);

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Sets",
                "entries": [{ "label": "contains 3", "value": "true" }]
            })
        );

        transcript.note("done");
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["entries"][1], serde_json::json!({ "value": "done" }));
    }
}
