//! Error types for session scripts

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::form::FormError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read session: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse session TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("event #{} ({}) failed: {}", .index + 1, .name, .source)]
    Event {
        index: usize,
        name: &'static str,
        source: FormError,
    },
}

impl ScriptError {
    /// Source span the error points at, if any
    pub fn span(&self, text: &str) -> Option<Span> {
        match self {
            ScriptError::Io(_) => None,
            ScriptError::Toml(err) => err.span(),
            ScriptError::Event { index, .. } => event_span(text, *index),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, text: &str, filename: &str) -> String {
        let Some(span) = self.span(text) else {
            return self.to_string();
        };
        let message = match self {
            ScriptError::Toml(err) => err.message().to_string(),
            _ => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(text)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
    }
}

/// Span of the `index`-th `[[event]]` header in a session file
fn event_span(text: &str, index: usize) -> Option<Span> {
    const HEADER: &str = "[[event]]";
    text.match_indices(HEADER)
        .nth(index)
        .map(|(start, _)| start..start + HEADER.len())
}
