use super::{LexicalError, Token};
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Byte range of the character at `offset`, empty at end of input.
pub(crate) fn report_span(text: &str, offset: usize) -> Range<usize> {
    let start = offset.min(text.len());
    let width = text
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}

/// Spans are byte offsets into the source.
pub(crate) fn report_config() -> Config {
    Config::default().with_index_type(IndexType::Byte)
}

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats a lexer error into a string.
    fn format_error(&self, error: &LexicalError) -> String;
}

/// `<Kind> <value>` per token, matching the token table layout.
pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{} {token}", token.kind())
    }

    fn format_error(&self, error: &LexicalError) -> String {
        format!("{error}")
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_error(&self, error: &LexicalError) -> String {
        format!("{error:?}")
    }
}

pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src str,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self { text, path }
    }
}

impl<'src> TokenFormatter for PrettyFormatter<'src> {
    fn format(&self, token: &Token) -> String {
        BasicFormatter.format(token)
    }

    fn format_error(&self, error: &LexicalError) -> String {
        let span = report_span(self.text, error.location.offset);
        let mut output = Vec::new();
        let written = Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_config(report_config())
            .with_code(error.code())
            .with_message("Unrecognised input")
            .with_label(
                Label::new((self.path, span))
                    .with_message(error.kind.to_string())
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((self.path, Source::from(self.text)), &mut output);
        match written {
            Ok(()) => String::from_utf8_lossy(&output).into_owned(),
            Err(_) => format!("{error}"),
        }
    }
}
