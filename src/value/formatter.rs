use super::{error::EvaluationError, Value};
use crate::lexer::formatter::{report_config, report_span};
use ariadne::{Color, Label, Report, ReportKind, Source};

pub trait ValueFormatter {
    fn format(&self, value: &Value) -> String;
    fn format_error(&self, error: &EvaluationError) -> String;
}

pub struct DebugFormatter;

impl ValueFormatter for DebugFormatter {
    fn format(&self, value: &Value) -> String {
        format!("{value:?}")
    }

    fn format_error(&self, error: &EvaluationError) -> String {
        format!("{error:?}")
    }
}

pub struct BasicFormatter;

impl BasicFormatter {
    fn format_verbose(value: &Value) -> String {
        match value {
            Value::Number(v) => format!("Number({v})"),
            Value::String(v) => format!("String({v:?})"),
            Value::Boolean(v) => format!("Boolean({v})"),
            Value::Function(closure) => {
                format!("Function({})", closure.lambda.parameters.join(", "))
            }
            Value::Undefined => "Undefined".into(),
        }
    }
}

impl ValueFormatter for BasicFormatter {
    fn format(&self, value: &Value) -> String {
        format!("{value}")
    }

    fn format_error(&self, error: &EvaluationError) -> String {
        match error {
            EvaluationError::NonNumerics(lhs, rhs) => format!(
                "Expected two numbers but got {} and {}",
                Self::format_verbose(lhs),
                Self::format_verbose(rhs)
            ),
            EvaluationError::NonAddable(lhs, rhs) => format!(
                "Expected two numbers or two strings but got {} and {}",
                Self::format_verbose(lhs),
                Self::format_verbose(rhs)
            ),
            EvaluationError::NonComparable(lhs, rhs) => format!(
                "Can't compare {} with {}",
                Self::format_verbose(lhs),
                Self::format_verbose(rhs)
            ),
            EvaluationError::InvalidCallee(callee) => {
                format!("{} is not a function", Self::format_verbose(callee))
            }
            error => format!("{error}"),
        }
    }
}

/// Evaluation errors carry no location, so reports point at the start of the source.
pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src str,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self { text, path }
    }
}

impl<'src> ValueFormatter for PrettyFormatter<'src> {
    fn format(&self, value: &Value) -> String {
        format!("{value}")
    }

    fn format_error(&self, error: &EvaluationError) -> String {
        let span = report_span(self.text, 0);
        let mut output = Vec::new();
        let written = Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_config(report_config())
            .with_code(error.code())
            .with_message("Failed to evaluate program")
            .with_label(
                Label::new((self.path, span))
                    .with_message(BasicFormatter.format_error(error))
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
