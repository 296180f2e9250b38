use super::{
    expression::{Expression, Lambda},
    ParserError,
};
use crate::lexer::formatter::{report_config, report_span};
use ariadne::{Color, Label, Report, ReportKind, Source};

pub trait ExpressionFormatter {
    fn format(&self, tree: &Expression) -> String;
    fn format_error(&self, error: &ParserError) -> String;
}

pub struct DebugFormatter;

impl ExpressionFormatter for DebugFormatter {
    fn format(&self, tree: &Expression) -> String {
        format!("{tree:#?}")
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error:?}")
    }
}

pub struct SExpressionFormatter;

impl SExpressionFormatter {
    pub fn format_node(node: &Expression) -> String {
        match node {
            Expression::Number(v) => format!("{v}"),
            Expression::String(v) => format!("{v:?}"),
            Expression::Boolean(v) => format!("{v}"),
            Expression::Variable(name) => format!("{name}"),
            Expression::Lambda(lambda) => Self::format_lambda(lambda),
            Expression::Call {
                function,
                arguments,
            } => {
                let mut buffer = format!("(call {}", Self::format_node(function));
                for argument in arguments.iter() {
                    buffer.push(' ');
                    buffer.push_str(&Self::format_node(argument));
                }
                buffer.push(')');
                buffer
            }
            Expression::Condition {
                condition,
                then,
                otherwise,
            } => match otherwise {
                Some(otherwise) => format!(
                    "(if {} {} {})",
                    Self::format_node(condition),
                    Self::format_node(then),
                    Self::format_node(otherwise),
                ),
                None => format!(
                    "(if {} {})",
                    Self::format_node(condition),
                    Self::format_node(then)
                ),
            },
            Expression::Assignment { lhs, rhs } => {
                format!("(= {} {})", Self::format_node(lhs), Self::format_node(rhs))
            }
            Expression::Binary { operator, lhs, rhs } => format!(
                "({operator} {} {})",
                Self::format_node(lhs),
                Self::format_node(rhs)
            ),
            Expression::Program(program) => {
                let mut buffer = String::from("(program");
                for expression in program.iter() {
                    buffer.push(' ');
                    buffer.push_str(&Self::format_node(expression));
                }
                buffer.push(')');
                buffer
            }
        }
    }

    fn format_lambda(lambda: &Lambda) -> String {
        format!(
            "(lambda ({}) {})",
            lambda.parameters.join(" "),
            Self::format_node(&lambda.body)
        )
    }
}

impl ExpressionFormatter for SExpressionFormatter {
    fn format(&self, tree: &Expression) -> String {
        Self::format_node(tree)
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error}")
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", SExpressionFormatter::format_node(self))
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

impl<'src> ExpressionFormatter for PrettyFormatter<'src> {
    fn format(&self, tree: &Expression) -> String {
        SExpressionFormatter::format_node(tree)
    }

    fn format_error(&self, error: &ParserError) -> String {
        let span = report_span(self.text, error.location.offset);
        let mut output = Vec::new();
        let written = Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_config(report_config())
            .with_code(error.code())
            .with_message("Failed to parse program")
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
