use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "lamb", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: LambCommand,
}

#[derive(Debug, Subcommand)]
pub enum LambCommand {
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    Parse {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "sexpr")]
        format: ExpressionFormat,
    },
    Evaluate {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ValueFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExpressionFormat {
    Debug,
    #[value(name = "sexpr")]
    SExpr,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ValueFormat {
    Debug,
    Basic,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();
    let args = CLArgs::parse();
    let succeeded = match args.routine {
        LambCommand::Tokenize { path, format } => {
            tracing::debug!(?path, "tokenizing");
            let src = read_to_string(&path)?;
            tokenize(&src, &path.to_string_lossy(), &format)
        }
        LambCommand::Parse { path, format } => {
            tracing::debug!(?path, "parsing");
            let src = read_to_string(&path)?;
            parse(&src, &path.to_string_lossy(), &format)
        }
        LambCommand::Evaluate { path, format } => {
            tracing::debug!(?path, "evaluating");
            let src = read_to_string(&path)?;
            evaluate(&src, &path.to_string_lossy(), &format)
        }
    };
    match succeeded {
        true => Ok(ExitCode::SUCCESS),
        false => Ok(ExitCode::from(65)),
    }
}

/// Logging is opt-in through `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn tokenize(src: &str, path: &str, format: &TokenFormat) -> bool {
    use lamb::lexer::formatter::{BasicFormatter, DebugFormatter, PrettyFormatter, TokenFormatter};
    use lamb::lexer::Lexer;

    let formatter: Box<dyn TokenFormatter> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
    };
    for token in Lexer::new(src) {
        match token {
            Ok(token) => println!("{}", formatter.format(&token)),
            Err(error) => {
                eprintln!("{}", PrettyFormatter::new(src, path).format_error(&error));
                return false;
            }
        }
    }
    true
}

fn parse(src: &str, path: &str, format: &ExpressionFormat) -> bool {
    use lamb::parser::formatter::{
        DebugFormatter, ExpressionFormatter, PrettyFormatter, SExpressionFormatter,
    };
    use lamb::parser::Parser;

    let formatter: Box<dyn ExpressionFormatter> = match format {
        ExpressionFormat::Debug => Box::new(DebugFormatter),
        ExpressionFormat::SExpr => Box::new(SExpressionFormatter),
    };
    match Parser::new(src).parse_program() {
        Ok(program) => {
            println!("{}", formatter.format(&program));
            true
        }
        Err(error) => {
            eprintln!("{}", PrettyFormatter::new(src, path).format_error(&error));
            false
        }
    }
}

fn evaluate(src: &str, path: &str, format: &ValueFormat) -> bool {
    use lamb::interpreter::{InterpreterError, TreeWalkInterpreter};
    use lamb::parser::formatter::{ExpressionFormatter, PrettyFormatter as PrettyParserFormatter};
    use lamb::value::formatter::{
        BasicFormatter, DebugFormatter, PrettyFormatter as PrettyValueFormatter, ValueFormatter,
    };

    let formatter: Box<dyn ValueFormatter> = match format {
        ValueFormat::Debug => Box::new(DebugFormatter),
        ValueFormat::Basic => Box::new(BasicFormatter),
    };
    match TreeWalkInterpreter::new().run(src) {
        Ok(value) => {
            println!("{}", formatter.format(&value));
            true
        }
        Err(InterpreterError::Parser(error)) => {
            eprintln!("{}", PrettyParserFormatter::new(src, path).format_error(&error));
            false
        }
        Err(InterpreterError::Evaluation(error)) => {
            eprintln!("{}", PrettyValueFormatter::new(src, path).format_error(&error));
            false
        }
    }
}
