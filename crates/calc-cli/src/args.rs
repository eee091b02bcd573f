//! Command-line argument parsing.

use calc_eval::{DivisionMode, EvalOptions};

pub const USAGE: &str = "calc - evaluate infix arithmetic expressions

USAGE:
    calc [OPTIONS] [EXPRESSION...]

With no EXPRESSION, every line of standard input is evaluated.

OPTIONS:
    --json               Print one JSON report per expression
    --strict-division    Fail on division by zero instead of yielding inf/NaN
    --                   Treat all following arguments as expression text
    --help, -h           Show this help
    --version, -V        Show version

ENVIRONMENT:
    RUST_LOG             Log filter (default: warn)";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Run(CliArgs),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub json: bool,
    pub options: EvalOptions,
    /// Expression assembled from the positional arguments, if any.
    pub expression: Option<String>,
}

/// Parse arguments (without the program name).
///
/// Positional words are joined with single spaces, so `calc 2 + 3` and
/// `calc "2 + 3"` are equivalent. Words such as `-3` are expression text,
/// not flags.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cli = CliArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut only_words = false;

    for arg in args {
        let arg = arg.into();
        if only_words {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--json" => cli.json = true,
            "--strict-division" => cli.options = cli.options.with_division(DivisionMode::Strict),
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--" => only_words = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ => words.push(arg),
        }
    }

    if !words.is_empty() {
        cli.expression = Some(words.join(" "));
    }
    Ok(Command::Run(cli))
}
