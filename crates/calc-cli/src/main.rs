//! `calc`: evaluate infix arithmetic expressions from the command line.
//!
//! ```text
//! $ calc "2 + 3 * 4"
//! 14
//! $ echo "(2 + 3" | calc --json
//! {"success":false,"expression":"(2 + 3","value":null,"display":null,"error":{...}}
//! ```

mod args;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use args::{parse_args, CliArgs, Command, USAGE};
use calc_eval::evaluate_to_report;
use log::{debug, log, Level};

/// Log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Failures are already printed on stderr in text mode; keep the log line
/// below the default filter so it does not repeat them.
const FAILURE_LOG_LEVEL: Level = Level::Debug;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("calc {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(cli)) => cli,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Evaluate the argv expression, or every stdin line when there is none.
/// Returns `Ok(false)` if any expression failed.
fn run(cli: &CliArgs) -> io::Result<bool> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if let Some(expression) = &cli.expression {
        return evaluate_one(expression, cli, &mut out, &mut err);
    }

    let mut all_ok = true;
    for line in io::stdin().lock().lines() {
        let line = line?;
        all_ok &= evaluate_one(&line, cli, &mut out, &mut err)?;
    }
    Ok(all_ok)
}

/// Evaluate one expression and print its outcome.
fn evaluate_one(
    expression: &str,
    cli: &CliArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    debug!("evaluating {expression:?} with {:?}", cli.options);
    let report = evaluate_to_report(expression, cli.options);

    if let Some(diag) = &report.error {
        log!(FAILURE_LOG_LEVEL, "{expression:?}: {diag}");
    }

    if cli.json {
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else if let Some(diag) = &report.error {
        writeln!(err, "error: {}", diag.message)?;
    } else if let Some(display) = &report.display {
        writeln!(out, "{display}")?;
    }

    Ok(report.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_eval::EvalOptions;

    fn capture(expression: &str, cli: &CliArgs) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = evaluate_one(expression, cli, &mut out, &mut err).unwrap();
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_text_output() {
        let (ok, out, err) = capture("2 + 3 * 4", &CliArgs::default());
        assert!(ok);
        assert_eq!(out, "14\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_error_goes_to_stderr() {
        let (ok, out, err) = capture("2 & 3", &CliArgs::default());
        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(err, "error: invalid token: &\n");
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        let (ok, out, err) = capture("   ", &CliArgs::default());
        assert!(ok);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_log_is_hidden_by_default() {
        let default: log::LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(FAILURE_LOG_LEVEL > default);
    }

    #[test]
    fn test_json_output() {
        let cli = CliArgs {
            json: true,
            ..CliArgs::default()
        };
        let (ok, out, _) = capture("(2 + 3", &cli);
        assert!(!ok);
        let json: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["message"], "mismatched parentheses");
    }

    #[test]
    fn test_strict_division_option() {
        let cli = CliArgs {
            options: EvalOptions::strict(),
            ..CliArgs::default()
        };
        let (ok, _, err) = capture("1 / 0", &cli);
        assert!(!ok);
        assert_eq!(err, "error: division by zero\n");

        let (ok, out, _) = capture("1 / 0", &CliArgs::default());
        assert!(ok);
        assert_eq!(out, "inf\n");
    }
}
