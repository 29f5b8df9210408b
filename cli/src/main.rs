use std::io::BufRead;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tempolex::{LexError, Scanner, ScannerConfig, SourceReader, TempoError, Token};

#[derive(Parser)]
#[command(name = "tempolex", about = "Scan source text into a token stream")]
struct Cli {
    /// Path to a source file to scan
    file: Option<PathBuf>,
    /// Scan inline source text instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Print tokens as JSON lines
    #[arg(long)]
    json: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "tempolex".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let config = ScannerConfig::new().with_echo_diagnostics(false);
    let (result, origin) = if let Some(code) = cli.eval {
        let scanner = Scanner::with_config(SourceReader::new(code.as_bytes()), config);
        (dump(scanner, cli.json), "<eval>".to_owned())
    } else if let Some(path) = cli.file {
        let source = match SourceReader::open(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!(
                    "{} {} ({})",
                    "error:".red().bold(),
                    TempoError::from(e),
                    path.display().yellow()
                );
                process::exit(1);
            }
        };
        let scanner = Scanner::with_config(source, config);
        (dump(scanner, cli.json), path.display().to_string())
    } else {
        eprintln!("{} no input; pass a FILE or --eval", "error:".red().bold());
        process::exit(2);
    };

    match result {
        Ok(()) => {}
        Err(DumpError::Lex(err)) => {
            eprintln!("{}", format_lex_error(&origin, &err));
            process::exit(1);
        }
        Err(DumpError::Json(err)) => {
            eprintln!("{} could not encode token: {err}", "error:".red().bold());
            process::exit(1);
        }
    }
}

enum DumpError {
    Lex(LexError),
    Json(serde_json::Error),
}

fn dump<R: BufRead>(scanner: Scanner<SourceReader<R>>, json: bool) -> Result<(), DumpError> {
    for token in scanner {
        let token = token.map_err(DumpError::Lex)?;
        if json {
            let line = serde_json::to_string(&token).map_err(DumpError::Json)?;
            println!("{line}");
        } else {
            println!("{}", format_token(&token));
        }
    }
    Ok(())
}

fn format_token(token: &Token) -> String {
    format!(
        "{} {} {:?}",
        format!("{}:{}-{}", token.line, token.start_column, token.end_column).bright_black(),
        format!("{:<18}", format!("{:?}", token.kind())).cyan(),
        token.text()
    )
}

fn format_lex_error(origin: &str, err: &LexError) -> String {
    let caret = format!(
        "{}{}",
        " ".repeat(err.column.saturating_sub(1)),
        "^".repeat(err.span.len().max(1))
    );
    format!(
        "{} at {}:{}:{}: {}\n    {}\n    {}",
        "lex error".red().bold(),
        origin.cyan(),
        err.line,
        err.column,
        err.kind.to_string().bright_white(),
        err.line_text,
        caret.red()
    )
}

/// Install a log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
