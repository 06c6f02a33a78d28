use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as _;
use diagnostics::Diagnostics;
use itertools::Itertools;
use scanner::Token;

/// Parses a Lox expression and prints its syntax tree.
#[derive(clap::Parser)]
struct Args {
    /// Also print every scanned token before the tree
    #[arg(long)]
    tokens: bool,

    /// Source file to parse. Without it, expressions are read line by line from stdin.
    file: Option<PathBuf>,
}

// sysexits.h EX_DATAERR
const EXIT_DATA_ERROR: u8 = 65;

fn describe(token: &Token) -> String {
    match token.literal {
        Some(literal) => format!("{} {} {}", token.kind, token.lexeme, literal),
        None => format!("{} {}", token.kind, token.lexeme),
    }
}

/// Runs the whole pipeline on `source` and prints the tree to `out`.
///
/// Fails with the collected [`Diagnostics`] if anything was reported.
fn run(source: &str, args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scanner::scan_tokens(source, &mut diagnostics);

    if args.tokens {
        writeln!(out, "{}", tokens.iter().map(describe).join("\n"))?;
    }

    let expr = parser::Parser::new(tokens, &mut diagnostics).parse();
    match diagnostics.into_result(expr)? {
        Some(expr) => writeln!(out, "{}", parser::print(&expr))?,
        None => unreachable!("A failed parse always reports a diagnostic"),
    }

    Ok(())
}

fn run_file(path: &PathBuf, args: &Args) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(path)?;
    match run(&source, args, &mut stdout()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is::<Diagnostics>() => {
            eprintln!("{e}");
            Ok(ExitCode::from(EXIT_DATA_ERROR))
        }
        Err(e) => Err(e),
    }
}

fn run_prompt(args: &Args) -> anyhow::Result<ExitCode> {
    loop {
        print!("> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            log::debug!("End of input, leaving prompt");
            return Ok(ExitCode::SUCCESS);
        }

        // Without the newline, errors at the end are reported on the line itself
        if let Err(e) = run(line.trim_end(), args, &mut stdout()) {
            eprintln!("{e}");
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match &args.file {
        Some(file) => run_file(file, &args),
        None => run_prompt(&args),
    }
}
