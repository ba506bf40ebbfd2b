use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, error::ErrorKind};
use treelox::{EX_NOINPUT, EX_SOFTWARE, EX_USAGE, Lox, RunOptions};

/// treelox runs Lox scripts, or reads them line by line from an interactive
/// prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print every scanned token before running.
    #[arg(short, long)]
    tokens: bool,

    /// Print every parsed statement as a prefix tree before running.
    #[arg(short, long)]
    ast: bool,

    /// The script to run. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::try_parse().unwrap_or_else(|e| {
                                    if matches!(e.kind(),
                                                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
                                    {
                                        e.exit();
                                    }
                                    let _ = e.print();
                                    process::exit(EX_USAGE);
                                });

    let options = RunOptions { dump_tokens: args.tokens,
                               dump_ast:    args.ast, };
    let mut lox = Lox::default().with_options(options);

    match args.script {
        Some(path) => run_file(&mut lox, &path),
        None => run_prompt(&mut lox),
    }
}

fn run_file(lox: &mut Lox, path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                     eprintln!("Failed to read the script '{}': {e}", path.display());
                     process::exit(EX_NOINPUT);
                 });

    if let Err(e) = lox.run(&source) {
        eprintln!("{e}");
        process::exit(EX_SOFTWARE);
    }

    if let Some(code) = lox.exit_code() {
        process::exit(code);
    }
}

fn run_prompt(lox: &mut Lox) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };

        if let Err(e) = lox.run(&line) {
            eprintln!("{e}");
            process::exit(EX_SOFTWARE);
        }
        lox.reset_error();
    }
}
