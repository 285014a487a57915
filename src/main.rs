use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use reckon::{
    evaluate_expression, format_result,
    keypad::{parse_keys, Keypad},
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates calculator expressions such as `200+10%` or `4*-3`, or
/// replays key presses on a calculator keypad.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read lines from a file instead of taking an expression.
    #[arg(short, long)]
    file: bool,

    /// Keys mode treats every line as key presses on a calculator keypad
    /// (`0-9 . + - * / % =`, `~` toggles the sign, `<` erases, `C` clears)
    /// and prints the resulting display. Every line keeps editing the same
    /// keypad.
    #[arg(short, long)]
    keys: bool,

    /// In keys mode, also print the history line above the display.
    #[arg(long, requires = "keys")]
    history: bool,

    /// Log every pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// An expression, a key sequence or, with `--file`, a path. Standard input
    /// is read line by line when omitted.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Processes every input line. Returns `false` if any line failed.
fn run(args: &Args) -> anyhow::Result<bool> {
    let lines: Box<dyn Iterator<Item = io::Result<String>>> = match &args.contents {
        Some(path) if args.file => {
            let file = File::open(path).with_context(|| {
                format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
            })?;
            Box::new(BufReader::new(file).lines())
        },
        Some(contents) => Box::new(std::iter::once(Ok::<_, io::Error>(contents.clone()))),
        None if args.file => anyhow::bail!("--file needs a path"),
        None => Box::new(io::stdin().lock().lines()),
    };

    let mut keypad = Keypad::new();
    let mut all_ok = true;

    for line in lines {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let ok = if args.keys {
            replay_keys(&mut keypad, &line, args.history)
        } else {
            print_evaluation(&line)
        };
        all_ok &= ok;
    }

    Ok(all_ok)
}

fn print_evaluation(expression: &str) -> bool {
    match evaluate_expression(expression) {
        Ok(value) => {
            println!("{}", format_result(value));
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

fn replay_keys(keypad: &mut Keypad, line: &str, show_history: bool) -> bool {
    match parse_keys(line) {
        Ok(keys) => {
            keypad.press_all(keys);
            if show_history {
                println!("{}", keypad.history());
            }
            println!("{}", keypad.display());
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}
