use std::io::{self, Read};

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod repl;

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "calc evaluates arithmetic expressions built from numbers, + - * / and parentheses.\n\n\
        EXAMPLES:\n\
        \n  calc                       Start the interactive loop\n\
        \n  calc eval '2 + 2 * 2'      Evaluate one expression\n\
        \n  echo '(1 + 2) / 4' | calc eval   Evaluate an expression read from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive read-eval-print loop
    #[command(long_about = "Reads one expression per line and prints '<input> = <result>'.\n\
        Type 'exit' (or press Ctrl-D) to leave.")]
    Repl,

    /// Evaluate a single expression and print the result
    Eval {
        /// Expression to evaluate (reads from stdin if not provided)
        #[arg(value_name = "EXPRESSION")]
        expression: Option<String>,
    },
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .try_init();
}

fn read_expression(expression: Option<String>) -> io::Result<String> {
    match expression {
        Some(e) => Ok(e),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run_eval(expression: &str) -> i32 {
    let expression = expression.trim();
    match calc_eval::calc(expression) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(e) => {
            log::debug!("{expression:?} failed: {e:?}");
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => match repl::run_repl() {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("error: {e}");
                2
            }
        },
        Command::Eval { expression } => match read_expression(expression) {
            Ok(source) => run_eval(&source),
            Err(e) => {
                eprintln!("error: {e}");
                2
            }
        },
    }
}

fn main() {
    std::process::exit(run_cli());
}
