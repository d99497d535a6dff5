use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

mod output;
mod repl;

use output::{answer, OutputMode};
use repl::run_repl;

const BANNER: [&str; 3] = [
    "________[ SIMPLE CALCULATOR ]________",
    "The operations are supported: +, -, *, /",
    "The numbers are supported: Arabic (1,2,3,4,5 ...) and Roman (I, II, III, IV, V ...)",
];

const PROMPT: &str = "Enter a mathematical expression (for example: 1+1): ";

#[derive(Debug, Parser)]
#[command(
    name = "numera",
    version,
    about = "Evaluate one arithmetic expression in Arabic or Roman numerals",
    long_about = "numera evaluates a single binary expression such as '1 + 2' or 'XIV * II'.\n\n\
        Both operands must use the same notation. Arabic operands must lie in\n\
        [-32768, 32767]; Roman results must lie in (0, 4000].\n\n\
        EXAMPLES:\n\
        \n  numera                      Prompt for one expression on stdin\n\
        \n  numera eval 'X + V'         Evaluate an expression given as argument\n\
        \n  numera --json eval 10/0     Print the outcome as JSON\n\
        \n  numera repl                 Evaluate one expression per line"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args, Clone)]
struct OutputArgs {
    /// Print each outcome as a JSON object instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Do not print the banner before prompting
    #[arg(long)]
    no_banner: bool,
}

impl OutputArgs {
    fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the given expression
    #[command(about = "Evaluate an expression passed as an argument")]
    Eval {
        /// Expression such as '1+1' or 'X * II'
        #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
        expression: String,
    },

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Evaluate one expression per line until end of input.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :stats  Show how many lines were evaluated\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Strips one trailing line terminator the way a line reader would.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn run_once(line: &str, mode: OutputMode) -> i32 {
    let (reply, ok) = answer(line, mode);
    reply.emit();
    if ok {
        0
    } else {
        1
    }
}

fn run_prompt(args: &OutputArgs) -> i32 {
    if !args.no_banner && !args.json {
        for line in BANNER {
            println!("{line}");
        }
        print!("{PROMPT}");
        if let Err(e) = io::stdout().flush() {
            log::warn!("failed to flush prompt: {e}");
        }
    }

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => {
            eprintln!("error: no expression given on stdin");
            2
        }
        Ok(_) => run_once(strip_line_ending(&line), args.mode()),
        Err(e) => {
            eprintln!("error: failed to read input: {e}");
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("parsed command line: {cli:?}");

    let mode = cli.output.mode();
    let rc = match cli.command {
        None => run_prompt(&cli.output),
        Some(Command::Eval { expression }) => run_once(&expression, mode),
        Some(Command::Repl) => run_repl(mode),
    };
    log::info!("finished with exit code {rc}");
    rc
}

fn main() {
    std::process::exit(run_cli());
}
