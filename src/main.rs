mod keywords;
mod run;
mod script;

use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::stdout;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file
    file: String,
    #[arg(short('e'), long("element"))]
    /// Element present before the script starts (`_` is the absent element)
    elements: Vec<String>,
    #[arg(long)]
    /// Print `none` when `find` gets an unknown element instead of failing
    allow_find_none: bool,
    #[arg(short, long, action = ArgAction::Count)]
    /// Log more, repeat for more detail
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    let result = fs::read_to_string(&args.file)
        .map_err(run::Error::from)
        .and_then(|src| {
            log::info!("   {} {}", "Replaying".green().bold(), args.file);
            run::run(
                &src,
                run::config(&args.elements, args.allow_find_none),
                &mut stdout().lock(),
            )
        });
    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red().bold());
        exit(1);
    }
}
