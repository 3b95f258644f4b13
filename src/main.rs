use clap::Parser;
use colored::Colorize;
use lexcheck::analyzer::{Analyzer, Config};
use lexcheck::sink::ConsoleSink;
use lexcheck::type_checker::RedeclarationPolicy;
use lexcheck::{analyze_file, analyze_stdin};
use std::path::Path;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to check, one statement per line (reads stdin if omitted or `-`)
    file: Option<String>,

    /// What to do when a variable is declared twice
    #[arg(long, value_enum, default_value_t = RedeclarationPolicy::Overwrite)]
    redeclare: RedeclarationPolicy,

    /// Print the symbol table after the run
    #[arg(long)]
    symbols: bool,

    /// Print the detected shape of every statement to stderr
    #[arg(long)]
    debug: bool,

    /// Disable coloured diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config {
        redeclaration: cli.redeclare,
        debug: cli.debug,
    };
    let mut sink = ConsoleSink;

    let result = match cli.file.as_deref() {
        None | Some("-") => analyze_stdin(config, &mut sink),
        Some(file) => analyze_file(Path::new(file), config, &mut sink),
    };

    let analyzer = match result {
        Ok(analyzer) => analyzer,
        Err(err) => {
            eprintln!("{}", format!("Error: {err:#}").red());
            std::process::exit(1);
        }
    };

    if cli.symbols {
        print_symbols(&analyzer);
    }
}

fn print_symbols(analyzer: &Analyzer) {
    for (name, entry) in analyzer.checker().symbols() {
        println!("{name}: {}", entry.ty);
    }
}
