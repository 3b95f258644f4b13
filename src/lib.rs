use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use anyhow::Context;

pub mod analyzer;
pub mod diagnostic;
pub mod lexer;
pub mod sink;
pub mod type_checker;

use analyzer::{Analyzer, Config};
use sink::Sink;

/// Checks every line of `input`. The returned analyzer holds the final
/// symbol table and summary.
pub fn analyze(input: &str, config: Config, sink: &mut dyn Sink) -> Analyzer {
    let mut analyzer = Analyzer::new(config);
    for (i, line) in input.lines().enumerate() {
        analyzer.analyze_line(i + 1, line, sink);
    }
    analyzer
}

pub fn analyze_file(
    path: &Path,
    config: Config,
    sink: &mut dyn Sink,
) -> anyhow::Result<Analyzer> {
    let file = File::open(path).with_context(|| format!("cannot open `{}`", path.display()))?;

    let mut analyzer = Analyzer::new(config);
    analyzer
        .analyze(BufReader::new(file), sink)
        .with_context(|| format!("error reading `{}`", path.display()))?;
    Ok(analyzer)
}

pub fn analyze_stdin(config: Config, sink: &mut dyn Sink) -> anyhow::Result<Analyzer> {
    let mut analyzer = Analyzer::new(config);
    analyzer
        .analyze(io::stdin().lock(), sink)
        .context("error reading stdin")?;
    Ok(analyzer)
}
