//! Command-line argument handling and the sort run itself

use crate::error::CliResult;
use crate::input::{resolve_patterns, LineReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::sorter::{sort_lines, LineComparator, SortOptions};
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Sort lines of text in natural order
#[derive(Debug, Parser)]
#[command(name = "natsort", version, about)]
pub struct SortArgs {
    /// Input files or patterns (supports glob); reads stdin when empty
    #[arg(value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Compare word runs by raw scalar value instead of the default
    /// case-folding collation (7-bit ASCII content only)
    #[arg(long)]
    pub ascii: bool,

    /// Ignore upper/lower case (applies to --ascii and --last-first)
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Sort person names by their trailing word (surname) first
    #[arg(short, long)]
    pub last_first: bool,

    /// Reverse the sorted order
    #[arg(short, long)]
    pub reverse: bool,

    /// Drop lines that compare equal to their predecessor
    #[arg(short, long)]
    pub unique: bool,

    /// Sort in parallel (worthwhile for large inputs)
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one line per entry
    Text,
    /// JSON document with the sorted lines and a count
    Json,
}

impl SortArgs {
    /// Execute the sort run
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting natural sort");
        log::debug!("Arguments: {:?}", self);

        let mut lines = if self.input.is_empty() {
            LineReader::read_stdin()?
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Reading {} file(s)", files.len());
            LineReader::read_all(&files)?
        };
        log::info!("Sorting {} line(s)", lines.len());

        sort_lines(&mut lines, &self.comparator(), self.options());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        for line in &lines {
            formatter.write_line(line)?;
        }
        formatter.finish()?;

        log::info!("Wrote {} line(s)", lines.len());
        Ok(())
    }

    /// Pick the comparator the flags describe
    pub fn comparator(&self) -> LineComparator {
        if self.last_first {
            LineComparator::last_first(self.ignore_case)
        } else if self.ascii {
            LineComparator::ascii(self.ignore_case)
        } else {
            LineComparator::natural()
        }
    }

    fn options(&self) -> SortOptions {
        SortOptions {
            reverse: self.reverse,
            unique: self.unique,
            parallel: self.parallel,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn parse(args: &[&str]) -> SortArgs {
        SortArgs::parse_from(std::iter::once("natsort").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_comparator_is_locale_natural() {
        let args = parse(&[]);
        let cmp = args.comparator();
        assert_eq!(cmp.compare("File2", "file10"), Ordering::Less);
    }

    #[test]
    fn test_ascii_flag_selects_scalar_order() {
        let args = parse(&["--ascii"]);
        let cmp = args.comparator();
        assert_eq!(cmp.compare("B", "a"), Ordering::Less);
    }

    #[test]
    fn test_last_first_flag() {
        let args = parse(&["--last-first"]);
        let cmp = args.comparator();
        assert_eq!(cmp.compare("Jane Smith", "Bob Adams"), Ordering::Greater);
    }

    #[test]
    fn test_option_flags_map_through() {
        let args = parse(&["-r", "-u", "-p"]);
        let options = args.options();
        assert!(options.reverse);
        assert!(options.unique);
        assert!(options.parallel);
    }
}
