use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Default results file of the conversion tool.
pub const CONVERSION_RESULTS: &str = "ConvertionResults.txt";

/// Default results file of the statistics tool.
pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";

/// Default results file of the word count tool.
pub const WORD_COUNT_RESULTS: &str = "WordCountResults.txt";

/// Wall-clock time taken by a run.
#[derive(Clone, Copy, Debug)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    pub fn since(start: Instant) -> Self {
        Self(start.elapsed())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time Elapsed: {} seconds", self.0.as_secs_f64())
    }
}

/// Write a rendered report to the file at the given path, replacing any previous contents.
pub fn write_results(path: impl AsRef<Path>, report: impl fmt::Display) -> io::Result<()> {
    let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", report)?;
    writer.flush()
}
