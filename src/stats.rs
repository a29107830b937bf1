//! Descriptive statistics over a list of numbers.

use itertools::Itertools;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("No numeric data to compute statistics from")]
    EmptyData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// Every value occurs exactly once.
    NotApplicable,
    /// Values sharing the highest count, ascending.
    Values(Vec<f64>),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "NA"),
            Self::Values(values) => {
                write!(f, "[{}]", values.iter().map(|v| format!("{:?}", v)).join(", "))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub std_dev: f64,
    /// Population variance.
    pub variance: f64,
}

pub fn compute(data: &[f64]) -> Result<Statistics, Error> {
    if data.is_empty() {
        return Err(Error::EmptyData);
    }

    let count = data.len();
    let n = count as f64;
    let mean = data.iter().sum::<f64>() / n;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let median = if count % 2 != 0 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let mut runs: Vec<(f64, usize)> = Vec::new();
    for (value, group) in &sorted.iter().group_by(|&&v| v) {
        runs.push((value, group.count()));
    }
    let max_count = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let mode = if max_count <= 1 {
        Mode::NotApplicable
    } else {
        Mode::Values(
            runs.into_iter()
                .filter(|&(_, c)| c == max_count)
                .map(|(v, _)| v)
                .collect(),
        )
    };

    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    Ok(Statistics {
        count,
        mean,
        median,
        mode,
        std_dev,
        variance,
    })
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Mean: {:?}", self.mean)?;
        writeln!(f, "Median: {:?}", self.median)?;
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "Standard Deviation: {:?}", self.std_dev)?;
        writeln!(f, "Variance: {:?}", self.variance)
    }
}
