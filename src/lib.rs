use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FromIterator;
use std::path::Path;
use tracing::{debug, warn};
pub mod error;
pub mod plot;
pub mod render;
pub mod stats;
mod viewer;

pub use error::{ParseReason, RenderError, RttError};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Where the ping tooling leaves its samples, relative to the working directory
pub const DEFAULT_RTT_FILE: &str = "./rtt.txt";

/// The main struct for the RTT time series:
/// time in seconds and the matching round-trip time in milliseconds.
/// The two vectors are always pushed together, so they share the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    time: Vec<f64>,
    rtt: Vec<f64>,
}

impl Series {
    pub fn new(capacity: usize) -> Series {
        Series {
            time: Vec::with_capacity(capacity),
            rtt: Vec::with_capacity(capacity),
        }
    }

    /// Init a Series from a whitespace separated `time rtt` text file.
    /// The file handle is dropped on every return path, parse errors included.
    pub fn from_txt(fin: &Path) -> Result<Series, RttError> {
        let file = File::open(fin).map_err(|source| RttError::FileAccess {
            path: fin.to_path_buf(),
            source,
        })?;
        Series::from_reader(BufReader::new(file))
    }

    /// Parse `time rtt` lines, skipping the blank ones.
    /// Stops at the first malformed line: there is no partial series.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Series, RttError> {
        let mut series = Series::new(1024);
        let mut blank = 0usize;
        let mut warned_order = false;
        for (i, l) in reader.lines().enumerate() {
            let line = i + 1;
            let l = l.map_err(|source| RttError::Read { line, source })?;
            let trimmed = l.trim();
            if trimmed.is_empty() {
                blank += 1;
                continue;
            }
            let (t, rtt) = parse_pair(trimmed).map_err(|reason| RttError::Parse {
                line,
                content: l.to_string(),
                reason,
            })?;
            match series.time.last() {
                Some(&previous) if t < previous && !warned_order => {
                    warn!("time goes back from {} to {} at line {}", previous, t, line);
                    warned_order = true;
                }
                _ => {}
            }
            series.time.push(t);
            series.rtt.push(rtt);
        }
        debug!("parsed {} samples, skipped {} blank lines", series.len(), blank);
        Ok(series)
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn rtts(&self) -> &[f64] {
        &self.rtt
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// (time, rtt) pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.rtt.iter().copied())
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut series = Series::default();
        for (t, rtt) in iter {
            series.time.push(t);
            series.rtt.push(rtt);
        }
        series
    }
}

/// Writes the series back in the input format, one `time rtt` pair per line
impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (t, rtt) in self.iter() {
            writeln!(f, "{} {}", t, rtt)?
        }
        Ok(())
    }
}

fn parse_pair(l: &str) -> Result<(f64, f64), ParseReason> {
    let tokens: Vec<&str> = l.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseReason::TokenCount(tokens.len()));
    }
    Ok((parse_token(tokens[0])?, parse_token(tokens[1])?))
}

fn parse_token(token: &str) -> Result<f64, ParseReason> {
    token.parse().map_err(|source| ParseReason::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

/// None for an empty slice, otherwise the smallest and largest element
pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}
