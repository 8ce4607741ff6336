use super::{min_and_max, Series};

/// Summary of the RTT samples of a series, in ms
#[derive(Debug, Clone, PartialEq)]
pub struct RttSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// mean absolute difference between consecutive samples
    pub jitter: f64,
    pub first_time: f64,
    pub last_time: f64,
}

impl RttSummary {
    /// Summary of the samples where both time and RTT are finite,
    /// the same samples the chart draws. None when there is none.
    pub fn from_series(series: &Series) -> Option<RttSummary> {
        let (times, rtts): (Vec<f64>, Vec<f64>) = series
            .iter()
            .filter(|(t, rtt)| t.is_finite() && rtt.is_finite())
            .unzip();
        let (min, max) = min_and_max(&rtts[..])?;
        let count = rtts.len();
        let mean = rtts.iter().sum::<f64>() / count as f64;
        Some(RttSummary {
            count,
            min,
            max,
            mean,
            jitter: jitter(&rtts),
            first_time: times[0],
            last_time: times[count - 1],
        })
    }
}

impl std::fmt::Display for RttSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} samples from {} s to {} s, RTT min {:.3} ms, max {:.3} ms, avg {:.3} ms, jitter {:.3} ms",
            self.count, self.first_time, self.last_time, self.min, self.max, self.mean, self.jitter
        )
    }
}

/// 0 with fewer than two samples
pub fn jitter(v: &[f64]) -> f64 {
    if v.len() < 2 {
        return 0.;
    }
    let sum_diff: f64 = v.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    sum_diff / (v.len() - 1) as f64
}
