// src/suites/constant_time/tester.rs

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Results of comparing two timing populations
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

/// Harness that times a closure repeatedly and compares two populations with
/// Welch's t-test. Used to check that comparison latency does not correlate
/// with where two secrets first differ.
pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    /// Collect per-sample average latencies (nanoseconds) for `f`.
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let elapsed = start.elapsed();
            times.push(elapsed.as_nanos() / self.num_iterations as u128);
        }
        times
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Remove outliers using the IQR method; scheduler noise otherwise
    /// dominates nanosecond-scale measurements.
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort();

        let q1 = sorted[(sorted.len() as f64 * 0.25) as usize] as f64;
        let q3 = sorted[(sorted.len() as f64 * 0.75) as usize] as f64;
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Welch's t-test over two cleaned timing populations.
    pub fn analyze(times_a: &[u128], times_b: &[u128]) -> TimingAnalysis {
        let a = Self::remove_outliers(times_a);
        let b = Self::remove_outliers(times_b);

        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let var_a = Self::variance(&a, mean_a);
        let var_b = Self::variance(&b, mean_b);
        let n_a = a.len() as f64;
        let n_b = b.len() as f64;

        let se_sq = var_a / n_a + var_b / n_b;
        let t_statistic = if se_sq > 0.0 {
            (mean_a - mean_b).abs() / se_sq.sqrt()
        } else {
            0.0
        };

        // Welch-Satterthwaite degrees of freedom
        let df_num = se_sq * se_sq;
        let df_den = (var_a / n_a).powi(2) / (n_a - 1.0) + (var_b / n_b).powi(2) / (n_b - 1.0);
        let degrees_of_freedom = if df_den > 0.0 { df_num / df_den } else { 1.0 };

        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        TimingAnalysis {
            mean_a,
            mean_b,
            mean_ratio: if mean_b > 0.0 { mean_a / mean_b } else { 1.0 },
            t_statistic,
            degrees_of_freedom,
            p_value,
        }
    }

    /// Two-sided p-value from the t-distribution.
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() || !t_stat.is_finite() {
            return 1.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => 2.0 * (1.0 - dist.cdf(t_stat.abs())),
            Err(_) => 1.0,
        }
    }
}
