use crate::results::BenchmarkResult;
use std::collections::BTreeSet;

/// Execution times indexed by (benchmark, implementation). Both axes are
/// sorted and contain no duplicates; cells without records are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMatrix {
    benchmarks: Vec<String>,
    implementations: Vec<String>,
    // row-major: one row per benchmark
    times: Vec<f64>,
}

impl TimeMatrix {
    pub fn from_records(records: &[BenchmarkResult]) -> Self {
        let benchmarks: Vec<_> = records
            .iter()
            .map(BenchmarkResult::benchmark_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let implementations: Vec<_> = records
            .iter()
            .map(BenchmarkResult::canonical_implementation)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut matrix = Self {
            times: vec![0.0; benchmarks.len() * implementations.len()],
            benchmarks,
            implementations,
        };

        // later records overwrite earlier ones
        for record in records {
            let row = matrix.benchmark_index(&record.benchmark_name());
            let col =
                matrix.implementation_index(&record.canonical_implementation());
            if let (Some(row), Some(col)) = (row, col) {
                let index = matrix.index(row, col);
                matrix.times[index] = record.execution_time_seconds;
            }
        }

        tracing::debug!(
            "time matrix with {} benchmarks and {} implementations",
            matrix.benchmarks.len(),
            matrix.implementations.len()
        );
        matrix
    }

    pub fn benchmarks(&self) -> &[String] {
        &self.benchmarks
    }

    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }

    /// Returns (number of benchmarks, number of implementations).
    pub fn shape(&self) -> (usize, usize) {
        (self.benchmarks.len(), self.implementations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn benchmark_index(&self, benchmark: &str) -> Option<usize> {
        self.benchmarks
            .binary_search_by(|b| b.as_str().cmp(benchmark))
            .ok()
    }

    pub fn implementation_index(&self, implementation: &str) -> Option<usize> {
        self.implementations
            .binary_search_by(|i| i.as_str().cmp(implementation))
            .ok()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.benchmarks.len() && col < self.implementations.len() {
            Some(self.times[self.index(row, col)])
        } else {
            None
        }
    }

    /// Times of the implementation at `col`, one per benchmark.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.benchmarks.len())
            .filter_map(|row| self.get(row, col))
            .collect()
    }

    /// Largest time in the matrix (zero if empty).
    pub fn max(&self) -> f64 {
        self.times.iter().copied().fold(0.0, f64::max)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.implementations.len() + col
    }
}
