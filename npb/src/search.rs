use crate::implementation::Implementation;
use crate::results::BenchmarkResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    benchmark: String,
    class: Option<String>,
}

impl Search {
    pub fn new(benchmark: impl Into<String>) -> Self {
        Self {
            benchmark: benchmark.into(),
            class: None,
        }
    }

    /// Only consider results of `class`; an empty class means no filter.
    pub fn class(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        self.class = if class.trim().is_empty() {
            None
        } else {
            Some(class)
        };
        self
    }

    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    pub fn class_filter(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Checks whether `record` is a result of this search's benchmark (and
    /// class, if set) for `implementation`.
    pub fn matches(
        &self,
        record: &BenchmarkResult,
        implementation: Implementation,
    ) -> bool {
        // filter out other benchmarks
        if record.benchmark_name() != self.benchmark.to_uppercase() {
            return false;
        }

        // filter out other implementations
        if record.implementation() != Some(implementation) {
            return false;
        }

        // filter out other classes (if set)
        if let Some(class) = &self.class {
            if record.class_name() != class.to_uppercase() {
                return false;
            }
        }

        true
    }
}

/// Times of each `Implementation` for a single benchmark, in the order of
/// `Implementation::ALL`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    benchmark: String,
    class: String,
    times: Vec<(Implementation, f64)>,
}

impl Comparison {
    pub fn new(
        benchmark: String,
        class: String,
        times: Vec<(Implementation, f64)>,
    ) -> Self {
        Self {
            benchmark,
            class,
            times,
        }
    }

    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn implementations(&self) -> impl Iterator<Item = Implementation> + '_ {
        self.times.iter().map(|(implementation, _)| *implementation)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().map(|(_, time)| *time)
    }

    /// A comparison where every time is zero has nothing to show.
    pub fn has_data(&self) -> bool {
        self.times().any(|time| time != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches() {
        let record = BenchmarkResult::new("OMP", "cg", Some("C"), 1.0);

        let search = Search::new("CG");
        assert!(search.matches(&record, Implementation::OpenMp));
        assert!(!search.matches(&record, Implementation::Mpi));
        assert!(!Search::new("MG").matches(&record, Implementation::OpenMp));

        let mut search = Search::new("CG");
        search.class("c");
        assert!(search.matches(&record, Implementation::OpenMp));
        search.class("B");
        assert!(!search.matches(&record, Implementation::OpenMp));
    }

    #[test]
    fn empty_class_is_no_filter() {
        let record = BenchmarkResult::new("MPI", "CG", Some("C"), 1.0);
        let mut search = Search::new("CG");
        search.class("");
        assert_eq!(search.class_filter(), None);
        assert!(search.matches(&record, Implementation::Mpi));

        search.class("B");
        search.class("  ");
        assert_eq!(search.class_filter(), None);
    }

    #[test]
    fn same_case_rule_as_matrix() {
        // non-ascii names are upper-cased the same way as matrix axes
        let record =
            BenchmarkResult::new("MPI", "\u{e9}p", Some("\u{e9}"), 1.0);
        let mut search = Search::new("\u{c9}P");
        search.class("\u{c9}");
        assert!(search.matches(&record, Implementation::Mpi));
        assert_eq!(record.benchmark_name(), "\u{c9}P");
    }

    #[test]
    fn missing_class_only_matches_unknown() {
        let record = BenchmarkResult::new("MPI", "FT", None, 1.0);
        let mut search = Search::new("FT");
        search.class("A");
        assert!(!search.matches(&record, Implementation::Mpi));
        search.class("n/a");
        assert!(search.matches(&record, Implementation::Mpi));
    }
}
