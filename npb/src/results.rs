use crate::implementation::Implementation;
use crate::matrix::TimeMatrix;
use crate::search::{Comparison, Search};
use crate::UNKNOWN_CLASS;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use serde::{Deserialize, Deserializer};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

// results files are named `all_implementations_<anything>.json`
const RESULTS_PREFIX: &str = "all_implementations_";
const RESULTS_SUFFIX: &str = ".json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkResult {
    pub implementation: String,
    pub benchmark: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub execution_time_seconds: f64,
}

impl BenchmarkResult {
    pub fn new(
        implementation: impl Into<String>,
        benchmark: impl Into<String>,
        class: Option<&str>,
        execution_time_seconds: f64,
    ) -> Self {
        Self {
            implementation: implementation.into(),
            benchmark: benchmark.into(),
            class: class.map(String::from),
            execution_time_seconds,
        }
    }

    /// Benchmark name, upper-cased.
    pub fn benchmark_name(&self) -> String {
        self.benchmark.to_uppercase()
    }

    /// Class label, upper-cased.
    pub fn class_name(&self) -> String {
        self.class_label().to_uppercase()
    }

    pub fn implementation(&self) -> Option<Implementation> {
        Implementation::from_label(&self.implementation)
    }

    pub fn canonical_implementation(&self) -> String {
        Implementation::canonical_name(&self.implementation)
    }

    pub fn class_label(&self) -> &str {
        self.class.as_deref().unwrap_or(UNKNOWN_CLASS)
    }
}

// Times are written either as numbers or as numeric strings; anything else
// (including non-finite values) counts as zero.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let seconds = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(seconds.filter(|s| s.is_finite()).unwrap_or(0.0))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Results {
    records: Vec<BenchmarkResult>,
}

impl Results {
    pub fn new(records: Vec<BenchmarkResult>) -> Self {
        Self { records }
    }

    /// Returns the most recently modified results file in `results_dir`, or
    /// `None` if there's none (or if the directory doesn't exist).
    pub fn latest(
        results_dir: impl AsRef<Path>,
    ) -> Result<Option<PathBuf>, Report> {
        let results_dir = results_dir.as_ref();
        let read_dir = match std::fs::read_dir(results_dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "results directory {} does not exist",
                    results_dir.display()
                );
                return Ok(None);
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("read results directory {}", results_dir.display())
                })
            }
        };

        let mut latest: Option<(SystemTime, PathBuf)> = None;
        for entry in read_dir {
            let entry = entry.wrap_err("incorrect directory entry")?;
            let path = entry.path();
            if !Self::is_results_file(&path) {
                continue;
            }
            // follow symlinks: a link is as recent as the file it points to
            let modified = std::fs::metadata(&path)
                .and_then(|metadata| metadata.modified())
                .wrap_err_with(|| {
                    format!("modification time of {}", path.display())
                })?;

            // ties are broken by the file name so that the choice doesn't
            // depend on the directory listing order
            let newer = match &latest {
                Some((time, latest_path)) => {
                    (modified, &path) > (*time, latest_path)
                }
                None => true,
            };
            if newer {
                latest = Some((modified, path));
            }
        }

        let latest = latest.map(|(_, path)| path);
        if let Some(path) = &latest {
            tracing::info!("latest results file: {}", path.display());
        }
        Ok(latest)
    }

    fn is_results_file(path: &Path) -> bool {
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => return false,
        };
        path.is_file()
            && name.starts_with(RESULTS_PREFIX)
            && name.ends_with(RESULTS_SUFFIX)
    }

    /// Loads all records in the JSON array stored in `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref();
        // open the file in read-only
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("open results file {}", path.display()))?;
        // create a buf reader
        let buf = std::io::BufReader::new(file);
        // and try to deserialize
        let results: Self = serde_json::from_reader(buf).wrap_err_with(|| {
            format!("deserialize results file {}", path.display())
        })?;
        tracing::debug!(
            "loaded {} records from {}",
            results.len(),
            path.display()
        );
        Ok(results)
    }

    pub fn records(&self) -> &[BenchmarkResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracts the times of each `Implementation` for the benchmark (and
    /// class, if set) in `search`. The first matching record wins.
    pub fn compare(&self, search: &Search) -> Comparison {
        let mut matched_class = None;
        let mut times = Vec::with_capacity(Implementation::ALL.len());

        for implementation in Implementation::ALL {
            let found = self
                .records
                .iter()
                .find(|record| search.matches(record, implementation));
            let time = match found {
                Some(record) => {
                    if matched_class.is_none() {
                        matched_class = Some(record.class_label().to_string());
                    }
                    record.execution_time_seconds
                }
                None => 0.0,
            };
            times.push((implementation, time));
        }

        // the class shown is the one requested, or else the one of the first
        // matched record
        let class = search
            .class_filter()
            .map(String::from)
            .or(matched_class)
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string());
        Comparison::new(search.benchmark().to_string(), class, times)
    }

    /// Builds the benchmark x implementation matrix of all records.
    pub fn matrix(&self) -> TimeMatrix {
        TimeMatrix::from_records(&self.records)
    }
}
