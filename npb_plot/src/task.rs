use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use npb::{Comparison, ImageFormat, Paths, Results, Search, TimeMatrix};
use std::path::{Path, PathBuf};

const BENCHMARKS_PREFIX: &str = "comparison";

/// Everything needed to draw a single-benchmark plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTask {
    pub comparison: Comparison,
    pub output_file: PathBuf,
    pub format: ImageFormat,
}

/// Everything needed to draw a multi-benchmark plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarksTask {
    pub matrix: TimeMatrix,
    pub output_file: PathBuf,
    pub format: ImageFormat,
}

/// Finds the latest results and extracts the times of `search`. Returns
/// `None` (after printing why) if there's nothing to plot.
pub fn comparison_task(
    search: &Search,
    format: ImageFormat,
    paths: &Paths,
) -> Result<Option<ComparisonTask>, Report> {
    let json_file = match latest(paths)? {
        Some(json_file) => json_file,
        None => return Ok(None),
    };

    let results = Results::load(&json_file).wrap_err("load results")?;
    let comparison = results.compare(search);
    if !comparison.has_data() {
        println!("no valid data found for {}", search.benchmark());
        return Ok(None);
    }

    let prefix = format!("{}_comparison", search.benchmark());
    let output_file = paths.timestamped_output(&prefix, format);
    Ok(Some(ComparisonTask {
        comparison,
        output_file,
        format,
    }))
}

/// Loads `json_file` (or the latest results) and organizes all times. Returns
/// `None` (after printing why) if there's nothing to plot.
pub fn benchmarks_task(
    json_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    format: ImageFormat,
    paths: &Paths,
) -> Result<Option<BenchmarksTask>, Report> {
    // an explicit results file takes precedence over the most recent one
    let json_file = match json_file {
        Some(json_file) => json_file,
        None => match latest(paths)? {
            Some(json_file) => json_file,
            None => return Ok(None),
        },
    };

    let results = Results::load(&json_file).wrap_err("load results")?;
    if results.is_empty() {
        println!("no results in {}", json_file.display());
        return Ok(None);
    }

    let (output_file, format) = match output_file {
        Some(output_file) => {
            let format = output_format(&output_file, format);
            (output_file, format)
        }
        None => {
            let output_file =
                paths.timestamped_output(BENCHMARKS_PREFIX, format);
            (output_file, format)
        }
    };
    Ok(Some(BenchmarksTask {
        matrix: results.matrix(),
        output_file,
        format,
    }))
}

/// The extension of an explicit output file decides its format; `format` is
/// used when the extension is not an image format.
pub fn output_format(output_file: &Path, format: ImageFormat) -> ImageFormat {
    ImageFormat::from_path(output_file).unwrap_or(format)
}

fn latest(paths: &Paths) -> Result<Option<PathBuf>, Report> {
    let results_dir = paths.results_dir();
    let latest = Results::latest(&results_dir)?;
    if latest.is_none() {
        println!("no results file found in {}", results_dir.display());
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use npb::Implementation;
    use tempfile::TempDir;

    // Creates a base directory with a single results file.
    fn base_dir(results: &str) -> TempDir {
        let dir = tempfile::tempdir().expect("test dir should be created");
        let results_dir = dir.path().join("Results");
        std::fs::create_dir(&results_dir).expect("results dir should exist");
        std::fs::write(
            results_dir.join("all_implementations_run.json"),
            results,
        )
        .expect("results should be written");
        dir
    }

    fn search(benchmark: &str, class: &str) -> Search {
        let mut search = Search::new(benchmark);
        search.class(class);
        search
    }

    const RESULTS: &str = r#"[
        {"implementation": "MPI", "benchmark": "CG", "class": "C", "execution_time_seconds": 12.5},
        {"implementation": "OMP", "benchmark": "CG", "class": "C", "execution_time_seconds": 9.1},
        {"implementation": "DC", "benchmark": "MG", "class": "C", "execution_time_seconds": 0}
    ]"#;

    #[test]
    fn comparison() {
        let dir = base_dir(RESULTS);
        let paths = Paths::new(dir.path());

        let task = comparison_task(&search("CG", "C"), ImageFormat::Png, &paths)
            .expect("task should be created")
            .expect("there's data to plot");
        let times: Vec<_> = task.comparison.times().collect();
        assert_eq!(times, vec![0.0, 12.5, 9.1]);
        assert_eq!(
            task.comparison.implementations().collect::<Vec<_>>(),
            Implementation::ALL.to_vec()
        );
        assert_eq!(task.output_file.parent(), Some(paths.graph_dir().as_path()));
        assert_eq!(task.format, ImageFormat::Png);
    }

    #[test]
    fn comparison_without_data_writes_nothing() {
        // all-zero times
        let dir = base_dir(RESULTS);
        let paths = Paths::new(dir.path());
        let task = comparison_task(&search("MG", "C"), ImageFormat::Png, &paths)
            .expect("task should be created");
        assert_eq!(task, None);
        assert!(!paths.graph_dir().exists());

        // empty results
        let dir = base_dir("[]");
        let paths = Paths::new(dir.path());
        let task = comparison_task(&search("CG", ""), ImageFormat::Png, &paths)
            .expect("task should be created");
        assert_eq!(task, None);
        assert!(!paths.graph_dir().exists());
    }

    #[test]
    fn comparison_without_results_file() {
        let dir = tempfile::tempdir().expect("test dir should be created");
        let paths = Paths::new(dir.path());
        let task = comparison_task(&search("CG", "C"), ImageFormat::Png, &paths)
            .expect("a missing results dir is not an error");
        assert_eq!(task, None);
    }

    #[test]
    fn comparison_with_invalid_results_file() {
        let dir = base_dir("not json");
        let paths = Paths::new(dir.path());
        assert!(
            comparison_task(&search("CG", "C"), ImageFormat::Png, &paths)
                .is_err()
        );
    }

    #[test]
    fn benchmarks() {
        let dir = base_dir(RESULTS);
        let paths = Paths::new(dir.path());

        let task = benchmarks_task(None, None, ImageFormat::Jpeg, &paths)
            .expect("task should be created")
            .expect("there's data to plot");
        assert_eq!(task.matrix.shape(), (2, 3));
        assert_eq!(task.format, ImageFormat::Jpeg);
        let name = task
            .output_file
            .file_name()
            .and_then(|name| name.to_str())
            .expect("file name should be utf-8");
        assert!(name.starts_with("comparison_"));
        assert!(name.ends_with(".jpeg"));
    }

    #[test]
    fn benchmarks_with_explicit_files() {
        let dir = base_dir("[]");
        let json_file = dir.path().join("other.json");
        std::fs::write(&json_file, RESULTS).expect("results should be written");
        let paths = Paths::new(dir.path());

        // the output extension decides the format
        let output_file = dir.path().join("out.jpg");
        let task = benchmarks_task(
            Some(json_file.clone()),
            Some(output_file.clone()),
            ImageFormat::Png,
            &paths,
        )
        .expect("task should be created")
        .expect("there's data to plot");
        assert_eq!(task.output_file, output_file);
        assert_eq!(task.format, ImageFormat::Jpeg);

        // unless it's not an image format
        let output_file = dir.path().join("out.pdf");
        let task = benchmarks_task(
            Some(json_file),
            Some(output_file.clone()),
            ImageFormat::Jpeg,
            &paths,
        )
        .expect("task should be created")
        .expect("there's data to plot");
        assert_eq!(task.output_file, output_file);
        assert_eq!(task.format, ImageFormat::Jpeg);
    }

    #[test]
    fn benchmarks_without_data_writes_nothing() {
        let dir = base_dir("[]");
        let paths = Paths::new(dir.path());
        let output_file = dir.path().join("out.png");
        let task = benchmarks_task(
            None,
            Some(output_file.clone()),
            ImageFormat::Png,
            &paths,
        )
        .expect("task should be created");
        assert_eq!(task, None);
        assert!(!output_file.exists());
        assert!(!paths.graph_dir().exists());
    }

    #[test]
    fn formats() {
        assert_eq!(
            output_format(Path::new("out.jpg"), ImageFormat::Png),
            ImageFormat::Jpeg
        );
        assert_eq!(
            output_format(Path::new("out.pdf"), ImageFormat::Png),
            ImageFormat::Png
        );
    }
}
