use crate::fmt::PlotFmt;
use crate::layout;
use crate::plot::figure::Figure;
use crate::plot::pyplot::PyPlot;
use crate::{pydict, pytry};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use npb::{Comparison, ImageFormat, TimeMatrix};
use pyo3::prelude::*;
use std::path::Path;

const Y_LABEL: &str = "Execution Time (s)";
const DPI: usize = 300;

// single-benchmark plot style
const COMPARISON_FIGSIZE: (f64, f64) = (6.0, 4.0);
const COMPARISON_FONT_SIZE: usize = 13;
const COMPARISON_BAR_WIDTH: f64 = 0.6;
const COMPARISON_LABEL_RATIO: f64 = 0.02;

// multi-benchmark plot style
const BENCHMARKS_FIGSIZE: (f64, f64) = (8.0, 5.0);
const BENCHMARKS_FONT_SIZE: usize = 12;
const BENCHMARKS_LABEL_RATIO: f64 = 0.01;
const BENCHMARKS_TITLE: &str =
    "NAS Parallel Benchmarks Performance Comparison";

/// Plots one bar per implementation with the times in `comparison`.
pub fn comparison_plot(
    comparison: &Comparison,
    output_file: &Path,
    format: ImageFormat,
) -> Result<(), Report> {
    let labels: Vec<_> = comparison
        .implementations()
        .map(|implementation| implementation.name())
        .collect();
    let colors: Vec<_> =
        comparison.implementations().map(PlotFmt::color).collect();
    let times: Vec<_> = comparison.times().collect();
    let x = layout::positions(times.len());
    let max = layout::max(&times);

    Python::with_gil(|py| -> Result<(), Report> {
        let plt = pytry!(py, PyPlot::new(py));
        let params =
            pytry!(py, pydict!(py, ("font.size", COMPARISON_FONT_SIZE)));
        pytry!(py, plt.rc_params_update(params));

        let kwargs = pytry!(py, pydict!(py, ("figsize", COMPARISON_FIGSIZE)));
        let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

        let kwargs = pytry!(
            py,
            pydict!(
                py,
                ("width", COMPARISON_BAR_WIDTH),
                ("color", colors),
                ("edgecolor", "black"),
            )
        );
        pytry!(py, ax.bar(x.clone(), times.clone(), Some(kwargs)));

        // write each time on top of its bar
        for (&x, &time) in x.iter().zip(times.iter()) {
            let kwargs = pytry!(
                py,
                pydict!(
                    py,
                    ("ha", "center"),
                    ("va", "bottom"),
                    ("fontsize", 12),
                    ("fontweight", "bold"),
                )
            );
            let y = layout::label_height(time, max, COMPARISON_LABEL_RATIO);
            pytry!(py, ax.text(x, y, &PlotFmt::seconds(time), Some(kwargs)));
        }

        pytry!(py, ax.set_xticks(x));
        let kwargs = pytry!(py, pydict!(py, ("fontsize", 12)));
        pytry!(py, ax.set_xticklabels(labels, Some(kwargs)));

        let kwargs = pytry!(py, pydict!(py, ("fontsize", 14)));
        pytry!(py, ax.set_ylabel(Y_LABEL, Some(kwargs)));
        pytry!(py, ax.set_xlabel("Implementation", Some(kwargs)));

        let title = PlotFmt::comparison_title(
            comparison.benchmark(),
            comparison.class(),
        );
        let kwargs =
            pytry!(py, pydict!(py, ("fontsize", 16), ("fontweight", "bold")));
        pytry!(py, ax.set_title(&title, Some(kwargs)));

        let kwargs = pytry!(
            py,
            pydict!(py, ("axis", "y"), ("linestyle", "--"), ("alpha", 0.6))
        );
        pytry!(py, ax.grid(Some(kwargs)));

        save(py, &plt, fig, output_file, format)
    })
}

/// Plots one group of bars per benchmark, with one bar per implementation.
pub fn benchmarks_plot(
    matrix: &TimeMatrix,
    output_file: &Path,
    format: ImageFormat,
) -> Result<(), Report> {
    let x = layout::positions(matrix.benchmarks().len());
    let width = layout::bar_width(matrix.implementations().len());
    let offsets = layout::bar_offsets(matrix.implementations().len());
    let max = matrix.max();

    Python::with_gil(|py| -> Result<(), Report> {
        let plt = pytry!(py, PyPlot::new(py));
        let params =
            pytry!(py, pydict!(py, ("font.size", BENCHMARKS_FONT_SIZE)));
        pytry!(py, plt.rc_params_update(params));

        let kwargs = pytry!(py, pydict!(py, ("figsize", BENCHMARKS_FIGSIZE)));
        let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

        for (col, (implementation, offset)) in
            matrix.implementations().iter().zip(offsets).enumerate()
        {
            let times = matrix.column(col);
            // compute x: shift all values by `offset`
            let bar_x: Vec<_> = x.iter().map(|x| x + offset).collect();

            let kwargs = pytry!(
                py,
                pydict!(
                    py,
                    ("label", implementation),
                    ("width", width),
                    ("color", PlotFmt::color_by_name(implementation, col)),
                )
            );
            pytry!(py, ax.bar(bar_x.clone(), times.clone(), Some(kwargs)));

            // empty cells are drawn but not labeled
            for (&x, &time) in bar_x.iter().zip(times.iter()) {
                if time <= 0.0 {
                    continue;
                }
                let kwargs = pytry!(
                    py,
                    pydict!(
                        py,
                        ("ha", "center"),
                        ("va", "bottom"),
                        ("fontsize", 10),
                    )
                );
                let y = layout::label_height(time, max, BENCHMARKS_LABEL_RATIO);
                pytry!(py, ax.text(x, y, &PlotFmt::time(time), Some(kwargs)));
            }
        }

        pytry!(py, ax.set_xticks(x));
        let kwargs = pytry!(py, pydict!(py, ("fontsize", 13)));
        let labels = matrix.benchmarks().to_vec();
        pytry!(py, ax.set_xticklabels(labels, Some(kwargs)));

        let kwargs = pytry!(py, pydict!(py, ("fontsize", 15)));
        pytry!(py, ax.set_xlabel("Benchmarks", Some(kwargs)));
        pytry!(py, ax.set_ylabel(Y_LABEL, Some(kwargs)));

        let kwargs =
            pytry!(py, pydict!(py, ("fontsize", 16), ("fontweight", "bold")));
        pytry!(py, ax.set_title(BENCHMARKS_TITLE, Some(kwargs)));

        let kwargs = pytry!(py, pydict!(py, ("fontsize", 12)));
        pytry!(py, ax.legend(Some(kwargs)));

        let kwargs = pytry!(
            py,
            pydict!(py, ("axis", "y"), ("linestyle", "--"), ("alpha", 0.5))
        );
        pytry!(py, ax.grid(Some(kwargs)));

        save(py, &plt, fig, output_file, format)
    })
}

fn save(
    py: Python<'_>,
    plt: &PyPlot<'_>,
    fig: Figure<'_>,
    output_file: &Path,
    format: ImageFormat,
) -> Result<(), Report> {
    // create the output directory, if needed
    if let Some(dir) = output_file.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).wrap_err_with(|| {
                format!("create output directory {}", dir.display())
            })?;
        }
    }

    pytry!(py, fig.tight_layout());
    let kwargs = pytry!(
        py,
        pydict!(py, ("dpi", DPI), ("format", format.extension()))
    );
    let path = output_file.display().to_string();
    pytry!(py, plt.savefig(&path, Some(kwargs)));
    pytry!(py, plt.close(fig));

    tracing::debug!("saved {} chart to {}", format, path);
    println!("chart saved to: {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use npb::{BenchmarkResult, Results, Search};
    use std::path::PathBuf;

    fn output(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("npb_plot_{}", std::process::id()))
            .join(name)
    }

    fn results() -> Results {
        Results::new(vec![
            BenchmarkResult::new("MPI", "CG", Some("C"), 12.5),
            BenchmarkResult::new("OMP", "CG", Some("C"), 9.1),
            BenchmarkResult::new("DC", "MG", Some("C"), 3.0),
        ])
    }

    #[test]
    fn save_comparison_plot() {
        let mut search = Search::new("CG");
        search.class("C");
        let comparison = results().compare(&search);

        let path = output("comparison.png");
        if let Err(e) = comparison_plot(&comparison, &path, ImageFormat::Png) {
            panic!("error while saving plot: {:?}", e);
        }
        // check that the file was indeed created
        assert!(path.is_file());
    }

    #[test]
    fn save_benchmarks_plot() {
        let matrix = results().matrix();

        let path = output("benchmarks.png");
        if let Err(e) = benchmarks_plot(&matrix, &path, ImageFormat::Png) {
            panic!("error while saving plot: {:?}", e);
        }
        assert!(path.is_file());
    }
}
