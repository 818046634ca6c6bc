#![deny(rust_2018_idioms)]

// Runs a python operation; on failure, prints the python traceback and
// returns the error as a `Report`.
#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(v) => v,
            Err(e) => {
                e.print($py);
                color_eyre::eyre::bail!("{:?}", e)
            }
        }
    }};
}

// Creates a python dictionary with the given key-value pairs.
#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pydict {
    ($py:expr, $(($key:expr, $value:expr)),* $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        let result: pyo3::PyResult<&pyo3::types::PyDict> = (|| {
            $(dict.set_item($key, $value)?;)*
            Ok(dict)
        })();
        result
    }};
}

mod fmt;
pub mod layout;
#[cfg(feature = "pyo3")]
mod plot;
#[cfg(feature = "pyo3")]
mod render;
mod task;

// Re-exports.
pub use fmt::PlotFmt;
#[cfg(feature = "pyo3")]
pub use render::{benchmarks_plot, comparison_plot};
pub use task::{
    benchmarks_task, comparison_task, output_format, BenchmarksTask,
    ComparisonTask,
};

/// Sets up logging; verbosity is controlled with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
