use chrono::NaiveDateTime;
use color_eyre::eyre;
use color_eyre::Report;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// where results and graphics live by default
pub const DEFAULT_BASE_DIR: &str = "/mnt/f/NAS Parallel Benchmarks";
// environment variable that overrides the default base directory
pub const BASE_DIR_ENV: &str = "NPB_BASE_DIR";

const RESULTS_DIR: &str = "Results";
const GRAPH_DIR: &str = "Graphics";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Uses `base_dir` if set, then `NPB_BASE_DIR`, then
    /// `DEFAULT_BASE_DIR`.
    pub fn resolve(base_dir: Option<&str>) -> Self {
        let base_dir = match base_dir {
            Some(base_dir) => PathBuf::from(base_dir),
            None => std::env::var_os(BASE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR)),
        };
        Self::new(base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn results_dir(&self) -> PathBuf {
        self.base_dir.join(RESULTS_DIR)
    }

    pub fn graph_dir(&self) -> PathBuf {
        self.base_dir.join(GRAPH_DIR)
    }

    /// Output path in the graphics directory named after `prefix` and the
    /// current local time.
    pub fn timestamped_output(
        &self,
        prefix: &str,
        format: ImageFormat,
    ) -> PathBuf {
        let now = chrono::Local::now().naive_local();
        self.graph_dir().join(output_file_name(prefix, &now, format))
    }
}

pub fn output_file_name(
    prefix: &str,
    timestamp: &NaiveDateTime,
    format: ImageFormat,
) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    /// Image format implied by the extension of `path`, if any.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        match extension.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ImageFormat::Png),
            "jpeg" => Ok(ImageFormat::Jpeg),
            _ => eyre::bail!("unsupported image format: {}", s),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
