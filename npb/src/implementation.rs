use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Implementation {
    DoConcurrent,
    Mpi,
    OpenMp,
}

impl Implementation {
    /// Order in which implementations are shown in a single-benchmark
    /// comparison.
    pub const ALL: [Implementation; 3] = [
        Implementation::DoConcurrent,
        Implementation::Mpi,
        Implementation::OpenMp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Implementation::DoConcurrent => "DO CONCURRENT",
            Implementation::Mpi => "MPI",
            Implementation::OpenMp => "OpenMP",
        }
    }

    /// Maps a label as written by the benchmark runner to an
    /// `Implementation`. Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "OPENMP" | "OMP" => Some(Implementation::OpenMp),
            "MPI" => Some(Implementation::Mpi),
            "DO CONCURRENT" | "DC" => Some(Implementation::DoConcurrent),
            _ => None,
        }
    }

    /// Returns the canonical name of `label`. Labels outside the alias table
    /// are kept as they are.
    pub fn canonical_name(label: &str) -> String {
        match Self::from_label(label) {
            Some(implementation) => implementation.name().to_string(),
            None => label.to_string(),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
