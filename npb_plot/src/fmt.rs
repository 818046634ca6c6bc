use npb::Implementation;

pub struct PlotFmt;

impl PlotFmt {
    pub fn color(implementation: Implementation) -> &'static str {
        match implementation {
            Implementation::OpenMp => "#FF6B6B",
            Implementation::Mpi => "#4ECDC4",
            Implementation::DoConcurrent => "#45B7D1",
        }
    }

    /// Color of an implementation given its canonical name. Names outside the
    /// palette take the `index`-th color of matplotlib's color cycle.
    pub fn color_by_name(name: &str, index: usize) -> String {
        match Implementation::from_label(name) {
            Some(implementation) => Self::color(implementation).to_string(),
            None => format!("C{}", index),
        }
    }

    /// Label shown on top of a bar in single-benchmark plots.
    pub fn seconds(time: f64) -> String {
        format!("{:.2}s", time)
    }

    /// Label shown on top of a bar in multi-benchmark plots.
    pub fn time(time: f64) -> String {
        format!("{:.2}", time)
    }

    pub fn comparison_title(benchmark: &str, class: &str) -> String {
        format!("{} - Class {}", benchmark, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette() {
        assert_eq!(PlotFmt::color(Implementation::OpenMp), "#FF6B6B");
        assert_eq!(PlotFmt::color(Implementation::Mpi), "#4ECDC4");
        assert_eq!(PlotFmt::color(Implementation::DoConcurrent), "#45B7D1");

        // aliases share the color of their implementation
        assert_eq!(PlotFmt::color_by_name("OMP", 0), "#FF6B6B");
        assert_eq!(PlotFmt::color_by_name("DC", 1), "#45B7D1");
        assert_eq!(PlotFmt::color_by_name("Coarray", 3), "C3");
    }

    #[test]
    fn labels() {
        assert_eq!(PlotFmt::seconds(12.5), "12.50s");
        assert_eq!(PlotFmt::time(9.126), "9.13");
        assert_eq!(PlotFmt::comparison_title("CG", "C"), "CG - Class C");
    }
}
