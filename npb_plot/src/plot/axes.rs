use pyo3::prelude::*;
use pyo3::types::PyDict;

// https://matplotlib.org/stable/api/axes_api.html
pub struct Axes<'a> {
    ax: &'a PyAny,
}

impl<'a> Axes<'a> {
    pub fn new(ax: &'a PyAny) -> Self {
        Self { ax }
    }

    pub fn set_title(
        &self,
        title: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_title", (title,), kwargs)?;
        Ok(())
    }

    pub fn set_xlabel(
        &self,
        label: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_xlabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_ylabel(
        &self,
        label: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_ylabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_xticks<T>(&self, ticks: Vec<T>) -> PyResult<()>
    where
        T: IntoPy<PyObject>,
    {
        self.ax.call_method1("set_xticks", (ticks,))?;
        Ok(())
    }

    pub fn set_xticklabels<L>(
        &self,
        labels: Vec<L>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        L: IntoPy<PyObject>,
    {
        self.ax.call_method("set_xticklabels", (labels,), kwargs)?;
        Ok(())
    }

    pub fn grid(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("grid", (), kwargs)?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    pub fn bar<X, H>(
        &self,
        x: Vec<X>,
        height: Vec<H>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        X: IntoPy<PyObject>,
        H: IntoPy<PyObject>,
    {
        self.ax.call_method("bar", (x, height), kwargs)?;
        Ok(())
    }

    // Writes `text` at data coordinates (`x`, `y`).
    pub fn text(
        &self,
        x: f64,
        y: f64,
        text: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("text", (x, y, text), kwargs)?;
        Ok(())
    }
}
