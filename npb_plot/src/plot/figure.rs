use pyo3::prelude::*;

pub struct Figure<'a> {
    fig: &'a PyAny,
}

impl<'a> Figure<'a> {
    pub fn new(fig: &'a PyAny) -> Self {
        Self { fig }
    }

    pub fn fig(&self) -> &PyAny {
        self.fig
    }

    pub fn tight_layout(&self) -> PyResult<()> {
        self.fig.call_method0("tight_layout")?;
        Ok(())
    }
}
