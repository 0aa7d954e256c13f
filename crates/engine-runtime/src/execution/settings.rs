/// Engine tuning that is not part of the request contract.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// How many script evaluations may run concurrently within one page.
    /// Page order is preserved regardless of this value.
    pub transform_concurrency: usize,
}

impl RunSettings {
    /// Clamps unusable values rather than failing a run over a tuning knob.
    pub fn validated(mut self) -> Self {
        if self.transform_concurrency == 0 {
            self.transform_concurrency = 1;
        }
        self
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            transform_concurrency: 8,
        }
    }
}
