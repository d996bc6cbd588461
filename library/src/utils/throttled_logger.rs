use log::info;

/// Writes only when the attempt index lands on a multiple of the interval.
pub(crate) struct ThrottledInfoLogger {
    interval: usize,
}

impl ThrottledInfoLogger {
    #[must_use]
    pub(crate) fn new(interval: usize) -> Self {
        assert!(interval > 0, "interval must be greater than 0");
        Self { interval }
    }

    #[must_use]
    pub(crate) fn fires_at(&self, index: usize) -> bool {
        index % self.interval == 0
    }

    pub(crate) fn do_write(&self, index: usize, message: impl FnOnce() -> String) {
        if self.fires_at(index) {
            info!("{}", message());
        }
    }
}
