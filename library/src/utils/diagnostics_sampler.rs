/// Selects the head and the tail of a run of `total` attempts, so that
/// per-record diagnostics on large inputs stay bounded.
#[derive(Copy, Clone, Debug)]
pub(crate) struct DiagnosticsSampler {
    head: usize,
    tail: usize,
    total: usize,
}

impl DiagnosticsSampler {
    #[must_use]
    pub(crate) const fn new(head: usize, tail: usize, total: usize) -> Self {
        Self { head, tail, total }
    }

    #[must_use]
    pub(crate) fn covers(&self, index: usize) -> bool {
        index < self.head || index + self.tail >= self.total
    }
}
