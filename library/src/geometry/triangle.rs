use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;

pub enum TriangleVertex {
    A,
    B,
    C,
}

/// Three vertex indices; no face metadata survives triangulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    corners: [usize; VERTICES_IN_TRIANGLE],
}

impl Triangle {
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Triangle { corners: [a, b, c] }
    }

    #[must_use]
    pub fn corner(&self, which: TriangleVertex) -> usize {
        self.corners[which as usize]
    }

    #[must_use] #[cfg(test)]
    pub fn corners(&self) -> &[usize; VERTICES_IN_TRIANGLE] {
        &self.corners
    }
}
