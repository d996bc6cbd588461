use crate::geometry::face::Face;
use crate::geometry::triangle::Triangle;
use crate::geometry::triangulation::triangulate;
use crate::geometry::vertex::Vertex;

/// Per-run context: owns what was read and the triangles derived from it.
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// `faces` must already be validated against `vertices`.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        let triangles = triangulate(&faces);
        Self { vertices, faces, triangles }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
