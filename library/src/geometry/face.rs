/// A validated polygon: every entry of `vertices` addresses an existing vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    vertices: Vec<usize>,
    texture_coordinates: Vec<f32>,
    texture_index: i32,
}

impl Face {
    #[must_use]
    pub fn new(vertices: Vec<usize>, texture_coordinates: Vec<f32>, texture_index: i32) -> Self {
        Face { vertices, texture_coordinates, texture_index }
    }

    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Flat UV list, stored as read.
    #[must_use]
    pub fn texture_coordinates(&self) -> &[f32] {
        &self.texture_coordinates
    }

    /// UV pairs; an odd trailing component is not reported.
    #[cfg(test)]
    pub fn texture_coordinate_pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.texture_coordinates
            .chunks_exact(crate::geometry::fundamental_constants::COMPONENTS_IN_TEXTURE_COORDINATE)
            .map(|pair| (pair[0], pair[1]))
    }

    #[must_use]
    pub fn texture_index(&self) -> i32 {
        self.texture_index
    }
}
