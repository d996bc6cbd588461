use crate::geometry::alias::Point;
use crate::geometry::fundamental_constants::COMPONENTS_IN_POSITION;

/// A mesh corner; its identity is its position in the vertex sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Point,
}

impl Vertex {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vertex { position: Point::new(x, y, z) }
    }

    #[must_use]
    pub fn from_components(components: [f32; COMPONENTS_IN_POSITION]) -> Self {
        let [x, y, z] = components;
        Vertex::new(x, y, z)
    }

    #[must_use] #[cfg(test)]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn components(&self) -> [f32; COMPONENTS_IN_POSITION] {
        [self.position.x, self.position.y, self.position.z]
    }
}
