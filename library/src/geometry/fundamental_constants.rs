pub const VERTICES_IN_TRIANGLE: usize = 3;

pub const COMPONENTS_IN_POSITION: usize = 3;
pub const COMPONENTS_IN_NORMAL: usize = 3;
pub const COMPONENTS_IN_TEXTURE_COORDINATE: usize = 2;
