pub mod converter;
pub mod error;
pub mod mesh;
pub mod statistics;

pub use converter::{read_mesh, PlyStlConverter};
pub use error::ConversionError;
pub use mesh::Mesh;
pub use statistics::ConversionStatistics;
