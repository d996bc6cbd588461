//! Converts PLY-like meshes (text header, binary records) into binary STL.

pub mod conversion;
pub mod geometry;
pub mod ply;
pub mod stl;
mod utils;

pub use conversion::{ConversionError, ConversionStatistics, Mesh, PlyStlConverter};
