pub mod header;
pub(crate) mod face_reader;
pub(crate) mod record_source;
pub(crate) mod vertex_reader;

pub use face_reader::FaceReadingSummary;
pub use header::{PlyHeader, VertexEncoding};
