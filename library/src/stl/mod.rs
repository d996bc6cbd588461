pub(crate) mod facet;
pub mod writer;

pub use writer::{stl_header, write_stl, STL_HEADER_BYTES};
