use crate::conversion::error::ConversionError;
use crate::ply::record_source::RecordSource;
use derive_more::Display;
use log::info;
use std::io::BufRead;

const MAGIC: &str = "ply";
const BINARY_MARKER: &str = "binary";
const VERTEX_ELEMENT: &str = "element vertex";
const FACE_ELEMENT: &str = "element face";
const END_OF_HEADER: &str = "end_header";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum VertexEncoding {
    #[display("binary")]
    Binary,
    #[display("ASCII")]
    Ascii,
}

impl VertexEncoding {
    #[must_use]
    pub fn is_binary(self) -> bool {
        self == VertexEncoding::Binary
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlyHeader {
    pub vertex_count: usize,
    pub face_count: usize,
    pub encoding: VertexEncoding,
}

/// Consumes the header up to and including the `end_header` line.
pub(crate) fn parse_header<R: BufRead>(source: &mut RecordSource<R>) -> Result<PlyHeader, ConversionError> {
    let magic_line = source.read_line()?.unwrap_or_default();
    if !magic_line.starts_with(MAGIC) {
        return Err(ConversionError::format("not a recognized mesh file"));
    }

    let format_line = source.read_line()?.unwrap_or_default();
    let encoding = if format_line.contains(BINARY_MARKER) { VertexEncoding::Binary } else { VertexEncoding::Ascii };
    info!("file format: {}", encoding);

    let mut vertex_count: Option<usize> = None;
    let mut face_count: Option<usize> = None;

    while let Some(line) = source.read_line()? {
        if line.contains(VERTEX_ELEMENT) {
            let count = trailing_count(&line);
            info!("found {} vertices", count);
            vertex_count = Some(count);
        } else if line.contains(FACE_ELEMENT) {
            let count = trailing_count(&line);
            info!("found {} faces", count);
            face_count = Some(count);
        } else if line.contains(END_OF_HEADER) {
            break;
        }
    }

    match (vertex_count, face_count) {
        (Some(vertex_count), Some(face_count)) => Ok(PlyHeader { vertex_count, face_count, encoding }),
        _ => Err(ConversionError::format("missing required element declarations")),
    }
}

/// Leading integer of the last token: `3.0` counts as 3; a negative or missing number counts as 0.
fn trailing_count(line: &str) -> usize {
    let Some(token) = line.split_whitespace().next_back() else {
        return 0;
    };
    let unsigned = token.strip_prefix('+').unwrap_or(token);
    if unsigned.starts_with('-') {
        return 0;
    }
    let digits_length = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_length == 0 {
        return 0;
    }
    unsigned[..digits_length].parse::<usize>().unwrap_or(usize::MAX)
}
