use crate::conversion::error::ConversionError;
use crate::geometry::triangle::{Triangle, TriangleVertex};
use crate::geometry::vertex::Vertex;
use crate::stl::facet::StlFacet;
use log::info;
use std::io::Write;

pub const STL_HEADER_BYTES: usize = 80;

const HEADER_TEXT: &[u8] = b"PLY to STL conversion";

const _: () = assert!(HEADER_TEXT.len() <= STL_HEADER_BYTES);

/// Header text followed by zero padding up to 80 bytes.
#[must_use]
pub const fn stl_header() -> [u8; STL_HEADER_BYTES] {
    let mut header = [0_u8; STL_HEADER_BYTES];
    let mut i = 0;
    while i < HEADER_TEXT.len() {
        header[i] = HEADER_TEXT[i];
        i += 1;
    }
    header
}

/// Writes the whole binary STL: header, triangle count, one record per triangle in order.
pub fn write_stl<W: Write>(target: &mut W, vertices: &[Vertex], triangles: &[Triangle]) -> Result<(), ConversionError> {
    info!("writing STL file...");

    target.write_all(&stl_header()).map_err(ConversionError::io)?;

    // counts beyond u32 wrap around
    let triangle_count = triangles.len() as u32;
    target.write_all(&triangle_count.to_le_bytes()).map_err(ConversionError::io)?;

    for triangle in triangles {
        let facet = StlFacet::with_zero_normal(corner_positions(vertices, triangle)?);
        target.write_all(&facet.to_record()).map_err(ConversionError::io)?;
    }

    target.flush().map_err(ConversionError::io)?;
    info!("finished writing STL file");
    Ok(())
}

fn corner_positions(vertices: &[Vertex], triangle: &Triangle) -> Result<[[f32; 3]; 3], ConversionError> {
    let mut positions = [[0.0_f32; 3]; 3];
    let corners = [TriangleVertex::A, TriangleVertex::B, TriangleVertex::C].map(|which| triangle.corner(which));
    for (position, corner) in positions.iter_mut().zip(corners) {
        let vertex = vertices
            .get(corner)
            .ok_or_else(|| ConversionError::format(format!("triangle references missing vertex {}", corner)))?;
        *position = vertex.components();
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stl::facet::FACET_RECORD_BYTES;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
    }

    #[test]
    fn test_header_padding() {
        let header = stl_header();

        assert_eq!(&header[..HEADER_TEXT.len()], HEADER_TEXT);
        assert!(header[HEADER_TEXT.len()..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_empty_mesh() {
        let mut output: Vec<u8> = Vec::new();

        write_stl(&mut output, &[], &[]).unwrap();

        assert_eq!(output.len(), STL_HEADER_BYTES + 4);
        assert_eq!(&output[80..84], &0_u32.to_le_bytes());
    }

    #[test]
    fn test_triangles_written_in_order() {
        let vertices = [
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(1.0, 1.0, 0.0),
            Vertex::new(0.0, 1.0, 0.0),
        ];
        let triangles = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
        let mut output: Vec<u8> = Vec::new();

        write_stl(&mut output, &vertices, &triangles).unwrap();

        assert_eq!(output.len(), STL_HEADER_BYTES + 4 + 2 * FACET_RECORD_BYTES);
        assert_eq!(&output[80..84], &2_u32.to_le_bytes());

        let second = STL_HEADER_BYTES + 4 + FACET_RECORD_BYTES;
        assert_eq!(&output[second..second + 12], &[0_u8; 12]);
        assert_eq!(read_f32(&output, second + 12 + 12), 1.0);
        assert_eq!(read_f32(&output, second + 12 + 12 + 4), 1.0);
        assert_eq!(read_f32(&output, second + 12 + 24 + 4), 1.0);
        assert_eq!(&output[second + 48..second + 50], &[0_u8, 0]);
    }

    #[test]
    fn test_corners_follow_triangle_order() {
        let vertices = [
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 0.0),
            Vertex::new(3.0, 0.0, 0.0),
        ];
        let mut output: Vec<u8> = Vec::new();

        write_stl(&mut output, &vertices, &[Triangle::new(2, 0, 1)]).unwrap();

        let corners_start = STL_HEADER_BYTES + 4 + 12;
        assert_eq!(read_f32(&output, corners_start), 3.0);
        assert_eq!(read_f32(&output, corners_start + 12), 1.0);
        assert_eq!(read_f32(&output, corners_start + 24), 2.0);
    }

    #[test]
    fn test_missing_vertex_rejected() {
        let vertices = [Vertex::new(0.0, 0.0, 0.0)];
        let mut output: Vec<u8> = Vec::new();

        let error = write_stl(&mut output, &vertices, &[Triangle::new(0, 0, 1)]).unwrap_err();

        assert!(matches!(error, ConversionError::FormatError { .. }));
    }
}
