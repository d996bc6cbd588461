use crate::conversion::error::ConversionError;
use crate::geometry::fundamental_constants::COMPONENTS_IN_POSITION;
use crate::geometry::vertex::Vertex;
use crate::ply::header::VertexEncoding;
use crate::ply::record_source::RecordSource;
use log::{debug, info};
use std::io::BufRead;

/// Caps the up-front allocation; a header may declare far more than the file holds.
const MAX_RESERVED_VERTICES: usize = 1 << 20;

/// Reads up to `count` vertices. A short or malformed stream ends the sequence early.
pub(crate) fn read_vertices<R: BufRead>(source: &mut RecordSource<R>, count: usize, encoding: VertexEncoding) -> Result<Vec<Vertex>, ConversionError> {
    info!("reading vertices...");

    let mut vertices: Vec<Vertex> = Vec::with_capacity(count.min(MAX_RESERVED_VERTICES));
    while vertices.len() < count {
        let components = match encoding {
            VertexEncoding::Binary => source.read_f32_triplet()?,
            VertexEncoding::Ascii => read_text_triplet(source)?,
        };
        match components {
            Some(components) => vertices.push(Vertex::from_components(components)),
            None => {
                debug!("vertex stream ended after {} of {} vertices", vertices.len(), count);
                break;
            }
        }
    }

    // binary face records start on the line after the last text vertex, not on its line feed
    if !encoding.is_binary() && !vertices.is_empty() {
        source.finish_text_line()?;
    }

    info!("finished reading {} vertices", vertices.len());
    Ok(vertices)
}

fn read_text_triplet<R: BufRead>(source: &mut RecordSource<R>) -> Result<Option<[f32; COMPONENTS_IN_POSITION]>, ConversionError> {
    let mut components = [0.0_f32; COMPONENTS_IN_POSITION];
    for component in components.iter_mut() {
        match source.read_token()?.and_then(|token| token.parse::<f32>().ok()) {
            Some(value) => *component = value,
            None => return Ok(None),
        }
    }
    Ok(Some(components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ply_fixture::PlyFixture;
    use std::io::Cursor;

    fn make_source(bytes: Vec<u8>) -> RecordSource<Cursor<Vec<u8>>> {
        RecordSource::new(Cursor::new(bytes))
    }

    #[test]
    fn test_binary_vertices() {
        let fixture = PlyFixture::binary()
            .vertex(1.0, 2.0, 3.0)
            .vertex(-0.5, 0.0, 1e6);
        let mut source = make_source(fixture.body());

        let vertices = read_vertices(&mut source, 2, VertexEncoding::Binary).unwrap();

        assert_eq!(vertices, vec![Vertex::new(1.0, 2.0, 3.0), Vertex::new(-0.5, 0.0, 1e6)]);
    }

    #[test]
    fn test_binary_vertices_bit_exact() {
        let odd_values = [f32::from_bits(0x7FC0_0001), f32::NEG_INFINITY, f32::MIN_POSITIVE / 2.0];
        let fixture = PlyFixture::binary().vertex(odd_values[0], odd_values[1], odd_values[2]);
        let mut source = make_source(fixture.body());

        let vertices = read_vertices(&mut source, 1, VertexEncoding::Binary).unwrap();

        let read_bits = vertices[0].components().map(f32::to_bits);
        assert_eq!(read_bits, odd_values.map(f32::to_bits));
    }

    #[test]
    fn test_binary_short_read() {
        let mut bytes = PlyFixture::binary().vertex(1.0, 1.0, 1.0).body();
        bytes.extend_from_slice(&[0_u8; 8]);
        let mut source = make_source(bytes);

        let vertices = read_vertices(&mut source, 5, VertexEncoding::Binary).unwrap();

        assert_eq!(vertices.len(), 1);
    }

    #[test]
    fn test_stops_at_declared_count() {
        let fixture = PlyFixture::binary()
            .vertex(1.0, 0.0, 0.0)
            .vertex(2.0, 0.0, 0.0)
            .vertex(3.0, 0.0, 0.0);
        let mut source = make_source(fixture.body());

        let vertices = read_vertices(&mut source, 2, VertexEncoding::Binary).unwrap();

        assert_eq!(vertices.len(), 2);
        assert_eq!(source.read_f32_triplet().unwrap(), Some([3.0, 0.0, 0.0]));
    }

    #[test]
    fn test_ascii_vertices() {
        let mut source = make_source(b"1 2 3\n  -4.5\t5e-1 6\n7 8 9\n".to_vec());

        let vertices = read_vertices(&mut source, 3, VertexEncoding::Ascii).unwrap();

        assert_eq!(vertices, vec![
            Vertex::new(1.0, 2.0, 3.0),
            Vertex::new(-4.5, 0.5, 6.0),
            Vertex::new(7.0, 8.0, 9.0),
        ]);
    }

    #[test]
    fn test_ascii_positions_stream_after_last_line() {
        let mut source = make_source(b"1 2 3\n4 5 6  \n\x03\x00".to_vec());

        let vertices = read_vertices(&mut source, 2, VertexEncoding::Ascii).unwrap();

        assert_eq!(vertices.len(), 2);
        assert_eq!(source.read_u8().unwrap(), Some(3));
    }

    #[test]
    fn test_ascii_malformed_ends_sequence() {
        let mut source = make_source(b"1 2 3\n4 oops 6\n7 8 9\n".to_vec());

        let vertices = read_vertices(&mut source, 3, VertexEncoding::Ascii).unwrap();

        assert_eq!(vertices, vec![Vertex::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_zero_count_reads_nothing() {
        let mut source = make_source(vec![1, 2, 3]);

        let vertices = read_vertices(&mut source, 0, VertexEncoding::Binary).unwrap();

        assert!(vertices.is_empty());
        assert_eq!(source.read_u8().unwrap(), Some(1));
    }
}
