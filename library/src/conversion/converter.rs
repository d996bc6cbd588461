use crate::conversion::error::ConversionError;
use crate::conversion::mesh::Mesh;
use crate::conversion::statistics::ConversionStatistics;
use crate::ply::face_reader::read_faces;
use crate::ply::header::parse_header;
use crate::ply::record_source::RecordSource;
use crate::ply::vertex_reader::read_vertices;
use crate::ply::FaceReadingSummary;
use crate::stl::write_stl;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct PlyStlConverter {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl PlyStlConverter {
    #[must_use]
    pub fn new(input_file: impl AsRef<Path>, output_file: impl AsRef<Path>) -> Self {
        Self {
            input_file: input_file.as_ref().to_path_buf(),
            output_file: output_file.as_ref().to_path_buf(),
        }
    }

    /// The output file is created only once the input has been fully read.
    pub fn convert(&self) -> Result<ConversionStatistics, ConversionError> {
        let input = File::open(&self.input_file)
            .map_err(|e| ConversionError::IoError { what: format!("could not open input file {}: {}", self.input_file.display(), e) })?;

        let (mesh, face_reading) = read_mesh(BufReader::new(input))?;

        let output = File::create(&self.output_file)
            .map_err(|e| ConversionError::IoError { what: format!("could not open output file {}: {}", self.output_file.display(), e) })?;

        write_mesh(&mesh, face_reading, &mut BufWriter::new(output))
    }

    /// Same pipeline over arbitrary streams.
    pub fn convert_stream<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<ConversionStatistics, ConversionError> {
        let (mesh, face_reading) = read_mesh(reader)?;
        write_mesh(&mesh, face_reading, writer)
    }
}

pub fn read_mesh<R: BufRead>(reader: R) -> Result<(Mesh, FaceReadingSummary), ConversionError> {
    let mut source = RecordSource::new(reader);

    let header = parse_header(&mut source)?;
    let vertices = read_vertices(&mut source, header.vertex_count, header.encoding)?;
    let (faces, face_reading) = read_faces(&mut source, header.face_count, vertices.len())?;

    Ok((Mesh::new(vertices, faces), face_reading))
}

fn write_mesh<W: Write>(mesh: &Mesh, face_reading: FaceReadingSummary, writer: &mut W) -> Result<ConversionStatistics, ConversionError> {
    write_stl(writer, mesh.vertices(), mesh.triangles())?;

    let statistics = ConversionStatistics {
        input_vertices: mesh.vertices().len(),
        input_faces: mesh.faces().len(),
        output_triangles: mesh.triangles().len(),
        face_reading,
    };
    statistics.report();
    Ok(statistics)
}
