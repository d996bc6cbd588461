use crate::ply::FaceReadingSummary;
use log::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionStatistics {
    pub input_vertices: usize,
    pub input_faces: usize,
    pub output_triangles: usize,
    pub face_reading: FaceReadingSummary,
}

impl ConversionStatistics {
    pub(crate) fn report(&self) {
        info!("conversion statistics:");
        info!("  input vertices: {}", self.input_vertices);
        info!("  input faces: {}", self.input_faces);
        info!("  skipped faces: {}", self.face_reading.skipped);
        info!("  output triangles: {}", self.output_triangles);
    }
}
