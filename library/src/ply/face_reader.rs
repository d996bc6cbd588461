use crate::conversion::error::ConversionError;
use crate::geometry::face::Face;
use crate::ply::record_source::RecordSource;
use crate::utils::diagnostics_sampler::DiagnosticsSampler;
use crate::utils::throttled_logger::ThrottledInfoLogger;
use derive_more::Display;
use log::{info, warn};
use std::io::BufRead;

const PROGRESS_INTERVAL: usize = 10_000;
const DIAGNOSED_HEAD_FACES: usize = 10;
const DIAGNOSED_TAIL_FACES: usize = 10;
const MAX_RESERVED_FACES: usize = 1 << 20;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceReadingSummary {
    pub attempted: usize,
    pub valid: usize,
    pub skipped: usize,
}

/// Row-level rejection: the face is dropped, the run goes on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[display("invalid index at face {face}[{slot}]: {index} (max: {highest_allowed})")]
pub(crate) struct InvalidFaceIndex {
    face: usize,
    slot: usize,
    index: i32,
    highest_allowed: i64,
}

struct FaceRecord {
    indices: Vec<i32>,
    texture_coordinates: Vec<f32>,
    texture_index: i32,
}

/// Face records are always binary, whatever encoding the header announced for vertices.
pub(crate) fn read_faces<R: BufRead>(source: &mut RecordSource<R>, count: usize, vertex_count: usize) -> Result<(Vec<Face>, FaceReadingSummary), ConversionError> {
    info!("reading faces...");

    let progress = ThrottledInfoLogger::new(PROGRESS_INTERVAL);
    let sampler = DiagnosticsSampler::new(DIAGNOSED_HEAD_FACES, DIAGNOSED_TAIL_FACES, count);

    let mut faces: Vec<Face> = Vec::with_capacity(count.min(MAX_RESERVED_FACES));
    let mut summary = FaceReadingSummary::default();

    for attempt in 0..count {
        if source.is_exhausted()? {
            info!("reached end of file at face {}", attempt);
            break;
        }
        let Some(record) = read_record(source)? else {
            info!("face record {} is cut short by end of file", attempt);
            break;
        };
        summary.attempted += 1;

        match validate(record, attempt, vertex_count) {
            Ok(face) => {
                faces.push(face);
                summary.valid += 1;
            }
            Err(invalid) => {
                if sampler.covers(attempt) {
                    warn!("{}", invalid);
                }
                summary.skipped += 1;
            }
        }

        progress.do_write(attempt, || {
            format!("processing face {} of {} (valid: {}, skipped: {})", attempt, count, summary.valid, summary.skipped)
        });
    }

    info!(
        "face reading summary: declared {}, attempted {}, valid {}, skipped {}",
        count, summary.attempted, summary.valid, summary.skipped
    );
    Ok((faces, summary))
}

fn read_record<R: BufRead>(source: &mut RecordSource<R>) -> Result<Option<FaceRecord>, ConversionError> {
    let Some(index_count) = source.read_u8()? else {
        return Ok(None);
    };
    let Some(indices) = source.read_i32_block(index_count as usize)? else {
        return Ok(None);
    };
    let Some(texture_coordinate_count) = source.read_u8()? else {
        return Ok(None);
    };
    let Some(texture_coordinates) = source.read_f32_block(texture_coordinate_count as usize)? else {
        return Ok(None);
    };
    let Some(texture_index) = source.read_i32()? else {
        return Ok(None);
    };
    Ok(Some(FaceRecord { indices, texture_coordinates, texture_index }))
}

fn validate(record: FaceRecord, face: usize, vertex_count: usize) -> Result<Face, InvalidFaceIndex> {
    let mut vertices: Vec<usize> = Vec::with_capacity(record.indices.len());
    for (slot, &index) in record.indices.iter().enumerate() {
        match usize::try_from(index) {
            Ok(vertex) if vertex < vertex_count => vertices.push(vertex),
            _ => {
                return Err(InvalidFaceIndex {
                    face,
                    slot,
                    index,
                    highest_allowed: vertex_count as i64 - 1,
                });
            }
        }
    }
    Ok(Face::new(vertices, record.texture_coordinates, record.texture_index))
}
