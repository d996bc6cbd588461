use crate::geometry::fundamental_constants::{COMPONENTS_IN_NORMAL, COMPONENTS_IN_POSITION, VERTICES_IN_TRIANGLE};
use bytemuck::{Pod, Zeroable};

pub(crate) const ATTRIBUTE_BYTE_COUNT: u16 = 0;

pub(crate) const FACET_RECORD_BYTES: usize = size_of::<StlFacet>() + size_of::<u16>();

/// Geometry part of a binary STL triangle record; the trailing attribute count is written separately.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct StlFacet {
    normal: [f32; COMPONENTS_IN_NORMAL],
    corners: [[f32; COMPONENTS_IN_POSITION]; VERTICES_IN_TRIANGLE],
}

const _: () = assert!(size_of::<StlFacet>() == 48);

impl StlFacet {
    /// Normal stays zero; it is never computed.
    #[must_use]
    pub(crate) fn with_zero_normal(corners: [[f32; COMPONENTS_IN_POSITION]; VERTICES_IN_TRIANGLE]) -> Self {
        Self { corners, ..Self::zeroed() }
    }

    #[must_use] #[cfg(test)]
    pub(crate) fn normal(&self) -> [f32; COMPONENTS_IN_NORMAL] {
        self.normal
    }

    #[must_use] #[cfg(test)]
    pub(crate) fn corners(&self) -> &[[f32; COMPONENTS_IN_POSITION]; VERTICES_IN_TRIANGLE] {
        &self.corners
    }

    /// Full 50-byte record, little-endian regardless of host order.
    #[must_use]
    pub(crate) fn to_record(&self) -> [u8; FACET_RECORD_BYTES] {
        let mut words: [u32; 12] = bytemuck::cast(*self);
        for word in words.iter_mut() {
            *word = word.to_le();
        }

        let mut record = [0_u8; FACET_RECORD_BYTES];
        let (geometry, attribute) = record.split_at_mut(size_of::<StlFacet>());
        geometry.copy_from_slice(bytemuck::bytes_of(&words));
        attribute.copy_from_slice(&ATTRIBUTE_BYTE_COUNT.to_le_bytes());
        record
    }
}
