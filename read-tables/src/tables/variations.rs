//! OpenType font variations common tables.
//!
//! The [`ItemVariationStore`] parameterizes numeric values by the axes of
//! a variable font; the [`DeltaSetIndexMap`] remaps a flat variation
//! index to the store's two-level (outer, inner) addressing.

use shape_types::F2Dot14;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// Outer and inner indices for reading from an [`ItemVariationStore`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeltaSetIndex {
    /// Outer delta set index.
    pub outer: u16,
    /// Inner delta set index.
    pub inner: u16,
}

impl DeltaSetIndex {
    /// The packed form of the index: `(outer << 16) | inner`.
    pub const fn packed(self) -> u32 {
        (self.outer as u32) << 16 | self.inner as u32
    }

    /// Splits a packed index into its outer and inner components.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            outer: (packed >> 16) as u16,
            inner: (packed & 0xFFFF) as u16,
        }
    }
}

/// The start, peak and end coordinates of a per-axis region of
/// variation space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionAxisCoordinates {
    /// The region start, in normalized coordinates.
    pub start: F2Dot14,
    /// The region peak, in normalized coordinates.
    pub peak: F2Dot14,
    /// The region end, in normalized coordinates.
    pub end: F2Dot14,
}

/// A region of variation space: one axis triple per axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariationRegion {
    axes: Vec<RegionAxisCoordinates>,
}

impl VariationRegion {
    /// The per-axis coordinate triples for this region.
    pub fn axes(&self) -> &[RegionAxisCoordinates] {
        &self.axes
    }

    /// Computes a scalar value for this region and the specified
    /// normalized variation coordinates.
    ///
    /// Missing coordinates are treated as zero. An axis whose triple is
    /// all zeroes does not constrain the region.
    pub fn compute_scalar(&self, coords: &[F2Dot14]) -> f64 {
        let mut scalar = 1.0;
        for (i, axis) in self.axes.iter().enumerate() {
            let start = axis.start.to_f64();
            let peak = axis.peak.to_f64();
            let end = axis.end.to_f64();
            if start == 0.0 && peak == 0.0 && end == 0.0 {
                continue;
            }
            let coord = coords.get(i).copied().unwrap_or_default().to_f64();
            if coord == peak {
                continue;
            }
            if coord < start || coord > end {
                return 0.0;
            }
            if coord < peak {
                if start != peak {
                    scalar *= (coord - start) / (peak - start);
                }
            } else if peak != end {
                scalar *= (end - coord) / (end - peak);
            }
        }
        scalar
    }
}

/// A single item variation data subtable: a matrix of per-region deltas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemVariationData {
    item_count: u16,
    region_indexes: Vec<u16>,
    // row-major: item_count rows of region_indexes.len() widened deltas
    delta_sets: Vec<i32>,
}

impl ItemVariationData {
    /// The number of delta sets (rows) in this subtable.
    pub fn item_count(&self) -> u16 {
        self.item_count
    }

    /// The indices into the store's region list for each column.
    pub fn region_indexes(&self) -> &[u16] {
        &self.region_indexes
    }

    /// The per-region deltas for the given inner index, or `None` if the
    /// index is out of range.
    pub fn deltas(&self, inner_index: u16) -> Option<&[i32]> {
        let row_len = self.region_indexes.len();
        let start = (inner_index as usize).checked_mul(row_len)?;
        self.delta_sets.get(start..start + row_len)
    }
}

/// An item variation store: a region list plus a set of delta matrices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemVariationStore {
    format: u16,
    regions: Vec<VariationRegion>,
    item_data: Vec<ItemVariationData>,
}

impl ItemVariationStore {
    /// The store format. Only format 1 is defined.
    pub fn format(&self) -> u16 {
        self.format
    }

    /// The shared region list.
    pub fn regions(&self) -> &[VariationRegion] {
        &self.regions
    }

    /// The item variation data subtables.
    pub fn item_data(&self) -> &[ItemVariationData] {
        &self.item_data
    }

    /// Returns the delta value for the specified index and set of
    /// normalized variation coordinates.
    ///
    /// The result is an unrounded floating point sum so that callers can
    /// accumulate several deltas in full precision. Out-of-range indices
    /// are a legitimate "no variation data" signal and yield zero.
    pub fn delta(&self, index: DeltaSetIndex, coords: &[F2Dot14]) -> f64 {
        let Some(data) = self.item_data.get(index.outer as usize) else {
            return 0.0;
        };
        let Some(deltas) = data.deltas(index.inner) else {
            return 0.0;
        };
        let mut sum = 0.0;
        for (region_index, delta) in data.region_indexes.iter().zip(deltas) {
            // region indices are validated at parse time
            let region = &self.regions[*region_index as usize];
            let scalar = region.compute_scalar(coords);
            if scalar != 0.0 {
                sum += scalar * *delta as f64;
            }
        }
        sum
    }
}

impl FontRead for ItemVariationStore {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        if format != 1 {
            return Err(ReadError::InvalidFormat(format as i64));
        }
        let region_list_offset: u32 = cursor.read()?;
        let data_count: u16 = cursor.read()?;
        let mut data_offsets = Vec::with_capacity(data_count as usize);
        for _ in 0..data_count {
            data_offsets.push(cursor.read::<u32>()?);
        }
        let regions = read_region_list(data, region_list_offset as usize)?;
        let mut item_data = Vec::with_capacity(data_count as usize);
        for offset in data_offsets {
            item_data.push(read_item_variation_data(
                data,
                offset as usize,
                regions.len(),
            )?);
        }
        Ok(ItemVariationStore {
            format,
            regions,
            item_data,
        })
    }
}

fn read_region_list(data: FontData, offset: usize) -> Result<Vec<VariationRegion>, ReadError> {
    let mut cursor = data.cursor_at(offset);
    let axis_count: u16 = cursor.read()?;
    let region_count: u16 = cursor.read()?;
    let mut regions = Vec::with_capacity(region_count as usize);
    for _ in 0..region_count {
        let mut axes = Vec::with_capacity(axis_count as usize);
        for _ in 0..axis_count {
            axes.push(RegionAxisCoordinates {
                start: cursor.read()?,
                peak: cursor.read()?,
                end: cursor.read()?,
            });
        }
        regions.push(VariationRegion { axes });
    }
    Ok(regions)
}

fn read_item_variation_data(
    data: FontData,
    offset: usize,
    region_count: usize,
) -> Result<ItemVariationData, ReadError> {
    let mut cursor = data.cursor_at(offset);
    let item_count: u16 = cursor.read()?;
    let word_delta_count: u16 = cursor.read()?;
    let region_index_count: u16 = cursor.read()?;
    let long_words = word_delta_count & 0x8000 != 0;
    let word_count = (word_delta_count & 0x7FFF) as usize;
    if word_count > region_index_count as usize {
        return Err(ReadError::MalformedData(
            "word delta count exceeds region count in ItemVariationData",
        ));
    }
    let mut region_indexes = Vec::with_capacity(region_index_count as usize);
    for _ in 0..region_index_count {
        let index: u16 = cursor.read()?;
        if index as usize >= region_count {
            return Err(ReadError::MalformedData(
                "region index out of range in ItemVariationData",
            ));
        }
        region_indexes.push(index);
    }
    let row_len = region_index_count as usize;
    let mut delta_sets = Vec::with_capacity(item_count as usize * row_len);
    for _ in 0..item_count {
        for column in 0..row_len {
            let delta = match (column < word_count, long_words) {
                (true, true) => cursor.read::<i32>()?,
                (true, false) | (false, true) => cursor.read::<i16>()? as i32,
                (false, false) => cursor.read::<i8>()? as i32,
            };
            delta_sets.push(delta);
        }
    }
    Ok(ItemVariationData {
        item_count,
        region_indexes,
        delta_sets,
    })
}

/// A mapping from a flat variation index to (outer, inner) delta set
/// indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeltaSetIndexMap {
    format: u8,
    inner_bit_count: u8,
    entries: Vec<u32>,
}

impl DeltaSetIndexMap {
    /// The map format: 0 (16-bit entry count) or 1 (32-bit).
    pub fn format(&self) -> u8 {
        self.format
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the delta set index for the specified value, or `None`
    /// if the value is beyond the end of the map.
    pub fn get(&self, index: u32) -> Option<DeltaSetIndex> {
        let entry = *self.entries.get(index as usize)?;
        let bit_count = self.inner_bit_count as u32;
        Some(DeltaSetIndex {
            outer: (entry >> bit_count) as u16,
            inner: (entry & ((1 << bit_count) - 1)) as u16,
        })
    }
}

impl FontRead for DeltaSetIndexMap {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u8 = cursor.read()?;
        let entry_format: u8 = cursor.read()?;
        let map_count = match format {
            0 => cursor.read::<u16>()? as u32,
            1 => cursor.read::<u32>()?,
            _ => return Err(ReadError::InvalidFormat(format as i64)),
        };
        let entry_size = ((entry_format & 0x30) >> 4) + 1;
        let inner_bit_count = (entry_format & 0x0F) + 1;
        let mut entries = Vec::with_capacity(map_count as usize);
        for _ in 0..map_count {
            entries.push(cursor.read_offset(entry_size)?);
        }
        Ok(DeltaSetIndexMap {
            format,
            inner_bit_count,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_types::test_helpers::BeBuffer;

    /// Builds a store with two axes and two regions:
    /// region 0 peaks at (1, 0), region 1 peaks at (0, 1).
    /// One data subtable holds two items with word deltas.
    fn sample_store() -> Vec<u8> {
        let peak = F2Dot14::ONE;
        let zero = F2Dot14::ZERO;
        // header: format, region list offset, data count, data offset
        let buf = BeBuffer::new()
            .push(1u16)
            .push(12u32)
            .push(1u16)
            .push(40u32);
        // region list at 12: axis count 2, region count 2
        let buf = buf
            .push(2u16)
            .push(2u16)
            // region 0: axis 0 (0, 1, 1), axis 1 (0, 0, 0)
            .push(zero)
            .push(peak)
            .push(peak)
            .push(zero)
            .push(zero)
            .push(zero)
            // region 1: axis 0 (0, 0, 0), axis 1 (0, 1, 1)
            .push(zero)
            .push(zero)
            .push(zero)
            .push(zero)
            .push(peak)
            .push(peak);
        // item variation data at 40: 2 items, 1 word delta, 2 regions
        buf.push(2u16)
            .push(1u16)
            .push(2u16)
            .push(0u16)
            .push(1u16)
            // item 0: deltas (100, -5); item 1: deltas (-200, 10)
            .push(100i16)
            .push(-5i8)
            .push(-200i16)
            .push(10i8)
            .to_vec()
    }

    #[test]
    fn parse_store() {
        let bytes = sample_store();
        let store = ItemVariationStore::read(FontData::new(&bytes)).unwrap();
        assert_eq!(store.format(), 1);
        assert_eq!(store.regions().len(), 2);
        assert_eq!(store.item_data().len(), 1);
        let data = &store.item_data()[0];
        assert_eq!(data.item_count(), 2);
        assert_eq!(data.region_indexes(), &[0, 1]);
        assert_eq!(data.deltas(0), Some(&[100, -5][..]));
        assert_eq!(data.deltas(1), Some(&[-200, 10][..]));
        assert_eq!(data.deltas(2), None);
    }

    #[test]
    fn neutral_coords_have_no_deltas() {
        let bytes = sample_store();
        let store = ItemVariationStore::read(FontData::new(&bytes)).unwrap();
        let coords = [F2Dot14::ZERO, F2Dot14::ZERO];
        for inner in 0..2 {
            let delta = store.delta(DeltaSetIndex { outer: 0, inner }, &coords);
            assert_eq!(delta, 0.0);
        }
    }

    #[test]
    fn delta_at_peak_and_midpoint() {
        let bytes = sample_store();
        let store = ItemVariationStore::read(FontData::new(&bytes)).unwrap();
        let index = DeltaSetIndex { outer: 0, inner: 0 };
        // at region 0's peak only the first delta applies in full
        let coords = [F2Dot14::ONE, F2Dot14::ZERO];
        assert_eq!(store.delta(index, &coords), 100.0);
        // halfway up the first axis the delta interpolates linearly
        let coords = [F2Dot14::from_f64(0.5), F2Dot14::ZERO];
        assert_eq!(store.delta(index, &coords), 50.0);
        // both regions active
        let coords = [F2Dot14::ONE, F2Dot14::ONE];
        assert_eq!(store.delta(index, &coords), 95.0);
    }

    #[test]
    fn out_of_range_indices_are_zero() {
        let bytes = sample_store();
        let store = ItemVariationStore::read(FontData::new(&bytes)).unwrap();
        let coords = [F2Dot14::ONE, F2Dot14::ZERO];
        assert_eq!(store.delta(DeltaSetIndex { outer: 9, inner: 0 }, &coords), 0.0);
        assert_eq!(store.delta(DeltaSetIndex { outer: 0, inner: 9 }, &coords), 0.0);
    }

    #[test]
    fn truncated_store_fails() {
        let bytes = sample_store();
        let truncated = &bytes[..bytes.len() - 1];
        assert_eq!(
            ItemVariationStore::read(FontData::new(truncated)),
            Err(ReadError::OutOfBounds)
        );
    }

    #[test]
    fn index_map_formats() {
        // format 0, entry format 0x10: 2-byte entries, 1 inner bit
        let bytes = BeBuffer::new()
            .push(0u8)
            .push(0x10u8)
            .push(3u16)
            .push(0x0000u16)
            .push(0x0003u16)
            .push(0x0004u16)
            .to_vec();
        let map = DeltaSetIndexMap::read(FontData::new(&bytes)).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(0), Some(DeltaSetIndex { outer: 0, inner: 0 }));
        assert_eq!(map.get(1), Some(DeltaSetIndex { outer: 1, inner: 1 }));
        assert_eq!(map.get(2), Some(DeltaSetIndex { outer: 2, inner: 0 }));
        assert_eq!(map.get(3), None);
        assert_eq!(map.get(1).unwrap().packed(), 0x0001_0001);
    }

    #[test]
    fn index_map_wide_entries() {
        // format 1, entry format 0x3F: 4-byte entries, 16 inner bits
        let bytes = BeBuffer::new()
            .push(1u8)
            .push(0x3Fu8)
            .push(1u32)
            .push(0x0002_0005u32)
            .to_vec();
        let map = DeltaSetIndexMap::read(FontData::new(&bytes)).unwrap();
        assert_eq!(map.get(0), Some(DeltaSetIndex { outer: 2, inner: 5 }));
    }

    #[test]
    fn region_scalar_edge_cases() {
        let region = VariationRegion {
            axes: vec![RegionAxisCoordinates {
                start: F2Dot14::from_f64(-1.0),
                peak: F2Dot14::from_f64(-1.0),
                end: F2Dot14::ZERO,
            }],
        };
        // start == peak contributes 1
        assert_eq!(region.compute_scalar(&[F2Dot14::from_f64(-1.0)]), 1.0);
        // outside [start, end] contributes 0
        assert_eq!(region.compute_scalar(&[F2Dot14::from_f64(0.5)]), 0.0);
        // all-zero triple is the identity even with a nonzero coord
        let neutral = VariationRegion {
            axes: vec![RegionAxisCoordinates::default()],
        };
        assert_eq!(neutral.compute_scalar(&[F2Dot14::ONE]), 1.0);
    }
}
