//! The [CPAL](https://docs.microsoft.com/en-us/typography/opentype/spec/cpal) table.

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

// Name identifier reserved to mean "no label".
const NO_NAME_ID: u16 = 0xFFFF;

/// A color in a palette.
///
/// Records are stored BGRA in the file; the fields here carry the
/// decoded channel values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRecord {
    /// Blue channel.
    pub blue: u8,
    /// Green channel.
    pub green: u8,
    /// Red channel.
    pub red: u8,
    /// Alpha channel.
    pub alpha: u8,
}

/// Usability flags for a palette.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteType(u32);

impl PaletteType {
    /// Flag bit: the palette is appropriate over a light background.
    pub const USABLE_WITH_LIGHT_BACKGROUND: u32 = 0x0001;

    /// Flag bit: the palette is appropriate over a dark background.
    pub const USABLE_WITH_DARK_BACKGROUND: u32 = 0x0002;

    /// Creates a palette type from its raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` if the palette is flagged for light backgrounds.
    pub const fn usable_with_light_background(self) -> bool {
        self.0 & Self::USABLE_WITH_LIGHT_BACKGROUND != 0
    }

    /// `true` if the palette is flagged for dark backgrounds.
    pub const fn usable_with_dark_background(self) -> bool {
        self.0 & Self::USABLE_WITH_DARK_BACKGROUND != 0
    }
}

/// A parsed `CPAL` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cpal {
    version: u16,
    num_palette_entries: u16,
    color_records: Vec<ColorRecord>,
    palette_starts: Vec<u16>,
    palette_types: Vec<PaletteType>,
    palette_labels: Vec<u16>,
    palette_entry_labels: Vec<u16>,
}

impl Cpal {
    /// The table version: 0 or 1.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// The number of color entries in each palette.
    pub fn num_palette_entries(&self) -> u16 {
        self.num_palette_entries
    }

    /// The number of palettes in the table.
    pub fn num_palettes(&self) -> usize {
        self.palette_starts.len()
    }

    /// The flat color record array shared by all palettes.
    pub fn color_records(&self) -> &[ColorRecord] {
        &self.color_records
    }

    /// Returns the colors of the given palette.
    pub fn palette(&self, palette: usize) -> Option<&[ColorRecord]> {
        let start = *self.palette_starts.get(palette)? as usize;
        self.color_records
            .get(start..start + self.num_palette_entries as usize)
    }

    /// Returns the color at `index` in the given palette.
    ///
    /// Out-of-range palettes and indices are "no data", not an error.
    pub fn color(&self, palette: usize, index: usize) -> Option<ColorRecord> {
        if index >= self.num_palette_entries as usize {
            return None;
        }
        self.palette(palette)?.get(index).copied()
    }

    /// Returns the usability flags of the given palette (version 1
    /// tables only).
    pub fn palette_type(&self, palette: usize) -> Option<PaletteType> {
        self.palette_types.get(palette).copied()
    }

    /// Returns the `name` identifier labelling the given palette, if
    /// any.
    pub fn palette_label(&self, palette: usize) -> Option<u16> {
        let label = *self.palette_labels.get(palette)?;
        (label != NO_NAME_ID).then_some(label)
    }

    /// Returns the `name` identifier labelling the given palette entry,
    /// if any.
    pub fn palette_entry_label(&self, entry: usize) -> Option<u16> {
        let label = *self.palette_entry_labels.get(entry)?;
        (label != NO_NAME_ID).then_some(label)
    }
}

impl FontRead for Cpal {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        if version > 1 {
            return Err(ReadError::InvalidFormat(version as i64));
        }
        let num_palette_entries: u16 = cursor.read()?;
        let num_palettes: u16 = cursor.read()?;
        let num_color_records: u16 = cursor.read()?;
        let color_records_offset: u32 = cursor.read()?;
        let mut palette_starts = Vec::with_capacity(num_palettes as usize);
        for _ in 0..num_palettes {
            let start: u16 = cursor.read()?;
            let end = start as usize + num_palette_entries as usize;
            if end > num_color_records as usize {
                return Err(ReadError::MalformedData(
                    "palette window escapes the color record array",
                ));
            }
            palette_starts.push(start);
        }
        let mut color_records = Vec::with_capacity(num_color_records as usize);
        if num_color_records > 0 {
            let mut records = data.cursor_at(color_records_offset as usize);
            for _ in 0..num_color_records {
                color_records.push(ColorRecord {
                    blue: records.read()?,
                    green: records.read()?,
                    red: records.read()?,
                    alpha: records.read()?,
                });
            }
        }
        let mut table = Cpal {
            version,
            num_palette_entries,
            color_records,
            palette_starts,
            ..Default::default()
        };
        if version == 0 {
            return Ok(table);
        }
        let palette_types_offset: u32 = cursor.read()?;
        let palette_labels_offset: u32 = cursor.read()?;
        let palette_entry_labels_offset: u32 = cursor.read()?;
        if palette_types_offset != 0 {
            let mut types = data.cursor_at(palette_types_offset as usize);
            for _ in 0..num_palettes {
                table
                    .palette_types
                    .push(PaletteType::from_bits(types.read()?));
            }
        }
        if palette_labels_offset != 0 {
            let mut labels = data.cursor_at(palette_labels_offset as usize);
            for _ in 0..num_palettes {
                table.palette_labels.push(labels.read()?);
            }
        }
        if palette_entry_labels_offset != 0 {
            let mut labels = data.cursor_at(palette_entry_labels_offset as usize);
            for _ in 0..num_palette_entries {
                table.palette_entry_labels.push(labels.read()?);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_types::test_helpers::BeBuffer;

    fn sample_v0() -> Vec<u8> {
        // two palettes of two entries over four records
        BeBuffer::new()
            .push(0u16)
            .push(2u16)
            .push(2u16)
            .push(4u16)
            .push(16u32)
            .push(0u16)
            .push(2u16)
            // records, BGRA
            .extend([64u8, 128, 255, 255])
            .extend([0u8, 255, 255, 255])
            .extend([255u8, 0, 0, 255])
            .extend([10u8, 20, 30, 40])
            .to_vec()
    }

    #[test]
    fn bgra_decoding() {
        let bytes = sample_v0();
        let cpal = Cpal::read(FontData::new(&bytes)).unwrap();
        assert_eq!(cpal.version(), 0);
        assert_eq!(cpal.num_palettes(), 2);
        let color = cpal.color(0, 0).unwrap();
        assert_eq!(
            color,
            ColorRecord {
                blue: 64,
                green: 128,
                red: 255,
                alpha: 255
            }
        );
    }

    #[test]
    fn palette_windows() {
        let bytes = sample_v0();
        let cpal = Cpal::read(FontData::new(&bytes)).unwrap();
        let first = cpal.palette(0).unwrap();
        let second = cpal.palette(1).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second[0].red, 0);
        assert_eq!(second[1].alpha, 40);
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let bytes = sample_v0();
        let cpal = Cpal::read(FontData::new(&bytes)).unwrap();
        assert_eq!(cpal.color(0, 2), None);
        assert_eq!(cpal.color(2, 0), None);
        assert_eq!(cpal.palette(5), None);
    }

    #[test]
    fn palette_window_escaping_records_fails() {
        let bytes = BeBuffer::new()
            .push(0u16)
            .push(2u16)
            .push(1u16)
            .push(2u16)
            .push(14u32)
            .push(1u16) // start 1 + 2 entries > 2 records
            .extend([0u8; 8])
            .to_vec();
        assert!(matches!(
            Cpal::read(FontData::new(&bytes)),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn v1_palette_types_and_labels() {
        // one palette, one entry, one record
        let bytes = BeBuffer::new()
            .push(1u16)
            .push(1u16)
            .push(1u16)
            .push(1u16)
            .push(26u32) // color records
            .push(0u16) // palette start
            .push(30u32) // palette types
            .push(34u32) // palette labels
            .push(36u32) // entry labels
            .extend([1u8, 2, 3, 4])
            .push(PaletteType::USABLE_WITH_DARK_BACKGROUND)
            .push(256u16)
            .push(0xFFFFu16)
            .to_vec();
        let cpal = Cpal::read(FontData::new(&bytes)).unwrap();
        assert_eq!(cpal.version(), 1);
        let flags = cpal.palette_type(0).unwrap();
        assert!(flags.usable_with_dark_background());
        assert!(!flags.usable_with_light_background());
        assert_eq!(cpal.palette_label(0), Some(256));
        assert_eq!(cpal.palette_entry_label(0), None);
    }
}
