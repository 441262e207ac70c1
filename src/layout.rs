use byteorder::{ByteOrder, LittleEndian};
use serde::Deserialize;
use std::fmt;

/// Errors raised while reading or writing a field inside a binary image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("field at {offset:#x} ({size} bytes) is outside the binary ({len} bytes)")]
    OutOfBounds {
        offset: usize,
        size: usize,
        len: usize,
    },
    #[error("value {value} does not fit into {value_type}")]
    ValueOutOfRange { value: i64, value_type: ValueType },
}

/// Integer encodings used by the hardcoded tables. All little-endian (the DS is LE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::U8 => "u8",
            ValueType::I8 => "i8",
            ValueType::U16 => "u16",
            ValueType::I16 => "i16",
            ValueType::U32 => "u32",
            ValueType::I32 => "i32",
        };
        f.write_str(name)
    }
}

impl ValueType {
    pub fn size(self) -> usize {
        match self {
            ValueType::U8 | ValueType::I8 => 1,
            ValueType::U16 | ValueType::I16 => 2,
            ValueType::U32 | ValueType::I32 => 4,
        }
    }

    fn span(self, len: usize, offset: usize) -> Result<std::ops::Range<usize>, AccessError> {
        let size = self.size();
        match offset.checked_add(size) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(AccessError::OutOfBounds { offset, size, len }),
        }
    }

    /// Reads element `index` of a table of `stride`-byte entries at `base`, `field` bytes into
    /// the entry. Offsets that overflow are reported as out of bounds.
    pub fn read_element(
        self,
        data: &[u8],
        base: usize,
        index: usize,
        stride: usize,
        field: usize,
    ) -> Result<i64, AccessError> {
        let offset = index
            .checked_mul(stride)
            .and_then(|rel| rel.checked_add(base))
            .and_then(|start| start.checked_add(field))
            .ok_or(AccessError::OutOfBounds {
                offset: base,
                size: self.size(),
                len: data.len(),
            })?;
        self.read(data, offset)
    }

    pub fn read(self, data: &[u8], offset: usize) -> Result<i64, AccessError> {
        let bytes = &data[self.span(data.len(), offset)?];
        Ok(match self {
            ValueType::U8 => i64::from(bytes[0]),
            ValueType::I8 => i64::from(bytes[0] as i8),
            ValueType::U16 => i64::from(LittleEndian::read_u16(bytes)),
            ValueType::I16 => i64::from(LittleEndian::read_i16(bytes)),
            ValueType::U32 => i64::from(LittleEndian::read_u32(bytes)),
            ValueType::I32 => i64::from(LittleEndian::read_i32(bytes)),
        })
    }

    /// Writes `value` in place. Nothing is written if it does not fit the encoding.
    pub fn write(self, data: &mut [u8], offset: usize, value: i64) -> Result<(), AccessError> {
        let range = self.span(data.len(), offset)?;
        let out_of_range = || AccessError::ValueOutOfRange {
            value,
            value_type: self,
        };
        let bytes = &mut data[range];
        match self {
            ValueType::U8 => bytes[0] = u8::try_from(value).map_err(|_| out_of_range())?,
            ValueType::I8 => {
                bytes[0] = i8::try_from(value).map_err(|_| out_of_range())? as u8;
            }
            ValueType::U16 => LittleEndian::write_u16(
                bytes,
                u16::try_from(value).map_err(|_| out_of_range())?,
            ),
            ValueType::I16 => LittleEndian::write_i16(
                bytes,
                i16::try_from(value).map_err(|_| out_of_range())?,
            ),
            ValueType::U32 => LittleEndian::write_u32(
                bytes,
                u32::try_from(value).map_err(|_| out_of_range())?,
            ),
            ValueType::I32 => LittleEndian::write_i32(
                bytes,
                i32::try_from(value).map_err(|_| out_of_range())?,
            ),
        }
        Ok(())
    }
}

/// A single integer at a fixed offset in its binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FieldLayout {
    pub offset: usize,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl FieldLayout {
    pub fn read(&self, data: &[u8]) -> Result<i64, AccessError> {
        self.value_type.read(data, self.offset)
    }

    pub fn write(&self, data: &mut [u8], value: i64) -> Result<(), AccessError> {
        self.value_type.write(data, self.offset, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatrixPlacement {
    pub offset: usize,
    pub dim: usize,
}

/// A square, row-major matrix. The AddTypes patch relocates and enlarges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatrixLayout {
    pub offset: usize,
    pub dim: usize,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub add_types: Option<MatrixPlacement>,
}

impl MatrixLayout {
    pub fn placement(&self, add_types_applied: bool) -> MatrixPlacement {
        match self.add_types {
            Some(patched) if add_types_applied => patched,
            _ => MatrixPlacement {
                offset: self.offset,
                dim: self.dim,
            },
        }
    }

    pub fn read(
        &self,
        data: &[u8],
        add_types_applied: bool,
    ) -> Result<Vec<Vec<i64>>, AccessError> {
        let MatrixPlacement { offset, dim } = self.placement(add_types_applied);
        let size = self.value_type.size();
        let row_stride = dim.checked_mul(size).ok_or(AccessError::OutOfBounds {
            offset,
            size,
            len: data.len(),
        })?;
        (0..dim)
            .map(|row| {
                let row_offset = row
                    .checked_mul(row_stride)
                    .and_then(|rel| rel.checked_add(offset))
                    .ok_or(AccessError::OutOfBounds {
                        offset,
                        size,
                        len: data.len(),
                    })?;
                (0..dim)
                    .map(|col| self.value_type.read_element(data, row_offset, col, size, 0))
                    .collect()
            })
            .collect()
    }
}

/// Fixed-size records; field offsets are relative to each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SkillTableLayout {
    pub offset: usize,
    pub count: usize,
    pub entry_size: usize,
    pub iq_required: FieldLayout,
    pub unk2: FieldLayout,
}

/// Static locations of every IQ-related value, per binary.
///
/// ARM9: both minimum-IQ settings, both gummi matrices, wonder gummi and juice bar nectar gains,
/// the skill table. Overlay 10: intimidator chance. Overlay 29: nectar gain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IqLayout {
    pub min_iq_exclusive_move_user: FieldLayout,
    pub min_iq_item_master: FieldLayout,
    pub intimidator_activation_chance: FieldLayout,
    pub gummi_iq_gain: MatrixLayout,
    pub gummi_belly_heal: MatrixLayout,
    pub wonder_gummi_gain: FieldLayout,
    pub nectar_gain: FieldLayout,
    pub juice_bar_nectar_gain: FieldLayout,
    pub iq_skills: SkillTableLayout,
}

impl IqLayout {
    pub fn parse_json5(text: &str) -> anyhow::Result<IqLayout> {
        Ok(json5::from_str::<IqLayout>(text)?)
    }
}
