use std::fmt;

use crate::error::{FootprintError, Result};

/// Scalar kind of every entry in a tensor, as described by the model format.
///
/// The discriminants are the runtime's stable raw tags, so a tag read from a
/// serialized model maps onto a variant with [`ElementType::from_raw`].
/// Not every variant has a fixed storage size: `None` and the `Tf*` kinds are
/// rejected by [`crate::get_element_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ElementType {
    /// Unset element type.
    None = 0,
    /// Boolean, stored as one byte.
    Bool = 6,
    /// 4-bit signed integer, two elements per byte.
    Int4 = 18,
    Int8 = 9,
    Int16 = 7,
    Int32 = 2,
    Int64 = 4,
    UInt8 = 3,
    UInt16 = 17,
    UInt32 = 16,
    UInt64 = 13,
    /// IEEE 754 half precision.
    Float16 = 10,
    /// 16-bit brain floating point.
    BFloat16 = 19,
    Float32 = 1,
    Float64 = 11,
    /// Complex number made of two 32-bit floats.
    Complex64 = 8,
    /// Complex number made of two 64-bit floats.
    Complex128 = 12,
    /// Opaque resource handle.
    TfResource = 20,
    /// Variable-length string.
    TfString = 5,
    /// Opaque variant value.
    TfVariant = 15,
}

impl ElementType {
    /// Every variant, in tag order.
    pub const ALL: [ElementType; 20] = [
        ElementType::None,
        ElementType::Float32,
        ElementType::Int32,
        ElementType::UInt8,
        ElementType::Int64,
        ElementType::TfString,
        ElementType::Bool,
        ElementType::Int16,
        ElementType::Complex64,
        ElementType::Int8,
        ElementType::Float16,
        ElementType::Float64,
        ElementType::Complex128,
        ElementType::UInt64,
        ElementType::TfVariant,
        ElementType::UInt32,
        ElementType::UInt16,
        ElementType::Int4,
        ElementType::BFloat16,
        ElementType::TfResource,
    ];

    /// Decodes a raw element-type tag.
    ///
    /// # Errors
    /// Returns `FootprintError::InvalidArgument` if `tag` names no known element type.
    pub fn from_raw(tag: u32) -> Result<Self> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|element_type| element_type.raw() == tag)
            .ok_or_else(|| {
                log::debug!("Rejecting unknown element type tag {}", tag);
                FootprintError::invalid_argument(format!("Unknown element type tag {}", tag))
            })
    }

    /// Returns the raw tag of this element type.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Returns a short lowercase name for this element type.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::None => "none",
            ElementType::Bool => "bool",
            ElementType::Int4 => "int4",
            ElementType::Int8 => "int8",
            ElementType::Int16 => "int16",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::UInt8 => "uint8",
            ElementType::UInt16 => "uint16",
            ElementType::UInt32 => "uint32",
            ElementType::UInt64 => "uint64",
            ElementType::Float16 => "float16",
            ElementType::BFloat16 => "bfloat16",
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Complex64 => "complex64",
            ElementType::Complex128 => "complex128",
            ElementType::TfResource => "tf_resource",
            ElementType::TfString => "tf_string",
            ElementType::TfVariant => "tf_variant",
        }
    }
}

impl TryFrom<u32> for ElementType {
    type Error = FootprintError;

    fn try_from(tag: u32) -> Result<Self> {
        ElementType::from_raw(tag)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bytes per element, as `num / denom`.
///
/// A denominator above one means several elements share a byte
/// (`1/2` for 4-bit integers). Both fields are at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub num: usize,
    pub denom: usize,
}

impl Ratio {
    pub const fn new(num: usize, denom: usize) -> Self {
        Ratio { num, denom }
    }

    /// Whole bytes needed to store `count` elements of this ratio, rounding up.
    ///
    /// Computed as `(count * num + (denom - 1)) / denom` with truncating division.
    ///
    /// # Errors
    /// Returns `FootprintError::Overflow` if an intermediate product does not fit in `usize`,
    /// and `FootprintError::InvalidArgument` for a hand-built ratio with a zero denominator.
    pub fn packed_bytes(&self, count: usize) -> Result<usize> {
        if self.denom == 0 {
            return Err(FootprintError::invalid_argument(format!(
                "Ratio {} has a zero denominator",
                self
            )));
        }
        let scaled = count
            .checked_mul(self.num)
            .ok_or_else(|| FootprintError::overflow(format!("{} elements * {} bytes", count, self.num)))?;
        let padded = scaled
            .checked_add(self.denom - 1)
            .ok_or_else(|| FootprintError::overflow(format!("rounding {} up to a multiple of {}", scaled, self.denom)))?;
        Ok(padded / self.denom)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
