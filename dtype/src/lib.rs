//! Scalar value types understood by the operator synthesizer.
//!
//! User operators are described by the textual spelling of the element type
//! they operate over. This crate provides the typed vocabulary for the common
//! case, mapping each scalar to the spelling the device compiler expects and
//! to the size/alignment the host side must agree on.

use std::fmt;
use std::str::FromStr;

use snafu::Snafu;
use strum::IntoEnumIterator;


/// Error returned when parsing a scalar type name fails.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[snafu(display("unknown scalar type: {name}"))]
pub struct UnknownScalarType {
    pub name: String,
}

/// Scalar value types an operator can be instantiated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::FromRepr)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
pub enum ScalarType {
    Bool = 0,
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    UInt8 = 5,
    UInt16 = 6,
    UInt32 = 7,
    UInt64 = 8,
    Float16 = 9,
    Float32 = 10,
    Float64 = 11,
}

impl ScalarType {
    pub const fn bytes(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 | Self::Float16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// Natural alignment. Every supported scalar is aligned to its own size.
    pub const fn alignment(&self) -> usize {
        self.bytes()
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64)
    }

    pub const fn is_int(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }

    /// Spelling used in generated device source.
    ///
    /// Fixed-width integers go through `cuda::std` so the width does not
    /// depend on the platform's `long`.
    pub const fn device_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "::cuda::std::int8_t",
            Self::Int16 => "::cuda::std::int16_t",
            Self::Int32 => "::cuda::std::int32_t",
            Self::Int64 => "::cuda::std::int64_t",
            Self::UInt8 => "::cuda::std::uint8_t",
            Self::UInt16 => "::cuda::std::uint16_t",
            Self::UInt32 => "::cuda::std::uint32_t",
            Self::UInt64 => "::cuda::std::uint64_t",
            Self::Float16 => "__half",
            Self::Float32 => "float",
            Self::Float64 => "double",
        }
    }

    /// Short name accepted by [`FromStr`].
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::UInt8 => "u8",
            Self::UInt16 => "u16",
            Self::UInt32 => "u32",
            Self::UInt64 => "u64",
            Self::Float16 => "f16",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for ScalarType {
    type Err = UnknownScalarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::iter().find(|scalar| scalar.short_name() == name).ok_or_else(|| UnknownScalarType { name: s.to_string() })
    }
}

/// Size, alignment and identity of a value type, as seen by both the
/// generated wrapper and the user's separately compiled object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    pub size: usize,
    pub alignment: usize,
    pub scalar: ScalarType,
}

impl TypeInfo {
    pub const fn of(scalar: ScalarType) -> Self {
        Self { size: scalar.bytes(), alignment: scalar.alignment(), scalar }
    }

    pub const fn device_name(&self) -> &'static str {
        self.scalar.device_name()
    }
}

impl From<ScalarType> for TypeInfo {
    fn from(scalar: ScalarType) -> Self {
        Self::of(scalar)
    }
}
