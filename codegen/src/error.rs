//! Error types for descriptor validation and conversion.
//!
//! Synthesis itself never fails. These errors come only from the optional
//! pre-checks in [`crate::OpDescriptor::validate`], the validating
//! [`crate::Synthesizer`], and the C-ABI conversion in [`crate::ffi`].

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised before any source text is produced.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The external symbol name is empty or whitespace.
    #[snafu(display("operator symbol name is empty"))]
    EmptySymbolName,

    /// A stateful operator declared a zero-byte state block.
    #[snafu(display("stateful operator '{symbol}' has zero state size"))]
    ZeroStateSize { symbol: String },

    /// A stateful operator declared a zero alignment.
    #[snafu(display("stateful operator '{symbol}' has zero state alignment"))]
    ZeroStateAlignment { symbol: String },

    #[snafu(display("state alignment {alignment} of '{symbol}' is not a power of two"))]
    AlignmentNotPowerOfTwo { symbol: String, alignment: usize },

    /// The aligned state struct would be padded past the declared size.
    #[snafu(display("state size {size} of '{symbol}' is not a multiple of its alignment {alignment}"))]
    StateSizeNotAligned { symbol: String, size: usize, alignment: usize },

    /// Element or return type text is empty.
    #[snafu(display("empty {what} type spelling"))]
    EmptyTypeSpelling { what: &'static str },

    #[snafu(display("operator symbol name pointer is null"))]
    NullSymbolName,

    #[snafu(display("operator symbol name is not valid UTF-8: {source}"))]
    InvalidSymbolEncoding { source: std::str::Utf8Error },

    #[snafu(display("unknown operator kind: {kind}"))]
    UnknownOpKind { kind: i32 },
}
