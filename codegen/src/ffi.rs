//! C-ABI view of operator descriptors.
//!
//! C callers describe operators with a plain struct holding a kind tag, a
//! NUL-terminated symbol name and the state layout. [`OpDescriptor::from_raw`]
//! turns that into an owned descriptor.

use std::ffi::{CStr, c_char};

use snafu::{ResultExt, ensure};

use crate::descriptor::{OpDescriptor, OpKind};
use crate::error::*;

/// Kind tag values accepted in [`RawOpDescriptor::kind`].
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOpKind {
    Stateless = 0,
    Stateful = 1,
}

impl TryFrom<i32> for RawOpKind {
    type Error = Error;

    fn try_from(kind: i32) -> Result<Self> {
        match kind {
            0 => Ok(Self::Stateless),
            1 => Ok(Self::Stateful),
            _ => UnknownOpKindSnafu { kind }.fail(),
        }
    }
}

impl From<RawOpKind> for OpKind {
    fn from(kind: RawOpKind) -> Self {
        match kind {
            RawOpKind::Stateless => OpKind::Stateless,
            RawOpKind::Stateful => OpKind::Stateful,
        }
    }
}

/// Operator description as laid out by C callers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawOpDescriptor {
    /// One of the [`RawOpKind`] values.
    pub kind: i32,
    /// NUL-terminated external symbol name.
    pub name: *const c_char,
    /// State block size in bytes, read only for stateful operators.
    pub size: usize,
    /// State block alignment, read only for stateful operators.
    pub alignment: usize,
}

impl OpDescriptor {
    /// Copy a C-side descriptor into an owned one.
    ///
    /// Layout is not checked here; call [`OpDescriptor::validate`] for that.
    ///
    /// # Safety
    ///
    /// `raw.name` must be null or point to a NUL-terminated string that stays
    /// valid for the duration of the call.
    pub unsafe fn from_raw(raw: &RawOpDescriptor) -> Result<Self> {
        let kind = OpKind::from(RawOpKind::try_from(raw.kind)?);
        ensure!(!raw.name.is_null(), NullSymbolNameSnafu);

        // SAFETY: non-null and NUL-terminated per the caller contract.
        let name = unsafe { CStr::from_ptr(raw.name) };
        let symbol_name = name.to_str().context(InvalidSymbolEncodingSnafu)?.to_owned();

        Ok(match kind {
            OpKind::Stateless => Self::stateless(symbol_name),
            OpKind::Stateful => Self::stateful(symbol_name, raw.size, raw.alignment),
        })
    }
}
