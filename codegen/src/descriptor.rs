//! Operator descriptors.
//!
//! An [`OpDescriptor`] is the runtime record a caller hands over to describe a
//! user-compiled device function: the symbol it exports, whether it threads an
//! opaque state block through every call, and that block's layout.

use bon::bon;
use snafu::ensure;

use crate::error::*;

/// Whether an operator carries an opaque state block between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpKind {
    /// Pure function of its operands.
    #[default]
    Stateless,
    /// Receives a pointer to its own state block as the first argument.
    Stateful,
}

impl OpKind {
    pub const fn is_stateful(&self) -> bool {
        matches!(self, Self::Stateful)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stateless => "stateless",
            Self::Stateful => "stateful",
        }
    }
}

/// Byte size and alignment of a stateful operator's state block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateLayout {
    pub size: usize,
    pub alignment: usize,
}

/// Description of a user-supplied device operator.
///
/// `state_size` and `state_alignment` only mean something for
/// [`OpKind::Stateful`]; for stateless operators they are never rendered.
/// Nothing here is checked at construction time. Call [`Self::validate`]
/// (or go through [`crate::Synthesizer`]) to reject malformed descriptors
/// before any source is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpDescriptor {
    pub kind: OpKind,
    /// Name exported by the user's compiled object, used verbatim.
    pub symbol_name: String,
    pub state_size: usize,
    pub state_alignment: usize,
}

#[bon]
impl OpDescriptor {
    /// Create a descriptor with builder pattern.
    #[builder(finish_fn = build)]
    pub fn builder(
        #[builder(into)] symbol_name: String,
        #[builder(default)] kind: OpKind,
        #[builder(default = 0)] state_size: usize,
        #[builder(default = 0)] state_alignment: usize,
    ) -> Self {
        Self { kind, symbol_name, state_size, state_alignment }
    }
}

impl OpDescriptor {
    pub fn stateless(symbol_name: impl Into<String>) -> Self {
        Self { kind: OpKind::Stateless, symbol_name: symbol_name.into(), state_size: 0, state_alignment: 0 }
    }

    pub fn stateful(symbol_name: impl Into<String>, state_size: usize, state_alignment: usize) -> Self {
        Self { kind: OpKind::Stateful, symbol_name: symbol_name.into(), state_size, state_alignment }
    }

    pub fn is_stateful(&self) -> bool {
        self.kind.is_stateful()
    }

    /// State layout, present only for stateful operators.
    pub fn state_layout(&self) -> Option<StateLayout> {
        self.kind.is_stateful().then_some(StateLayout { size: self.state_size, alignment: self.state_alignment })
    }

    /// Check the descriptor against the contract the generated source relies on.
    ///
    /// The synthesizer itself trusts its input; this is the separate pre-check
    /// that turns layout and naming mistakes into errors instead of JIT
    /// diagnostics or silent layout mismatches.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySymbolName`] for an empty or all-whitespace name.
    /// - For stateful operators: [`Error::ZeroStateSize`],
    ///   [`Error::ZeroStateAlignment`], [`Error::AlignmentNotPowerOfTwo`],
    ///   [`Error::StateSizeNotAligned`].
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.symbol_name.trim().is_empty(), EmptySymbolNameSnafu);

        let Some(layout) = self.state_layout() else {
            return Ok(());
        };
        let symbol = &self.symbol_name;

        ensure!(layout.size > 0, ZeroStateSizeSnafu { symbol });
        ensure!(layout.alignment > 0, ZeroStateAlignmentSnafu { symbol });
        ensure!(
            layout.alignment.is_power_of_two(),
            AlignmentNotPowerOfTwoSnafu { symbol, alignment: layout.alignment }
        );
        // `__align__(N)` rounds the struct size up to N, so the user's object
        // and the wrapper only agree when the size is already a multiple.
        ensure!(
            layout.size % layout.alignment == 0,
            StateSizeNotAlignedSnafu { symbol, size: layout.size, alignment: layout.alignment }
        );

        Ok(())
    }
}
