//! Validating front end over the pure synthesis functions.

use opsynth_dtype::ScalarType;
use snafu::ensure;

use crate::config::SynthConfig;
use crate::descriptor::OpDescriptor;
use crate::error::*;
use crate::fragment::SourceFragment;
use crate::operator::{BOOL_RETURN, synthesize_binary_operator_with_return, synthesize_unary_operator};
use crate::skeleton::VALUE_T;

/// Synthesizer that rejects malformed descriptors before producing text.
///
/// With validation enabled, a descriptor either passes every check and yields
/// exactly the text the free functions in [`crate::operator`] would produce,
/// or yields an error and no text at all.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(SynthConfig::from_env())
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Binary operator returning the element type.
    pub fn binary_operator(&self, element_type: &str, op: &OpDescriptor) -> Result<SourceFragment> {
        self.binary_operator_with_return(element_type, op, VALUE_T)
    }

    /// Binary operator returning `bool`.
    pub fn comparison_operator(&self, element_type: &str, op: &OpDescriptor) -> Result<SourceFragment> {
        self.binary_operator_with_return(element_type, op, BOOL_RETURN)
    }

    pub fn binary_operator_with_return(
        &self,
        element_type: &str,
        op: &OpDescriptor,
        return_type: &str,
    ) -> Result<SourceFragment> {
        self.check(element_type, op, return_type)?;
        Ok(self.log(synthesize_binary_operator_with_return(element_type, op, return_type)))
    }

    /// Unary operator returning the element type.
    pub fn unary_operator(&self, element_type: &str, op: &OpDescriptor) -> Result<SourceFragment> {
        self.check(element_type, op, VALUE_T)?;
        Ok(self.log(synthesize_unary_operator(element_type, op)))
    }

    /// Binary operator over a scalar type, returning that type.
    pub fn typed_binary_operator(&self, scalar: ScalarType, op: &OpDescriptor) -> Result<SourceFragment> {
        self.binary_operator(scalar.device_name(), op)
    }

    /// Comparison operator over a scalar type.
    pub fn typed_comparison_operator(&self, scalar: ScalarType, op: &OpDescriptor) -> Result<SourceFragment> {
        self.comparison_operator(scalar.device_name(), op)
    }

    /// Unary operator over a scalar type.
    pub fn typed_unary_operator(&self, scalar: ScalarType, op: &OpDescriptor) -> Result<SourceFragment> {
        self.unary_operator(scalar.device_name(), op)
    }

    fn check(&self, element_type: &str, op: &OpDescriptor, return_type: &str) -> Result<()> {
        if !self.config.validate {
            return Ok(());
        }

        let checked = validate_inputs(element_type, op, return_type);
        if let Err(err) = &checked {
            tracing::warn!(symbol = %op.symbol_name, error = %err, "rejected operator descriptor");
        }
        checked
    }

    fn log(&self, fragment: SourceFragment) -> SourceFragment {
        if self.config.log_source {
            tracing::trace!(shape = %fragment.shape(), source = %fragment, "operator source");
        }
        fragment
    }
}

fn validate_inputs(element_type: &str, op: &OpDescriptor, return_type: &str) -> Result<()> {
    ensure!(!element_type.trim().is_empty(), EmptyTypeSpellingSnafu { what: "element" });
    ensure!(!return_type.trim().is_empty(), EmptyTypeSpellingSnafu { what: "return" });
    op.validate()
}
