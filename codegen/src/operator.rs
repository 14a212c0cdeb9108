//! Operator source synthesis.
//!
//! These functions turn an [`OpDescriptor`] plus an element type spelling into
//! a [`SourceFragment`]. They are pure and never fail: type spellings and the
//! symbol name are substituted verbatim, and any defect in them surfaces as a
//! diagnostic from the JIT compiler that later consumes the text. Use
//! [`crate::Synthesizer`] to reject malformed descriptors up front.

use crate::descriptor::{OpDescriptor, OpKind};
use crate::fragment::SourceFragment;
use crate::skeleton::{Arity, OperatorShape, VALUE_T, wrap_with_bindings};

/// Return type spelling of comparison operators.
pub const BOOL_RETURN: &str = "bool";

/// Binary operator returning the element type (reducers, scans).
pub fn synthesize_binary_operator(element_type: &str, op: &OpDescriptor) -> SourceFragment {
    synthesize_binary_operator_with_return(element_type, op, VALUE_T)
}

/// Binary operator returning `bool` (comparators).
pub fn synthesize_comparison_operator(element_type: &str, op: &OpDescriptor) -> SourceFragment {
    synthesize_binary_operator_with_return(element_type, op, BOOL_RETURN)
}

/// Binary operator with an explicit return type spelling.
///
/// Passing [`VALUE_T`] makes the return type follow the element type binding.
pub fn synthesize_binary_operator_with_return(
    element_type: &str,
    op: &OpDescriptor,
    return_type: &str,
) -> SourceFragment {
    synthesize(Arity::Binary, element_type, op, return_type)
}

/// Unary operator (transforms). The return type is the element type.
pub fn synthesize_unary_operator(element_type: &str, op: &OpDescriptor) -> SourceFragment {
    synthesize(Arity::Unary, element_type, op, VALUE_T)
}

fn synthesize(arity: Arity, element_type: &str, op: &OpDescriptor, return_type: &str) -> SourceFragment {
    let shape = OperatorShape::new(arity, op.kind);
    let body = shape.render_body(return_type);

    let (alignment, size) = match op.kind {
        OpKind::Stateless => (String::new(), String::new()),
        OpKind::Stateful => (op.state_alignment.to_string(), op.state_size.to_string()),
    };

    let code = wrap_with_bindings(element_type, &op.symbol_name, &alignment, &size, &body);
    let fragment = SourceFragment::new(code, shape);

    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(
            symbol = %op.symbol_name,
            shape = %shape,
            element_type,
            return_type,
            hash = fragment.content_hash(),
            "synthesized operator"
        );
    }

    fragment
}
