//! Fixed skeletons of the generated device source.
//!
//! Every fragment has the same outer frame: four `#define` bindings, the
//! shape-specific body, and matching `#undef`s so nothing leaks into the
//! kernel template the fragment is concatenated with. The body is one of four
//! shapes (unary/binary × stateless/stateful); each shape declares the same
//! wrapper type, [`OP_WRAPPER_NAME`], which is what algorithm kernels are
//! written against.
//!
//! # Stateless binary body
//!
//! ```c
//! extern "C" __device__ R OP_NAME(VALUE_T lhs, VALUE_T rhs);
//! struct op_wrapper {
//!   __device__ R operator()(VALUE_T lhs, VALUE_T rhs) const {
//!     return OP_NAME(lhs, rhs);
//!   }
//! };
//! ```
//!
//! Stateful bodies first declare `op_state`, an `__align__(OP_ALIGNMENT)`
//! struct of `OP_SIZE` bytes, pass `op_state *state` as the leading
//! prototype argument, embed one `op_state` in the wrapper and drop `const`
//! from the call operator.

use crate::descriptor::OpKind;

/// Name of the generated callable type. Kernel templates refer to it directly.
pub const OP_WRAPPER_NAME: &str = "op_wrapper";

/// Name of the opaque state block type in stateful fragments.
pub const OP_STATE_NAME: &str = "op_state";

/// Binding holding the element type spelling.
pub const VALUE_T: &str = "VALUE_T";
/// Binding holding the external symbol name.
pub const OP_NAME: &str = "OP_NAME";
/// Binding holding the state alignment (empty when stateless).
pub const OP_ALIGNMENT: &str = "OP_ALIGNMENT";
/// Binding holding the state size (empty when stateless).
pub const OP_SIZE: &str = "OP_SIZE";

/// All bindings, in definition order.
pub const BINDINGS: [&str; 4] = [VALUE_T, OP_NAME, OP_ALIGNMENT, OP_SIZE];

/// Number of operands the user function takes (state pointer excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub const fn param_count(&self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }

    /// Parameter declarations of the call operator and prototype.
    pub const fn params(&self) -> &'static str {
        match self {
            Self::Unary => "VALUE_T val",
            Self::Binary => "VALUE_T lhs, VALUE_T rhs",
        }
    }

    /// Forwarded argument list.
    pub const fn args(&self) -> &'static str {
        match self {
            Self::Unary => "val",
            Self::Binary => "lhs, rhs",
        }
    }
}

/// One of the four generated operator shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorShape {
    pub arity: Arity,
    pub kind: OpKind,
}

impl OperatorShape {
    pub const fn new(arity: Arity, kind: OpKind) -> Self {
        Self { arity, kind }
    }

    /// Render the shape-specific body with `return_type` substituted.
    pub fn render_body(&self, return_type: &str) -> String {
        let params = self.arity.params();
        let args = self.arity.args();

        match self.kind {
            OpKind::Stateless => format!(
                r#"
extern "C" __device__ {return_type} {OP_NAME}({params});
struct {OP_WRAPPER_NAME} {{
  __device__ {return_type} operator()({params}) const {{
    return {OP_NAME}({args});
  }}
}};
"#
            ),
            OpKind::Stateful => format!(
                r#"
struct __align__({OP_ALIGNMENT}) {OP_STATE_NAME} {{
  char data[{OP_SIZE}];
}};
extern "C" __device__ {return_type} {OP_NAME}({OP_STATE_NAME} *state, {params});
struct {OP_WRAPPER_NAME} {{
  {OP_STATE_NAME} state;
  __device__ {return_type} operator()({params}) {{
    return {OP_NAME}(&state, {args});
  }}
}};
"#
            ),
        }
    }
}

impl std::fmt::Display for OperatorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arity = match self.arity {
            Arity::Unary => "unary",
            Arity::Binary => "binary",
        };
        write!(f, "{} {arity}", self.kind.as_str())
    }
}

/// Frame a body with the four bindings and their cleanup.
pub fn wrap_with_bindings(value_t: &str, op_name: &str, alignment: &str, size: &str, body: &str) -> String {
    format!(
        "
#define {VALUE_T} {value_t}
#define {OP_NAME} {op_name}
#define {OP_ALIGNMENT} {alignment}
#define {OP_SIZE} {size}

// Source
{body}
#undef {VALUE_T}
#undef {OP_NAME}
#undef {OP_ALIGNMENT}
#undef {OP_SIZE}
"
    )
}
