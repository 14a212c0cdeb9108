//! Source synthesis for user-supplied device operators.
//!
//! Callers of the parallel algorithms library hand over their own comparators,
//! reducers and transforms as separately compiled device functions. This crate
//! generates the device source that declares such a function and wraps it in
//! a fixed-name callable type, so precompiled generic algorithm kernels can be
//! instantiated with it at JIT time.
//!
//! # Architecture
//!
//! - **Descriptor**: what the caller tells us about the operator ([`OpDescriptor`])
//! - **Skeleton**: the fixed text frame and the four operator shapes ([`skeleton`])
//! - **Operator**: pure, infallible synthesis functions ([`operator`])
//! - **Synthesizer**: validating front end with configuration ([`Synthesizer`])
//! - **FFI**: C-ABI descriptor mirror ([`ffi`])
//!
//! # Usage
//!
//! ```
//! use opsynth_codegen::{OpDescriptor, synthesize_binary_operator};
//!
//! let op = OpDescriptor::stateless("user_add");
//! let fragment = synthesize_binary_operator("int", &op);
//!
//! assert!(fragment.as_str().contains("#define OP_NAME user_add"));
//! assert!(fragment.as_str().contains("struct op_wrapper"));
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod ffi;
pub mod fragment;
pub mod operator;
pub mod skeleton;
pub mod synthesizer;


pub use config::SynthConfig;
pub use descriptor::{OpDescriptor, OpKind, StateLayout};
pub use error::*;
pub use ffi::{RawOpDescriptor, RawOpKind};
pub use fragment::SourceFragment;
pub use operator::{
    synthesize_binary_operator, synthesize_binary_operator_with_return, synthesize_comparison_operator,
    synthesize_unary_operator,
};
pub use skeleton::{Arity, OP_STATE_NAME, OP_WRAPPER_NAME, OperatorShape};
pub use synthesizer::Synthesizer;
