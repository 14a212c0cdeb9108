//! Binary and comparison operator synthesis.

use crate::test::helpers::*;
use crate::*;

const USER_ADD: &str = r#"
#define VALUE_T int
#define OP_NAME user_add
#define OP_ALIGNMENT 
#define OP_SIZE 

// Source

extern "C" __device__ VALUE_T OP_NAME(VALUE_T lhs, VALUE_T rhs);
struct op_wrapper {
  __device__ VALUE_T operator()(VALUE_T lhs, VALUE_T rhs) const {
    return OP_NAME(lhs, rhs);
  }
};

#undef VALUE_T
#undef OP_NAME
#undef OP_ALIGNMENT
#undef OP_SIZE
"#;

#[test]
fn test_stateless_binary_exact_text() {
    let fragment = synthesize_binary_operator("int", &OpDescriptor::stateless("user_add"));

    assert_eq!(fragment.as_str(), USER_ADD);
    assert_eq!(fragment.shape(), OperatorShape::new(Arity::Binary, OpKind::Stateless));
}

#[test]
fn test_stateless_binary_forwards_operands() {
    let fragment = synthesize_binary_operator("int", &OpDescriptor::stateless("user_add"));
    let code = fragment.as_str();

    assert_eq!(binding(code, "VALUE_T"), Some("int"));
    assert_eq!(binding(code, "OP_NAME"), Some("user_add"));
    assert_eq!(prototype_params(code), ["VALUE_T lhs", "VALUE_T rhs"]);
    assert!(code.contains("    return OP_NAME(lhs, rhs);\n"), "Missing forwarding call:\n{code}");
    assert_eq!(count(code, OP_STATE_NAME), 0, "Stateless fragment declares state:\n{code}");
}

#[test]
fn test_stateful_binary() {
    let fragment = synthesize_binary_operator("float", &OpDescriptor::stateful("user_sum", 32, 16));
    let code = fragment.as_str();

    assert_eq!(binding(code, "OP_ALIGNMENT"), Some("16"));
    assert_eq!(binding(code, "OP_SIZE"), Some("32"));
    assert!(code.contains("struct __align__(OP_ALIGNMENT) op_state {\n  char data[OP_SIZE];\n};"), "{code}");
    assert_eq!(prototype_params(code), ["op_state *state", "VALUE_T lhs", "VALUE_T rhs"]);
    assert!(code.contains("  op_state state;\n"), "Missing state member:\n{code}");
    assert!(code.contains("operator()(VALUE_T lhs, VALUE_T rhs) {"), "Call operator must be mutating:\n{code}");
    assert!(code.contains("return OP_NAME(&state, lhs, rhs);"), "Missing state forwarding:\n{code}");
}

#[test]
fn test_comparison_returns_bool() {
    let fragment = synthesize_comparison_operator("::cuda::std::int64_t", &OpDescriptor::stateless("user_less"));
    let code = fragment.as_str();

    assert!(code.contains(r#"extern "C" __device__ bool OP_NAME(VALUE_T lhs, VALUE_T rhs);"#), "{code}");
    assert!(code.contains("__device__ bool operator()(VALUE_T lhs, VALUE_T rhs) const {"), "{code}");
    assert_eq!(binding(code, "VALUE_T"), Some("::cuda::std::int64_t"));
}

#[test]
fn test_return_type_only_changes_return_token() {
    for op in [OpDescriptor::stateless("cmp"), OpDescriptor::stateful("cmp", 8, 8)] {
        let value = synthesize_binary_operator("short", &op);
        let boolean = synthesize_comparison_operator("short", &op);

        assert_eq!(count(value.as_str(), "__device__ VALUE_T "), 2);
        assert_eq!(value.as_str().replace("__device__ VALUE_T ", "__device__ bool "), boolean.as_str());
    }
}

#[test]
fn test_explicit_return_type() {
    let op = OpDescriptor::stateless("pair_min");
    let fragment = synthesize_binary_operator_with_return("my_pair", &op, "int");

    assert!(fragment.as_str().contains("__device__ int OP_NAME(VALUE_T lhs, VALUE_T rhs);"));
    assert_eq!(fragment, synthesize_binary_operator_with_return("my_pair", &op, "int"));
}

#[test]
fn test_symbol_and_type_substituted_verbatim() {
    // No identifier checks: whatever the caller passes ends up in the text.
    let op = OpDescriptor::stateless("ns::not an identifier");
    let fragment = synthesize_binary_operator("const int&", &op);

    assert_eq!(binding(fragment.as_str(), "OP_NAME"), Some("ns::not an identifier"));
    assert_eq!(binding(fragment.as_str(), "VALUE_T"), Some("const int&"));
}
