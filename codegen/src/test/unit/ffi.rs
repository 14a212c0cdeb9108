//! C-ABI descriptor conversion.

use std::ffi::CString;
use std::ptr;

use crate::*;

fn raw(kind: i32, name: &CString, size: usize, alignment: usize) -> RawOpDescriptor {
    RawOpDescriptor { kind, name: name.as_ptr(), size, alignment }
}

#[test]
fn test_from_raw_stateless_drops_layout() {
    let name = CString::new("user_add").unwrap();
    let op = unsafe { OpDescriptor::from_raw(&raw(RawOpKind::Stateless as i32, &name, 16, 8)) }.unwrap();

    assert_eq!(op, OpDescriptor::stateless("user_add"));
}

#[test]
fn test_from_raw_stateful() {
    let name = CString::new("user_scale").unwrap();
    let op = unsafe { OpDescriptor::from_raw(&raw(RawOpKind::Stateful as i32, &name, 16, 8)) }.unwrap();

    assert_eq!(op, OpDescriptor::stateful("user_scale", 16, 8));
    assert!(op.validate().is_ok());
}

#[test]
fn test_from_raw_null_name() {
    let desc = RawOpDescriptor { kind: 0, name: ptr::null(), size: 0, alignment: 0 };
    let err = unsafe { OpDescriptor::from_raw(&desc) }.unwrap_err();

    assert!(matches!(err, Error::NullSymbolName));
}

#[test]
fn test_from_raw_invalid_utf8() {
    let name = CString::new(vec![0x66, 0xff, 0x66]).unwrap();
    let err = unsafe { OpDescriptor::from_raw(&raw(0, &name, 0, 0)) }.unwrap_err();

    assert!(matches!(err, Error::InvalidSymbolEncoding { .. }));
}

#[test]
fn test_from_raw_unknown_kind() {
    let name = CString::new("f").unwrap();
    let err = unsafe { OpDescriptor::from_raw(&raw(7, &name, 0, 0)) }.unwrap_err();

    assert!(matches!(err, Error::UnknownOpKind { kind: 7 }));
    assert_eq!(err.to_string(), "unknown operator kind: 7");
}

#[test]
fn test_from_raw_keeps_bad_layout_for_validate() {
    let name = CString::new("f").unwrap();
    let op = unsafe { OpDescriptor::from_raw(&raw(1, &name, 0, 4)) }.unwrap();

    assert!(matches!(op.validate(), Err(Error::ZeroStateSize { .. })));
}
