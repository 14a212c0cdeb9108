mod binary;
mod ffi;
