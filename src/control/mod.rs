//! Control policies.

pub mod bang_bang;
