//! Request orchestration.

pub mod design;
