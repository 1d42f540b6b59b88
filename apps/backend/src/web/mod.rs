//! Web-boundary helpers that must not leak into service/domain code.

pub mod trace_ctx;
