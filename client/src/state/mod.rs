//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `newsletter`) so components depend on
//! small focused models. Theme state lives in `crate::theme` because it
//! also owns browser persistence.

pub mod nav;
pub mod newsletter;
