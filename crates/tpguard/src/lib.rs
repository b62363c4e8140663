//! Top-level facade crate for tpguard.
//!
//! Re-exports core types and the engine library so hosts can depend on a single crate.

pub mod core {
    pub use tpguard_core::*;
}

pub mod engine {
    pub use tpguard_engine::*;
}
