//! tpguard engine library entry.
//!
//! This crate wires the collaborator hooks, config, policy, and denial
//! notifier into the `TeleportGuard` a host calls on every teleport event.

pub mod config;
pub mod guard;
pub mod hooks;
pub mod notify;
pub mod obs;
pub mod policy;

pub use guard::TeleportGuard;
