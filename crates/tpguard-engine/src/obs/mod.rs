//! Lightweight in-process metrics.
//!
//! Decision, notification, and collaborator-failure counters are stored as
//! atomics and rendered in Prometheus text format on demand by the host.

pub mod metrics;
