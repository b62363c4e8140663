//! Safe-zone crossing check (union of all enabled providers).
//!
//! A point is safe when ANY enabled provider says so. The crossing is
//! disallowed only when the destination is safe and the origin is not: moving
//! inside a sanctuary or leaving it is fine, escaping into one is not.

use std::sync::Arc;

use tpguard_core::model::Point;

use crate::hooks::ZoneProvider;
use crate::obs::metrics::GuardMetrics;

/// Returns true when the teleport escapes from an unsafe point into a safe zone.
///
/// Missing points, no providers, and provider failures all resolve to `false`.
pub fn is_disallowed_crossing(
    origin: Option<&Point>,
    destination: Option<&Point>,
    providers: &[Arc<dyn ZoneProvider>],
    metrics: &GuardMetrics,
) -> bool {
    if providers.is_empty() {
        return false;
    }
    let Some(destination) = destination else {
        return false;
    };

    if !any_safe(providers, destination, metrics) {
        return false;
    }

    // Unknown origin: cannot tell an escape from a move inside the zone.
    let Some(origin) = origin else {
        return false;
    };

    !any_safe(providers, origin, metrics)
}

/// Stops at the first provider that reports `point` safe.
fn any_safe(providers: &[Arc<dyn ZoneProvider>], point: &Point, metrics: &GuardMetrics) -> bool {
    providers.iter().any(|p| match p.is_safe_zone(point) {
        Ok(safe) => safe,
        Err(e) => {
            tracing::warn!(
                provider = p.name(),
                world = %point.world,
                error = %e,
                "zone query failed; treating point as not safe"
            );
            metrics
                .collaborator_failures
                .inc(&[("collaborator", "zone_provider"), ("code", e.code().as_str())]);
            false
        }
    })
}
