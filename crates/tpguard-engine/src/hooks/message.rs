use std::collections::HashMap;

use tpguard_core::error::Result;
use tpguard_core::model::Actor;

/// Renders `template_key` with `placeholders` and delivers it to `actor`.
/// Fire-and-forget: callers log and drop errors.
pub trait MessageService: Send + Sync {
    fn send(
        &self,
        actor: &Actor,
        template_key: &str,
        placeholders: &HashMap<String, String>,
    ) -> Result<()>;
}
