use tpguard_core::error::Result;
use tpguard_core::model::ActorId;

/// Combat tag tracker owned by the host.
pub trait CombatStateOracle: Send + Sync {
    fn is_in_combat(&self, actor: &ActorId) -> Result<bool>;
    /// Seconds left on the actor's combat tag. Only used for message text.
    fn remaining_combat_secs(&self, actor: &ActorId) -> Result<u64>;
}
