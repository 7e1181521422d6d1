//! Content/integration errors.
//!
//! These are environment errors, not gameplay outcomes: a malformed
//! encounter is a content bug and must fail fast instead of silently
//! skipping enemies. Gameplay rejections (dead actor, disallowed flee,
//! missed attack) never appear here - they are surfaced as
//! [`ActionResult`](crate::resolve::ActionResult) values.

/// Errors raised while assembling a battle from content definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentError {
    /// The encounter references an enemy id the lookup cannot resolve.
    #[error("enemy definition '{0}' not found")]
    EnemyNotFound(String),

    /// The encounter spawns no enemies at all.
    #[error("encounter '{0}' contains no enemies")]
    EmptyEncounter(String),
}
