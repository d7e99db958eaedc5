//! # System Configuration

/// Mailbox capacity used when none is configured.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 100;

/// Prefix of system-generated PIDs.
pub const DEFAULT_ID_PREFIX: &str = "actor";

/// Settings shared by every actor of one [`ActorSystem`](crate::ActorSystem).
///
/// ```rust
/// use tiny_actor::{ActorSystem, SystemConfig};
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = SystemConfig::default()
///     .with_mailbox_capacity(16)
///     .with_id_prefix("worker");
/// let system = ActorSystem::with_config(config);
/// assert!(system.is_empty().await);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// How many envelopes a mailbox buffers before `send` suspends the caller.
    pub mailbox_capacity: usize,
    /// Generated PIDs look like `"<id_prefix>-<n>"`.
    pub id_prefix: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl SystemConfig {
    /// Sets the mailbox capacity. Zero is clamped to one; a mailbox always holds at
    /// least one envelope.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}
