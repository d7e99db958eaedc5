//! # Actor Identity
//!
//! A [`Pid`] is the only way to address an actor. It is a plain value: cloning it,
//! comparing it, or using it as a map key never touches the actor it names.

use std::fmt;

/// Opaque, value-comparable identifier of an actor.
///
/// Identifiers are either generated by the [`ActorSystem`](crate::ActorSystem)
/// (`"actor-0"`, `"actor-1"`, ...) or equal to the name passed to
/// [`spawn_named`](crate::ActorSystem::spawn_named).
///
/// The default value is the "nobody" PID. It is the sender of every message injected
/// from outside an actor, and replying to it drops the reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid {
    id: String,
}

impl Pid {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The zero PID.
    pub fn nobody() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_nobody(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nobody() {
            f.write_str("<nobody>")
        } else {
            f.write_str(&self.id)
        }
    }
}

impl From<&str> for Pid {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Pid {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
