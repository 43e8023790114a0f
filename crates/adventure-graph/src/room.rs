//! Room identity, role, and the node type itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GraphError;

// ---------------------------------------------------------------------------
// RoomId
// ---------------------------------------------------------------------------

/// Stable index of a room inside its [`Graph`](crate::Graph) arena.
///
/// Connections are stored as `RoomId`s rather than references, so rooms
/// can point at each other without any ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Position of this room in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// What part a room plays in a game.
///
/// Every map has exactly one `Start` and one `End` room; everything else
/// is `Mid`. The `Display` form is the token used in room files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Start,
    #[default]
    Mid,
    End,
}

impl Role {
    /// The token written after `ROOM TYPE:` in a room file.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Start => "START_ROOM",
            Self::Mid => "MID_ROOM",
            Self::End => "END_ROOM",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Role {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START_ROOM" => Ok(Self::Start),
            "MID_ROOM" => Ok(Self::Mid),
            "END_ROOM" => Ok(Self::End),
            other => Err(GraphError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A single node of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    connections: Vec<RoomId>,
    role: Role,
}

impl Room {
    /// Creates a room with no connections.
    pub fn new(id: RoomId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            connections: Vec::new(),
            role,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Outbound connections, in the order they were added.
    pub fn connections(&self) -> &[RoomId] {
        &self.connections
    }

    /// Number of outbound connections.
    pub fn connect_count(&self) -> usize {
        self.connections.len()
    }

    /// `true` while another connection may still be added.
    pub fn has_capacity(&self) -> bool {
        self.connections.len() < crate::MAX_CONNECTIONS
    }

    /// `true` if this room already has an edge to `other`.
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn push_connection(&mut self, target: RoomId) {
        self.connections.push(target);
    }
}
