//! Room model.
//!
//! Rooms are the physical locations judging happens in. The room list
//! is fixed for one scheduling run and its order is significant: the
//! schedule builder fills rooms in list order at every time slot.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A judging room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier (integers are normalized to strings).
    pub id: EntityId,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_from_integer_id() {
        let r: Room = serde_json::from_str(r#"{"id": 2, "name": "Hall B"}"#).unwrap();
        assert_eq!(r.id, "2");
        assert_eq!(r.name, "Hall B");
        assert_eq!(r, Room::new(2).with_name("Hall B"));
    }
}
