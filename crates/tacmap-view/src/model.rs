//! Tracked entities, as exposed by a [`MapProvider`](crate::provider::MapProvider).
//!
//! The view never creates or mutates these; it reads provider snapshots.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Position;

/// Who an entity belongs to, or who should respond to an incident.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Designation {
    Medical,
    Security,
    /// Technical/infrastructure staff and incidents.
    Technical,
}

impl Designation {
    pub const ALL: [Designation; 3] =
        [Designation::Medical, Designation::Security, Designation::Technical];

    pub fn name(self) -> &'static str {
        match self {
            Designation::Medical => "medical",
            Designation::Security => "security",
            Designation::Technical => "technical",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Reference to a fixed-size bitmap owned by the host.
///
/// Layout only needs the size; `name` is passed through to the draw stream
/// for the backend to resolve.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Icon {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self { name: name.into(), width, height }
    }
}

/// A tracked person in the field.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    /// Display identifier. `&&` encodes a literal `&`; see [`Personnel::label`].
    pub id: String,
    pub designation: Designation,
    pub position: Position,
    pub icon: Icon,
}

impl Personnel {
    pub fn new(
        id: impl Into<String>,
        designation: Designation,
        position: Position,
        icon: Icon,
    ) -> Self {
        Self { id: id.into(), designation, position, icon }
    }

    /// Identifier as it is drawn on the map.
    #[inline]
    pub fn label(&self) -> Cow<'_, str> {
        unescape_label(&self.id)
    }
}

/// Replaces every `&&` with `&`, scanning left to right without overlap.
///
/// No other escape sequence is recognised; everything else passes through.
pub fn unescape_label(id: &str) -> Cow<'_, str> {
    if id.contains("&&") {
        Cow::Owned(id.replace("&&", "&"))
    } else {
        Cow::Borrowed(id)
    }
}

/// A reported event in the field.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u32,
    pub kind: Designation,
    pub position: Position,
    /// Archived incidents are closed and excluded from current listings.
    #[serde(default)]
    pub archived: bool,
}

impl Incident {
    pub fn new(id: u32, kind: Designation, position: Position) -> Self {
        Self { id, kind, position, archived: false }
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }
}
