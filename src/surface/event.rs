/// Pointer button identifiers reported by the surface subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Middle button / wheel click.
    Center,
    /// Secondary button.
    Right,
}

/// What a pointer did, independent of where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerAction {
    /// Pointer moved to the event position.
    Moved,
    /// Button went down at the event position.
    Pressed(PointerButton),
    /// Button went up at the event position.
    Released(PointerButton),
    /// Two rapid presses at the event position.
    DoubleClick(PointerButton),
}

/// A pointer event in some coordinate space.
///
/// The surface subsystem delivers these in region-local coordinates; the
/// splitting engine remaps them into composite space before they are
/// forwarded to the composite window's event sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    /// Horizontal position in the event's coordinate space.
    pub x: i32,
    /// Vertical position in the event's coordinate space.
    pub y: i32,
    /// What happened at that position.
    pub action: PointerAction,
}

impl PointerEvent {
    /// Same action, translated by `(dx, dy)`.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// An opaque key press code, forwarded verbatim from a region surface to
/// the composite window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Key(pub u32);

#[cfg(test)]
#[path = "../../tests/unit/surface/event.rs"]
mod tests;
