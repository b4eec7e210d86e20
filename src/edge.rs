//! Screen edges and the two geometric tests the proximity engine runs
//! against them.

use std::fmt;

use ratatui::layout::Rect;

/// Pointer position in viewport coordinates (terminal cells for the
/// console host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: u16,
    pub y: u16,
}

impl Pointer {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<&crossterm::event::MouseEvent> for Pointer {
    fn from(event: &crossterm::event::MouseEvent) -> Self {
        Self::new(event.column, event.row)
    }
}

/// The viewport boundary an element is anchored to and reveals from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Whether `pointer` lies within `threshold` of this edge of `viewport`.
    pub fn is_near(self, pointer: Pointer, viewport: Rect, threshold: u16) -> bool {
        match self {
            Edge::Left => pointer.x <= viewport.left().saturating_add(threshold),
            Edge::Right => pointer.x.saturating_add(threshold) >= viewport.right(),
            Edge::Top => pointer.y <= viewport.top().saturating_add(threshold),
            Edge::Bottom => pointer.y.saturating_add(threshold) >= viewport.bottom(),
        }
    }

    /// Whether `pointer` has left `rect`, measured the way an element anchored
    /// to this edge is concealed.
    ///
    /// Left and top compare against the rectangle's extent measured from the
    /// viewport origin; right and bottom compare against its absolute
    /// position.
    pub fn is_outside(self, pointer: Pointer, rect: Rect) -> bool {
        match self {
            Edge::Left => pointer.x > rect.width,
            Edge::Right => pointer.x < rect.left(),
            Edge::Top => pointer.y > rect.height,
            Edge::Bottom => pointer.y < rect.top(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        f.write_str(s)
    }
}

/// Whether `pointer` is within `band` of any of the four viewport edges.
pub fn near_any_edge(pointer: Pointer, viewport: Rect, band: u16) -> bool {
    Edge::ALL
        .iter()
        .any(|edge| edge.is_near(pointer, viewport, band))
}
