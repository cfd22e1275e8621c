use egui::Pos2;

/// A single stroke segment: two consecutive pointer positions from a drag
/// gesture. Consumed immediately by the stroke renderer, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub from: Pos2,
    pub to: Pos2,
}

/// Pairs consecutive pointer positions into stroke segments. The first
/// position of a drag produces no segment; every following position is paired
/// with its predecessor. Release resets the pairing so separate drags do not
/// connect.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    last: Option<Pos2>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current pointer position; returns the segment from the
    /// previous position, if there is one.
    pub fn advance(&mut self, pos: Pos2) -> Option<StrokeSegment> {
        let segment = self.last.map(|from| StrokeSegment { from, to: pos });
        self.last = Some(pos);
        segment
    }

    /// Called on pointer release: the next drag starts a fresh stroke.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }
}
