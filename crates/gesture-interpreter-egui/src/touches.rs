use egui::{Pos2, TouchId, TouchPhase};

/// Touches currently on the surface, in the order they were placed.
#[derive(Clone, Debug, Default)]
pub(crate) struct ActiveTouches {
    ids: Vec<TouchId>,
    positions: Vec<Pos2>,
}

/// How a touch event changed the set of active touches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum TouchChange {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl ActiveTouches {
    /// Positions of the active touches, first placed first.
    pub(crate) fn positions(&self) -> &[Pos2] {
        &self.positions
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Records a touch event.
    ///
    /// Returns [`None`] for events of touches that were never started.
    pub(crate) fn apply(&mut self, id: TouchId, phase: TouchPhase, pos: Pos2) -> Option<TouchChange> {
        let index = self.ids.iter().position(|active| *active == id);

        match (phase, index) {
            (TouchPhase::Start, Some(index)) => {
                self.positions[index] = pos;
                Some(TouchChange::Started)
            }
            (TouchPhase::Start, None) => {
                self.ids.push(id);
                self.positions.push(pos);
                Some(TouchChange::Started)
            }
            (TouchPhase::Move, Some(index)) => {
                self.positions[index] = pos;
                Some(TouchChange::Moved)
            }
            (TouchPhase::End, Some(index)) => {
                self.remove(index);
                Some(TouchChange::Ended)
            }
            (TouchPhase::Cancel, Some(index)) => {
                self.remove(index);
                Some(TouchChange::Cancelled)
            }
            (_, None) => {
                tracing::trace!(?id, ?phase, "event for unknown touch");
                None
            }
        }
    }

    fn remove(&mut self, index: usize) {
        self.ids.remove(index);
        self.positions.remove(index);
    }
}
