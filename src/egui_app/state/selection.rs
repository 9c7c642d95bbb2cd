use crate::registry::{PropertyType, Segment};

/// Sidebar model choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub property: PropertyType,
    /// Remembered even while `RumahTinggal` is selected.
    pub segment: Segment,
}

impl SelectionState {
    /// Segment to pass to the registry, if the property type uses one.
    pub fn active_segment(&self) -> Option<Segment> {
        self.property.has_segments().then_some(self.segment)
    }
}
