use crate::chart::{Point, SegmentId};

/// Input a host forwards into the chart between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// A tap already hit-tested to a segment by the host.
    Tap(SegmentId),
    /// A raw tap position in chart coordinates, hit-tested by the chart.
    Pointer(Point),
    /// A new value from the slider bound to the selected segment.
    ValueEdit(f64),
}
