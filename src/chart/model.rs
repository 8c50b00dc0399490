use super::geometry::{Point, WedgePath};
use crate::config::SegmentConfig;
use crate::theme::Color;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Stable identity of a segment: its position in the seed list at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, From, Into)]
pub struct SegmentId(usize);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct SegmentName(String);

impl SegmentName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    fn fallback(id: SegmentId) -> Self {
        Self(format!("segment-{}", id))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum IconKey {
    Medkit,
    Briefcase,
    Cash,
    People,
    Person,
    GameController,
    Scale,
    Heart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub name: SegmentName,
    pub color: Color,
    pub value: f64,
    pub icon: Option<IconKey>,
}

impl Segment {
    pub fn from_config(id: SegmentId, cfg: &SegmentConfig) -> Self {
        Self {
            id,
            name: cfg
                .name
                .clone()
                .unwrap_or_else(|| SegmentName::fallback(id)),
            color: cfg.color,
            value: cfg.value,
            icon: cfg.icon,
        }
    }

    /// Stand-in for a layout slot with no seed: invisible and empty.
    pub fn placeholder(id: SegmentId) -> Self {
        Self {
            id,
            name: SegmentName::fallback(id),
            color: Color::TRANSPARENT,
            value: 0.0,
            icon: None,
        }
    }
}

/// Angular extent in degrees, measured clockwise from +x in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    pub start: f64,
    pub end: f64,
}

impl SegmentSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// The leading part of this span covering `progress` of its width.
    pub fn revealed(&self, progress: f64) -> Self {
        Self::new(self.start, self.start + self.width() * progress)
    }

    pub fn contains(&self, angle_deg: f64) -> bool {
        let width = self.width();
        if width.is_nan() || width <= 0.0 {
            false
        } else if width >= 360.0 {
            true
        } else {
            (angle_deg - self.start).rem_euclid(360.0) < width
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LayoutMode {
    /// `360 / count` degrees per segment, assigned in list order.
    #[default]
    Equal,
    /// One start angle per segment; each span ends where the next starts.
    Explicit(Vec<f64>),
}

/// Ordered `(segment, span)` pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLayout {
    entries: Vec<(SegmentId, SegmentSpan)>,
}

impl ChartLayout {
    pub fn derive(mode: &LayoutMode, ids: &[SegmentId]) -> Self {
        match mode {
            LayoutMode::Equal => Self::equal(ids),
            LayoutMode::Explicit(starts) => Self::explicit(ids, starts),
        }
    }

    pub fn equal(ids: &[SegmentId]) -> Self {
        let count = ids.len();
        let step = 360.0 / count.max(1) as f64;
        let entries = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let start = i as f64 * step;
                // pin the last edge so the spans close the circle exactly
                let end = if i + 1 == count {
                    360.0
                } else {
                    (i + 1) as f64 * step
                };
                (id, SegmentSpan::new(start, end))
            })
            .collect();
        Self { entries }
    }

    /// Caller-supplied start angles, taken as given. The last span wraps to
    /// `starts[0] + 360`. Segments beyond the end of `starts` are left out.
    pub fn explicit(ids: &[SegmentId], starts: &[f64]) -> Self {
        let entries = ids
            .iter()
            .zip(starts)
            .enumerate()
            .map(|(i, (&id, &start))| {
                let end = starts
                    .get(i + 1)
                    .copied()
                    .unwrap_or_else(|| starts[0] + 360.0);
                (id, SegmentSpan::new(start, end))
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(SegmentId, SegmentSpan)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn span(&self, id: SegmentId) -> Option<SegmentSpan> {
        self.entries
            .iter()
            .find_map(|&(entry, span)| (entry == id).then_some(span))
    }

    pub fn remove(&mut self, id: SegmentId) {
        self.entries.retain(|&(entry, _)| entry != id);
    }
}

/// Where a segment's icon goes, just outside the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub id: SegmentId,
    pub position: Point,
    pub color: Color,
    pub icon: Option<IconKey>,
}

/// Divider line from the center out past the rim, at a span's leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

/// What an external slider needs to edit the selected segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEditor {
    pub id: SegmentId,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub track_color: Color,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFrame {
    pub id: SegmentId,
    pub wedge: WedgePath,
    pub hit: WedgePath,
    pub fill: Color,
    pub is_active: bool,
}

/// Everything a rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderSnapshot {
    pub segments: Vec<SegmentFrame>,
    pub labels: Vec<LabelAnchor>,
    pub spokes: Vec<Spoke>,
    pub selected_id: Option<SegmentId>,
    pub selected_value: Option<f64>,
    pub editor: Option<ValueEditor>,
    /// True when no animation is in flight and further ticks would change nothing.
    pub settled: bool,
}

impl RenderSnapshot {
    pub fn segment(&self, id: SegmentId) -> Option<&SegmentFrame> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_active).count()
    }
}

/// Formats `value` with two significant digits: `10`, `6.5`, `3.0`, `0.50`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{:.1}", value);
    }
    // round first so 9.96 carries into a second integer digit
    let scale = 10f64.powi(1 - value.abs().log10().floor() as i32);
    let rounded = (value * scale).round() / scale;
    let integer_digits = rounded.abs().log10().floor() as i32 + 1;
    let decimals = (2 - integer_digits).max(0) as usize;
    format!("{:.*}", decimals, rounded)
}
