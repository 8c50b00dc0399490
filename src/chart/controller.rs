use super::animation::{AnimationParams, SegmentAnimation};
use super::geometry::{Point, angle_around, hit_path, polar, wedge_path};
use super::model::{
    ChartLayout, LabelAnchor, LayoutMode, RenderSnapshot, Segment, SegmentFrame, SegmentId,
    SegmentSpan, Spoke, ValueEditor, format_value,
};
use super::selection::{SelectionChange, SelectionState};
use super::{
    EXTRA_PADDING, ICON_SIZE, LIFT_OFFSET, SCALE_MAX, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP,
    WHEEL_RADIUS,
};
use crate::config::Config;
use crate::events::ChartEvent;
use kurbo::{Circle, Shape};
use std::time::Duration;

/// Where the wheel sits and how much room its decorations take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center: Point,
    pub radius: f64,
    pub padding: f64,
    pub icon_size: f64,
}

impl ChartGeometry {
    /// Geometry centered in the smallest square canvas that fits the labels.
    pub fn centered(radius: f64, padding: f64, icon_size: f64) -> Self {
        let extent = radius + padding + icon_size * 1.5;
        Self {
            center: Point::new(extent, extent),
            radius,
            padding,
            icon_size,
        }
    }

    pub fn canvas_size(&self) -> f64 {
        self.center.x.max(self.center.y) * 2.0
    }

    /// Distance from the center at which label anchors sit.
    pub fn label_radius(&self) -> f64 {
        self.radius + self.padding + self.icon_size
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::centered(WHEEL_RADIUS, EXTRA_PADDING, ICON_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub scale_max: f64,
    pub lift_offset: f64,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub animation: AnimationParams,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            scale_max: SCALE_MAX,
            lift_offset: LIFT_OFFSET,
            slider_min: SLIDER_MIN,
            slider_max: SLIDER_MAX,
            slider_step: SLIDER_STEP,
            animation: AnimationParams::default(),
        }
    }
}

impl ChartOptions {
    /// `value / scale_max`, never negative and never NaN. Values above the scale
    /// are left as they are.
    pub fn magnitude_factor(&self, value: f64) -> f64 {
        let factor = value / self.scale_max;
        if factor.is_finite() {
            factor.max(0.0)
        } else {
            0.0
        }
    }
}

/// The interactive wheel: domain values, their layout, the selection and the
/// per-segment animations, kept consistent across every event and tick.
///
/// `segments`, `animations` and `layout` always hold the same ids in the same order.
#[derive(Debug, Clone)]
pub struct Chart {
    geometry: ChartGeometry,
    options: ChartOptions,
    mode: LayoutMode,
    segments: Vec<Segment>,
    animations: Vec<SegmentAnimation>,
    layout: ChartLayout,
    selection: SelectionState,
}

impl Chart {
    pub fn new(
        segments: Vec<Segment>,
        mode: LayoutMode,
        geometry: ChartGeometry,
        options: ChartOptions,
    ) -> Self {
        let segments = Self::fit_to_layout(segments, &mode);
        let ids: Vec<SegmentId> = segments.iter().map(|s| s.id).collect();
        let layout = ChartLayout::derive(&mode, &ids);
        let animations = segments
            .iter()
            .map(|s| SegmentAnimation::new(options.magnitude_factor(s.value), &options.animation))
            .collect();

        log::info!(
            "Chart mounted with {} segments ({})",
            segments.len(),
            match mode {
                LayoutMode::Equal => "equal spans",
                LayoutMode::Explicit(_) => "explicit angles",
            }
        );

        Self {
            geometry,
            options,
            mode,
            segments,
            animations,
            layout,
            selection: SelectionState::Deselected,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let chart = &config.chart;
        let segments = config
            .segments()
            .iter()
            .enumerate()
            .map(|(i, cfg)| Segment::from_config(SegmentId::from(i), cfg))
            .collect();
        let geometry = ChartGeometry::centered(chart.radius, chart.padding, chart.icon_size);
        let options = ChartOptions {
            scale_max: chart.scale_max,
            lift_offset: chart.lift_offset,
            slider_min: chart.slider.min,
            slider_max: chart.slider.max,
            slider_step: chart.slider.step,
            animation: config.animation_params(),
        };
        Self::new(segments, config.layout_mode(), geometry, options)
    }

    /// An explicit angle list fixes the slot count: missing seeds become
    /// placeholders and surplus seeds are dropped.
    fn fit_to_layout(mut segments: Vec<Segment>, mode: &LayoutMode) -> Vec<Segment> {
        let LayoutMode::Explicit(starts) = mode else {
            return segments;
        };

        if segments.len() > starts.len() {
            log::warn!(
                "Dropping {} seeds with no explicit angle",
                segments.len() - starts.len()
            );
            segments.truncate(starts.len());
        }

        let mut next_id = segments.iter().map(|s| *s.id + 1).max().unwrap_or(0);
        while segments.len() < starts.len() {
            segments.push(Segment::placeholder(SegmentId::from(next_id)));
            next_id += 1;
        }
        segments
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.index_of(id).map(|i| &self.segments[i])
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn animation(&self, id: SegmentId) -> Option<&SegmentAnimation> {
        self.index_of(id).map(|i| &self.animations[i])
    }

    pub fn is_settled(&self) -> bool {
        self.animations.iter().all(SegmentAnimation::is_settled)
    }

    fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    pub fn handle(&mut self, event: ChartEvent) -> bool {
        match event {
            ChartEvent::Tap(id) => !self.on_tap(id).is_empty(),
            ChartEvent::Pointer(point) => !self.on_pointer(point).is_empty(),
            ChartEvent::ValueEdit(value) => self.on_value_edit(value),
        }
    }

    /// Runs the selection transition for `id` and retargets the lift of every
    /// segment it touched before returning.
    pub fn on_tap(&mut self, id: SegmentId) -> SelectionChange {
        if self.index_of(id).is_none() {
            log::debug!("Ignoring tap on unknown segment {}", id);
            return SelectionChange::default();
        }

        let (next, change) = self.selection.tap(id);
        self.apply_selection(next, change);
        log::debug!("Selection {:?} -> {:?}", change.deactivated, change.activated);
        change
    }

    pub fn on_pointer(&mut self, point: Point) -> SelectionChange {
        match self.hit_test(point) {
            Some(id) => self.on_tap(id),
            None => SelectionChange::default(),
        }
    }

    fn apply_selection(&mut self, next: SelectionState, change: SelectionChange) {
        self.selection = next;
        if let Some(index) = change.deactivated.and_then(|id| self.index_of(id)) {
            self.animations[index].retarget_offset(0.0);
        }
        if let Some(index) = change.activated.and_then(|id| self.index_of(id)) {
            self.animations[index].retarget_offset(self.options.lift_offset);
        }
    }

    /// Writes `value` into the selected segment and retargets its magnitude.
    /// Returns false, changing nothing, when no segment is selected.
    pub fn on_value_edit(&mut self, value: f64) -> bool {
        let Some(index) = self.selection.selected().and_then(|id| self.index_of(id)) else {
            log::debug!("Ignoring value edit with no selection");
            return false;
        };
        if !value.is_finite() {
            log::warn!("Ignoring non-finite value edit: {}", value);
            return false;
        }

        self.segments[index].value = value;
        let factor = self.options.magnitude_factor(value);
        self.animations[index].retarget_magnitude(factor);
        true
    }

    /// Which segment's full-radius slot contains `point`, accounting for lift.
    /// The selected segment is tested first since it is drawn on top.
    pub fn hit_test(&self, point: Point) -> Option<SegmentId> {
        let selected = self.selection.selected();
        let mut candidates: Vec<(SegmentId, SegmentSpan, f64)> = self
            .layout
            .entries()
            .iter()
            .zip(&self.animations)
            .map(|(&(id, span), anim)| (id, span, anim.current_offset()))
            .collect();
        candidates.sort_by_key(|&(id, _, _)| Some(id) != selected);

        candidates.into_iter().find_map(|(id, span, offset)| {
            let center = polar(self.geometry.center, offset, span.mid());
            let inside = Circle::new(center, self.geometry.radius).contains(point)
                && span.contains(angle_around(point, center));
            inside.then_some(id)
        })
    }

    /// Drops a segment together with its animation, layout slot and any selection
    /// pointing at it. Equal layouts are re-derived; explicit ones keep their angles.
    pub fn remove_segment(&mut self, id: SegmentId) -> Option<Segment> {
        let index = self.index_of(id)?;

        let (next, _) = self.selection.forget(id);
        self.selection = next;
        self.animations.remove(index);
        let segment = self.segments.remove(index);

        match &self.mode {
            LayoutMode::Equal => {
                let ids: Vec<SegmentId> = self.segments.iter().map(|s| s.id).collect();
                self.layout = ChartLayout::equal(&ids);
            }
            LayoutMode::Explicit(_) => self.layout.remove(id),
        }

        log::debug!("Removed segment {} ('{}')", id, segment.name);
        Some(segment)
    }

    /// Advances every animation by `dt` and returns the resulting frame.
    pub fn tick(&mut self, dt: Duration) -> RenderSnapshot {
        for animation in &mut self.animations {
            animation.advance(dt);
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let segments = self
            .segments
            .iter()
            .zip(&self.animations)
            .zip(self.layout.entries())
            .map(|((segment, animation), &(_, span))| self.frame(segment, animation, span))
            .collect();

        let editor = self.value_editor();
        RenderSnapshot {
            segments,
            labels: self.label_anchors(),
            spokes: self.spokes(),
            selected_id: self.selection.selected(),
            selected_value: editor.as_ref().map(|e| e.value),
            editor,
            settled: self.is_settled(),
        }
    }

    fn frame(
        &self,
        segment: &Segment,
        animation: &SegmentAnimation,
        span: SegmentSpan,
    ) -> SegmentFrame {
        let radius = self.geometry.radius;
        let center = polar(self.geometry.center, animation.current_offset(), span.mid());
        let drawn = span.revealed(animation.reveal_progress());

        SegmentFrame {
            id: segment.id,
            wedge: wedge_path(
                center,
                radius,
                drawn.start,
                drawn.end,
                animation.current_magnitude(),
            ),
            hit: hit_path(center, radius, span.start, span.end),
            fill: segment.color,
            is_active: self.selection.is_active(segment.id),
        }
    }

    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        let distance = self.geometry.label_radius();
        self.segments
            .iter()
            .zip(self.layout.entries())
            .map(|(segment, &(_, span))| LabelAnchor {
                id: segment.id,
                position: polar(self.geometry.center, distance, span.mid()),
                color: segment.color,
                icon: segment.icon,
            })
            .collect()
    }

    pub fn spokes(&self) -> Vec<Spoke> {
        let length = self.geometry.radius + self.geometry.padding;
        self.layout
            .entries()
            .iter()
            .map(|&(_, span)| Spoke {
                from: self.geometry.center,
                to: polar(self.geometry.center, length, span.start),
            })
            .collect()
    }

    /// Slider state for the selected segment; `None` when nothing is selected.
    pub fn value_editor(&self) -> Option<ValueEditor> {
        let segment = self.selection.selected().and_then(|id| self.segment(id))?;
        Some(ValueEditor {
            id: segment.id,
            value: segment.value,
            min: self.options.slider_min,
            max: self.options.slider_max,
            step: self.options.slider_step,
            track_color: segment.color,
            label: format_value(segment.value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    const TOLERANCE: f64 = 1e-9;
    const FRAME: Duration = Duration::from_millis(16);

    fn id(i: usize) -> SegmentId {
        SegmentId::from(i)
    }

    fn life_chart() -> Chart {
        Chart::from_config(&Config::from_preset(Preset::Life))
    }

    fn settle(chart: &mut Chart) -> RenderSnapshot {
        for _ in 0..1000 {
            if chart.is_settled() {
                break;
            }
            chart.tick(FRAME);
        }
        chart.snapshot()
    }

    #[test]
    fn test_life_wheel_scenario() {
        let mut chart = life_chart();
        let values: Vec<f64> = chart.segments().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![10.0, 5.0, 6.5, 7.5, 10.0, 9.3, 8.4, 7.4]);

        chart.on_tap(id(2));
        assert_eq!(chart.selection(), SelectionState::Selected(id(2)));
        let snapshot = chart.snapshot();
        assert_eq!(snapshot.active_count(), 1);
        assert!(snapshot.segment(id(2)).unwrap().is_active);
        assert_eq!(snapshot.selected_id, Some(id(2)));
        assert_eq!(chart.animation(id(2)).unwrap().target_offset(), LIFT_OFFSET);

        assert!(chart.on_value_edit(3.0));
        assert_eq!(chart.segment(id(2)).unwrap().value, 3.0);
        assert!((chart.animation(id(2)).unwrap().target_magnitude() - 0.30).abs() < TOLERANCE);
        assert_eq!(chart.snapshot().selected_value, Some(3.0));

        chart.on_tap(id(2));
        assert_eq!(chart.selection(), SelectionState::Deselected);
        assert_eq!(chart.animation(id(2)).unwrap().target_offset(), 0.0);
        assert_eq!(chart.snapshot().active_count(), 0);
    }

    #[test]
    fn test_double_tap_restores_targets() {
        let mut chart = life_chart();
        let before: Vec<f64> = chart
            .segments()
            .iter()
            .map(|s| chart.animation(s.id).unwrap().target_offset())
            .collect();

        chart.on_tap(id(5));
        chart.tick(FRAME);
        chart.on_tap(id(5));

        let after: Vec<f64> = chart
            .segments()
            .iter()
            .map(|s| chart.animation(s.id).unwrap().target_offset())
            .collect();
        assert_eq!(chart.selection(), SelectionState::Deselected);
        assert_eq!(before, after);
    }

    #[test]
    fn test_reselect_mid_flight() {
        let mut chart = life_chart();
        chart.on_tap(id(1));
        for _ in 0..3 {
            let snapshot = chart.tick(FRAME);
            assert!(snapshot.active_count() <= 1);
        }
        let lifting = chart.animation(id(1)).unwrap().current_offset();
        assert!(lifting > 0.0 && lifting < LIFT_OFFSET);

        chart.on_tap(id(6));
        let snapshot = chart.snapshot();
        assert_eq!(snapshot.active_count(), 1);
        assert!(snapshot.segment(id(6)).unwrap().is_active);
        assert_eq!(chart.animation(id(1)).unwrap().target_offset(), 0.0);
        assert_eq!(chart.animation(id(6)).unwrap().target_offset(), LIFT_OFFSET);
        // the old lift continues from where it was rather than snapping back
        assert_eq!(chart.animation(id(1)).unwrap().current_offset(), lifting);

        for _ in 0..500 {
            assert!(chart.tick(FRAME).active_count() <= 1);
        }
        assert_eq!(chart.animation(id(1)).unwrap().current_offset(), 0.0);
        assert_eq!(chart.animation(id(6)).unwrap().current_offset(), LIFT_OFFSET);
    }

    #[test]
    fn test_value_edit_isolated_to_selection() {
        let mut chart = life_chart();
        let before: Vec<f64> = chart
            .segments()
            .iter()
            .map(|s| chart.animation(s.id).unwrap().target_magnitude())
            .collect();

        chart.on_tap(id(4));
        chart.on_value_edit(1.5);

        for (i, segment) in chart.segments().iter().enumerate() {
            let target = chart.animation(segment.id).unwrap().target_magnitude();
            if segment.id == id(4) {
                assert!((target - 0.15).abs() < TOLERANCE);
            } else {
                assert_eq!(target, before[i]);
            }
        }
    }

    #[test]
    fn test_value_edit_without_selection_is_noop() {
        let mut chart = life_chart();
        let before = chart.snapshot();
        assert!(!chart.on_value_edit(4.0));
        assert!(!chart.handle(ChartEvent::ValueEdit(4.0)));
        assert_eq!(chart.snapshot(), before);
        assert!(chart.value_editor().is_none());
        assert_eq!(before.editor, None);
        assert_eq!(before.selected_value, None);
    }

    #[test]
    fn test_value_edit_rejects_nan() {
        let mut chart = life_chart();
        chart.on_tap(id(0));
        assert!(!chart.on_value_edit(f64::NAN));
        assert_eq!(chart.segment(id(0)).unwrap().value, 10.0);
    }

    #[test]
    fn test_magnitude_animates_to_edit() {
        let mut chart = life_chart();
        chart.on_tap(id(0));
        chart.on_value_edit(5.0);

        let mut previous = chart.animation(id(0)).unwrap().current_magnitude();
        for _ in 0..20 {
            chart.tick(FRAME);
            let current = chart.animation(id(0)).unwrap().current_magnitude();
            assert!(current <= previous && current >= 0.5);
            previous = current;
        }
        assert_eq!(previous, 0.5);
    }

    #[test]
    fn test_value_editor() {
        let mut chart = life_chart();
        chart.on_tap(id(2));
        let editor = chart.value_editor().unwrap();
        assert_eq!(editor.id, id(2));
        assert_eq!(editor.value, 6.5);
        assert_eq!((editor.min, editor.max, editor.step), (1.0, 10.0, 0.1));
        assert_eq!(editor.track_color, chart.segment(id(2)).unwrap().color);
        assert_eq!(editor.label, "6.5");
    }

    #[test]
    fn test_unknown_tap_ignored() {
        let mut chart = life_chart();
        assert!(chart.on_tap(id(42)).is_empty());
        assert_eq!(chart.selection(), SelectionState::Deselected);
    }

    #[test]
    fn test_snapshot_geometry() {
        let chart = life_chart();
        let snapshot = chart.snapshot();
        let center = chart.geometry().center;

        assert_eq!(snapshot.segments.len(), 8);
        assert_eq!(snapshot.spokes.len(), 8);
        assert_eq!(snapshot.labels.len(), 8);
        assert!(snapshot.settled);

        // finance: value 6.5 over 90..135 degrees
        let finance = snapshot.segment(id(2)).unwrap();
        let rim: Vec<Point> = finance.wedge.points().skip(1).collect();
        for p in rim {
            assert!((p.distance(center) - 65.0).abs() < TOLERANCE);
        }
        for p in finance.hit.points().skip(1) {
            assert!((p.distance(center) - WHEEL_RADIUS).abs() < TOLERANCE);
        }

        let label = &snapshot.labels[2];
        assert!((label.position.distance(center) - 154.0).abs() < TOLERANCE);
        assert!((angle_around(label.position, center) - 112.5).abs() < TOLERANCE);
        assert_eq!(label.icon, Some(crate::chart::IconKey::Cash));

        let spoke = snapshot.spokes[2];
        assert!((spoke.to.distance(center) - 130.0).abs() < TOLERANCE);
        assert!((angle_around(spoke.to, center) - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_lift_moves_wedge_along_mid_angle() {
        let mut chart = life_chart();
        chart.on_tap(id(0));
        let snapshot = settle(&mut chart);

        let center = chart.geometry().center;
        let lifted = polar(center, LIFT_OFFSET, 22.5);
        let frame = snapshot.segment(id(0)).unwrap();
        assert_eq!(frame.wedge.points().next(), Some(lifted));
        assert_eq!(frame.hit.points().next(), Some(lifted));
    }

    #[test]
    fn test_pointer_hit_test() {
        let mut chart = life_chart();
        let center = chart.geometry().center;

        // a shrunk wedge still captures taps across its full slot
        chart.on_tap(id(1));
        chart.on_value_edit(1.0);
        settle(&mut chart);
        chart.on_tap(id(1));
        settle(&mut chart);

        let near_rim = polar(center, 95.0, 67.5);
        assert_eq!(chart.hit_test(near_rim), Some(id(1)));
        assert_eq!(chart.hit_test(polar(center, 101.0, 67.5)), None);

        assert!(chart.handle(ChartEvent::Pointer(polar(center, 50.0, 200.0))));
        assert_eq!(chart.selection(), SelectionState::Selected(id(4)));

        // once lifted, the slot follows the wedge outward
        settle(&mut chart);
        let beyond_rim = polar(center, 110.0, 202.5);
        assert_eq!(chart.hit_test(beyond_rim), Some(id(4)));
    }

    #[test]
    fn test_sectors_preset_reveals() {
        let mut chart = Chart::from_config(&Config::from_preset(Preset::Sectors));
        let snapshot = chart.snapshot();
        assert!(!snapshot.settled);
        assert!(snapshot.segments.iter().all(|s| s.wedge.is_empty()));
        assert!(snapshot.segments.iter().all(|s| !s.hit.is_empty()));

        let snapshot = settle(&mut chart);
        assert!(snapshot.segments.iter().all(|s| !s.wedge.is_empty()));
        assert_eq!(
            chart.layout().span(id(7)),
            Some(SegmentSpan::new(315.0, 360.0))
        );
    }

    #[test]
    fn test_explicit_layout_pads_placeholders() {
        let mut config = Config::from_preset(Preset::Sectors);
        config.segments = Some(Preset::Sectors.segments().into_iter().take(5).collect());
        config.chart.animation.reveal_ms = Some(0);

        let chart = Chart::from_config(&config);
        assert_eq!(chart.segments().len(), 8);

        let placeholder = chart.segment(id(6)).unwrap();
        assert!(placeholder.color.is_transparent());
        assert_eq!(placeholder.value, 0.0);

        let snapshot = chart.snapshot();
        let frame = snapshot.segment(id(6)).unwrap();
        assert!(frame.wedge.is_empty());
        assert!(!frame.hit.is_empty());
    }

    #[test]
    fn test_explicit_layout_drops_surplus_seeds() {
        let mut config = Config::from_preset(Preset::Life);
        config.chart.angles = Some(vec![0.0, 120.0, 240.0]);

        let chart = Chart::from_config(&config);
        assert_eq!(chart.segments().len(), 3);
        assert_eq!(chart.layout().len(), 3);
    }

    #[test]
    fn test_unclamped_seed_values() {
        let mut config = Config::from_preset(Preset::Sectors);
        config.chart.animation.reveal_ms = Some(0);
        let chart = Chart::from_config(&config);
        assert_eq!(chart.segment(id(1)).unwrap().value, 2.0);
        assert!((chart.animation(id(1)).unwrap().current_magnitude() - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_remove_selected_segment() {
        let mut chart = life_chart();
        chart.on_tap(id(3));

        let removed = chart.remove_segment(id(3)).unwrap();
        assert_eq!(removed.id, id(3));
        assert_eq!(chart.selection(), SelectionState::Deselected);
        assert!(chart.animation(id(3)).is_none());
        assert!(!chart.on_value_edit(2.0));
        assert_eq!(chart.remove_segment(id(3)), None);

        let snapshot = chart.tick(FRAME);
        assert_eq!(snapshot.segments.len(), 7);
        let total: f64 = chart
            .layout()
            .entries()
            .iter()
            .map(|(_, s)| s.width())
            .sum();
        assert!((total - 360.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_remove_keeps_explicit_angles() {
        let mut chart = Chart::from_config(&Config::from_preset(Preset::Sectors));
        let before: Vec<(SegmentId, SegmentSpan)> = chart
            .layout()
            .entries()
            .iter()
            .copied()
            .filter(|&(entry, _)| entry != id(2))
            .collect();

        assert!(chart.remove_segment(id(2)).is_some());
        assert_eq!(chart.layout().entries(), before.as_slice());
        assert_eq!(chart.layout().span(id(2)), None);
        assert_eq!(
            chart.layout().span(id(3)),
            Some(SegmentSpan::new(135.0, 180.0))
        );
        assert_eq!(chart.segments().len(), 7);
        assert_eq!(chart.snapshot().segments.len(), 7);
    }

    #[test]
    fn test_remove_keeps_other_selection() {
        let mut chart = life_chart();
        chart.on_tap(id(0));
        chart.remove_segment(id(7));
        assert_eq!(chart.selection(), SelectionState::Selected(id(0)));
        assert!(chart.snapshot().segment(id(0)).unwrap().is_active);
    }
}
