use super::controller::ChartGeometry;
use super::model::{LabelAnchor, RenderSnapshot, SegmentFrame, Spoke, ValueEditor};
use crate::theme::{Color, Theme};
use std::fmt::{self, Write};

const EDITOR_HEIGHT: f64 = 90.0;
const SLIDER_WIDTH: f64 = 300.0;
const THUMB_RADIUS: f64 = 8.0;

struct SegmentRenderer<'a> {
    frame: &'a SegmentFrame,
}

impl<'a> SegmentRenderer<'a> {
    fn new(frame: &'a SegmentFrame) -> Self {
        Self { frame }
    }

    fn draw_wedge(&self, out: &mut String, theme: &Theme) -> fmt::Result {
        let state = SegmentState::resolve(self.frame);
        match state {
            SegmentState::Empty => write!(
                out,
                r#"<path class="wedge empty" data-segment="{}" d="{}" fill="none" stroke="{}" stroke-dasharray="4 4"/>"#,
                self.frame.id, self.frame.hit, theme.placeholder_stroke
            )?,
            SegmentState::Active | SegmentState::Idle => write!(
                out,
                r#"<path class="wedge{}" data-segment="{}" d="{}"{}/>"#,
                if state == SegmentState::Active { " active" } else { "" },
                self.frame.id,
                self.frame.wedge,
                fill_attrs(self.frame.fill)
            )?,
        }
        out.push('\n');
        Ok(())
    }

    fn draw_hit_region(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            r#"<path class="hit" data-segment="{}" d="{}" fill="transparent"/>"#,
            self.frame.id, self.frame.hit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    Empty,
    Active,
    Idle,
}

impl SegmentState {
    /// 1. Empty: nothing visible to fill (placeholder slot or zero magnitude)
    /// 2. Active: selected and lifted
    /// 3. Idle
    fn resolve(frame: &SegmentFrame) -> Self {
        if frame.wedge.is_empty() && frame.fill.is_transparent() {
            Self::Empty
        } else if frame.is_active {
            Self::Active
        } else {
            Self::Idle
        }
    }
}

fn fill_attrs(color: Color) -> String {
    if color.opacity() < 1.0 && !color.is_transparent() {
        format!(r#" fill="{}" fill-opacity="{:.3}""#, color, color.opacity())
    } else {
        format!(r#" fill="{}""#, color)
    }
}

/// Serializes one frame as a standalone SVG document. The wheel occupies the top
/// square; the value editor, when present, is drawn in a strip beneath it.
pub fn render_svg(
    snapshot: &RenderSnapshot,
    geometry: &ChartGeometry,
    theme: &Theme,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    draw(&mut out, snapshot, geometry, theme)?;
    Ok(out)
}

pub fn draw(
    out: &mut String,
    snapshot: &RenderSnapshot,
    geometry: &ChartGeometry,
    theme: &Theme,
) -> fmt::Result {
    let width = geometry.canvas_size();
    let height = width + EDITOR_HEIGHT;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = width,
        h = height
    )?;

    // the active wedge is painted last so its lift overlaps its neighbours
    let (active, idle): (Vec<&SegmentFrame>, Vec<&SegmentFrame>) =
        snapshot.segments.iter().partition(|s| s.is_active);
    for frame in idle.iter().chain(&active) {
        SegmentRenderer::new(frame).draw_wedge(out, theme)?;
    }
    for spoke in &snapshot.spokes {
        draw_spoke(out, spoke, theme)?;
    }
    for frame in idle.iter().chain(&active) {
        SegmentRenderer::new(frame).draw_hit_region(out)?;
    }
    for label in &snapshot.labels {
        draw_label(out, label, geometry)?;
    }
    if let Some(editor) = &snapshot.editor {
        draw_editor(out, editor, width, theme)?;
    }

    writeln!(out, "</svg>")
}

fn draw_spoke(out: &mut String, spoke: &Spoke, theme: &Theme) -> fmt::Result {
    writeln!(
        out,
        r#"<line class="spoke" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="1"/>"#,
        spoke.from.x, spoke.from.y, spoke.to.x, spoke.to.y, theme.spoke
    )
}

fn draw_label(out: &mut String, label: &LabelAnchor, geometry: &ChartGeometry) -> fmt::Result {
    let Some(icon) = label.icon else {
        return Ok(());
    };
    writeln!(
        out,
        r#"<circle class="label" data-segment="{}" data-icon="{}" cx="{:.3}" cy="{:.3}" r="{:.3}"{}/>"#,
        label.id,
        icon,
        label.position.x,
        label.position.y,
        geometry.icon_size / 2.0,
        fill_attrs(label.color)
    )
}

fn draw_editor(out: &mut String, editor: &ValueEditor, width: f64, theme: &Theme) -> fmt::Result {
    let top = width;
    let (left, right) = ((width - SLIDER_WIDTH) / 2.0, (width + SLIDER_WIDTH) / 2.0);
    let track_y = top + 60.0;
    let range = editor.max - editor.min;
    let t = if range > 0.0 {
        ((editor.value - editor.min) / range).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let thumb_x = left + SLIDER_WIDTH * t;

    writeln!(
        out,
        r#"<text class="value" x="{:.3}" y="{:.3}" text-anchor="middle" font-size="24" font-weight="500" fill="{}">{}</text>"#,
        width / 2.0,
        top + 30.0,
        theme.text,
        editor.label
    )?;
    writeln!(
        out,
        r#"<line class="track-max" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="4"/>"#,
        thumb_x, track_y, right, track_y, theme.track_inactive
    )?;
    writeln!(
        out,
        r#"<line class="track-min" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="4"/>"#,
        left, track_y, thumb_x, track_y, editor.track_color
    )?;
    writeln!(
        out,
        r#"<circle class="thumb" data-segment="{}" cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}"/>"#,
        editor.id, thumb_x, track_y, THUMB_RADIUS, theme.text
    )
}
