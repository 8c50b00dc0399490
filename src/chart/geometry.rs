use kurbo::{SvgArc, Vec2};
use std::fmt;

pub use kurbo::Point;

/// Angular spans are compared against this to absorb float noise from layout math.
const ANGLE_EPSILON: f64 = 1e-9;

/// Point at `radius` from `center`, `angle_deg` degrees clockwise from +x in screen space.
pub fn polar(center: Point, radius: f64, angle_deg: f64) -> Point {
    center + Vec2::from_angle(angle_deg.to_radians()) * radius
}

/// Screen-space angle of `point` around `center`, normalized to `[0, 360)`.
pub fn angle_around(point: Point, center: Point) -> f64 {
    (point - center).atan2().to_degrees().rem_euclid(360.0)
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[derive(Debug, Clone, Copy)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo(SvgArc),
    Close,
}

impl PartialEq for PathCommand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MoveTo(a), Self::MoveTo(b)) | (Self::LineTo(a), Self::LineTo(b)) => a == b,
            (Self::ArcTo(a), Self::ArcTo(b)) => {
                a.from == b.from
                    && a.to == b.to
                    && a.radii == b.radii
                    && a.x_rotation == b.x_rotation
                    && a.large_arc == b.large_arc
                    && a.sweep == b.sweep
            }
            (Self::Close, Self::Close) => true,
            _ => false,
        }
    }
}

/// A closed outline made of SVG-style path commands.
///
/// An empty command list is the degenerate path: it describes nothing and
/// renders as an empty `d` attribute. Arcs are kept as [`SvgArc`] rather than
/// flattened to cubics so the large-arc flag survives into the path data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WedgePath {
    commands: Vec<PathCommand>,
}

impl WedgePath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the outline passes through, in command order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ArcTo(arc) => Some(arc.to),
            PathCommand::Close => None,
        })
    }
}

impl fmt::Display for WedgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M{:.3},{:.3}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{:.3},{:.3}", p.x, p.y)?,
                PathCommand::ArcTo(arc) => write!(
                    f,
                    "A{:.3},{:.3} {} {} {} {:.3},{:.3}",
                    arc.radii.x,
                    arc.radii.y,
                    arc.x_rotation.to_degrees(),
                    u8::from(arc.large_arc),
                    u8::from(arc.sweep),
                    arc.to.x,
                    arc.to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Spans strictly wider than a half turn need the large-arc variant; exactly 180° stays minor.
pub fn is_large_arc(start_deg: f64, end_deg: f64) -> bool {
    end_deg - start_deg > 180.0
}

/// Wedge outline whose rim sits at `radius * magnitude_factor`.
pub fn wedge_path(
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    magnitude_factor: f64,
) -> WedgePath {
    outline(center, radius * magnitude_factor, start_deg, end_deg)
}

/// Full-radius outline of the same slot, used for input capture regardless of magnitude.
pub fn hit_path(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> WedgePath {
    outline(center, radius, start_deg, end_deg)
}

fn outline(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> WedgePath {
    let width = end_deg - start_deg;
    let degenerate = !is_finite(center)
        || !radius.is_finite()
        || !width.is_finite()
        || radius <= 0.0
        || width <= ANGLE_EPSILON;
    if degenerate {
        return WedgePath::empty();
    }

    let start = polar(center, radius, start_deg);
    let mut commands = vec![PathCommand::MoveTo(center), PathCommand::LineTo(start)];

    // A single arc whose endpoints coincide draws nothing, so a full turn is split in two.
    if width >= 360.0 - ANGLE_EPSILON {
        let half = polar(center, radius, start_deg + 180.0);
        commands.push(arc_to(start, half, radius, false));
        commands.push(arc_to(half, start, radius, false));
    } else {
        let end = polar(center, radius, end_deg);
        commands.push(arc_to(start, end, radius, is_large_arc(start_deg, end_deg)));
    }
    commands.push(PathCommand::Close);

    WedgePath { commands }
}

/// Clockwise circular arc from `from` to `to`.
fn arc_to(from: Point, to: Point, radius: f64, large_arc: bool) -> PathCommand {
    PathCommand::ArcTo(SvgArc {
        from,
        to,
        radii: Vec2::new(radius, radius),
        x_rotation: 0.0,
        large_arc,
        sweep: true,
    })
}
