//! Number-line drawing.
//!
//! [`render`] turns a [`Figure`] into calls on a [`Surface`], an
//! immediate-mode 2D context with the origin at the top left and `y` growing
//! downwards. The terminal front end paints onto a ratatui canvas; tests use
//! [`Recorder`] to inspect what was drawn.

use crate::interval::Interval;
use crate::neighborhood::Neighborhood;
use crate::util::format_number;

/// Gap between the axis and each horizontal edge
pub const MARGIN: f64 = 40.0;
pub const POINT_RADIUS: f64 = 6.0;
/// Labels sit this far below the axis
pub const LABEL_OFFSET: f64 = 25.0;
/// Padding on each side of a finite interval, as a share of its length
pub const BUFFER_RATIO: f64 = 0.2;
/// Pixels per unit of radius, as a share of the axis width per ten units.
/// Neighborhoods are not drawn to the same scale as finite intervals.
pub const NEIGHBORHOOD_SCALE: f64 = 0.3;
/// Where the closed end of a right-unbounded interval sits, as a share of the width
pub const RIGHT_RAY_ANCHOR: f64 = 0.3;
pub const LEFT_RAY_ANCHOR: f64 = 0.7;
pub const ARROW_LENGTH: f64 = 10.0;
pub const ARROW_HALF_HEIGHT: f64 = 5.0;

pub const AXIS_WIDTH: f64 = 3.0;
pub const SEGMENT_WIDTH: f64 = 6.0;
pub const OUTLINE_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const AXIS_COLOR: Rgb = Rgb(0x34, 0x49, 0x5e);
pub const INTERVAL_COLOR: Rgb = Rgb(0xe7, 0x4c, 0x3c);
pub const NEIGHBORHOOD_COLOR: Rgb = Rgb(0x4e, 0xcd, 0xc4);
pub const LABEL_COLOR: Rgb = Rgb(0x2c, 0x3e, 0x50);
pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D drawing context
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Erase everything drawn so far
    fn clear(&mut self);

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: f64);

    /// Filled disc, optionally outlined with `(color, width)`
    fn circle(&mut self, center: Point, radius: f64, fill: Rgb, outline: Option<(Rgb, f64)>);

    fn polygon(&mut self, points: &[Point], fill: Rgb);

    /// Text horizontally centred on `at.x`, baseline at `at.y`
    fn text(&mut self, at: Point, text: &str, color: Rgb);
}

/// Anything the number line can show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Interval(Interval),
    Neighborhood(Neighborhood),
}

impl From<Interval> for Figure {
    fn from(interval: Interval) -> Self {
        Figure::Interval(interval)
    }
}

impl From<Neighborhood> for Figure {
    fn from(neighborhood: Neighborhood) -> Self {
        Figure::Neighborhood(neighborhood)
    }
}

/// Clear the surface and draw the axis plus the figure
pub fn render<S: Surface + ?Sized>(surface: &mut S, figure: &Figure) {
    surface.clear();

    let width = surface.width();
    let axis_y = surface.height() / 2.0;
    surface.line(
        Point::new(MARGIN, axis_y),
        Point::new(width - MARGIN, axis_y),
        AXIS_COLOR,
        AXIS_WIDTH,
    );

    match figure {
        Figure::Interval(interval) => match (interval.left(), interval.right()) {
            (Some(a), Some(b)) => draw_finite(
                surface,
                f64::from(a),
                f64::from(b),
                interval.left_closed(),
                interval.right_closed(),
            ),
            (Some(a), None) => draw_right_ray(surface, f64::from(a), interval.left_closed()),
            (None, Some(b)) => draw_left_ray(surface, f64::from(b), interval.right_closed()),
            // every variant carries at least one bound
            (None, None) => {}
        },
        Figure::Neighborhood(n) => draw_neighborhood(surface, n),
    }
}

/// Draw an endpoint: solid when closed, white with a coloured rim otherwise
pub fn draw_point<S: Surface + ?Sized>(surface: &mut S, at: Point, closed: bool, color: Rgb) {
    if closed {
        surface.circle(at, POINT_RADIUS, color, None);
    } else {
        surface.circle(at, POINT_RADIUS, WHITE, Some((color, OUTLINE_WIDTH)));
    }
}

fn label<S: Surface + ?Sized>(surface: &mut S, x: f64, value: f64) {
    let y = surface.height() / 2.0 + LABEL_OFFSET;
    surface.text(Point::new(x, y), &format_number(value), LABEL_COLOR);
}

/// Horizontal position of the endpoints of `[a, b]`, padded on both sides
pub fn finite_positions(width: f64, a: f64, b: f64) -> (f64, f64) {
    let axis_width = width - 2.0 * MARGIN;
    let range = b - a;
    let buffer = range * BUFFER_RATIO;
    let total = range + 2.0 * buffer;

    (
        MARGIN + (buffer / total) * axis_width,
        MARGIN + ((buffer + range) / total) * axis_width,
    )
}

fn draw_finite<S: Surface + ?Sized>(
    surface: &mut S,
    a: f64,
    b: f64,
    left_closed: bool,
    right_closed: bool,
) {
    let y = surface.height() / 2.0;
    let (start, end) = finite_positions(surface.width(), a, b);

    surface.line(
        Point::new(start, y),
        Point::new(end, y),
        INTERVAL_COLOR,
        SEGMENT_WIDTH,
    );
    draw_point(surface, Point::new(start, y), left_closed, INTERVAL_COLOR);
    draw_point(surface, Point::new(end, y), right_closed, INTERVAL_COLOR);

    label(surface, start, a);
    label(surface, end, b);
}

/// Pixel length of a neighborhood radius on a surface `width` wide
pub fn neighborhood_radius_px(width: f64, radius: f64) -> f64 {
    (radius / 10.0) * (width - 2.0 * MARGIN) * NEIGHBORHOOD_SCALE
}

fn draw_neighborhood<S: Surface + ?Sized>(surface: &mut S, n: &Neighborhood) {
    let y = surface.height() / 2.0;
    let center = surface.width() / 2.0;
    let radius = neighborhood_radius_px(surface.width(), n.radius);

    surface.line(
        Point::new(center - radius, y),
        Point::new(center + radius, y),
        NEIGHBORHOOD_COLOR,
        SEGMENT_WIDTH,
    );
    draw_point(surface, Point::new(center, y), !n.reduced, NEIGHBORHOOD_COLOR);
    draw_point(surface, Point::new(center - radius, y), false, NEIGHBORHOOD_COLOR);
    draw_point(surface, Point::new(center + radius, y), false, NEIGHBORHOOD_COLOR);

    label(surface, center - radius, n.left());
    label(surface, center, n.center);
    label(surface, center + radius, n.right());
}

fn draw_right_ray<S: Surface + ?Sized>(surface: &mut S, a: f64, left_closed: bool) {
    let y = surface.height() / 2.0;
    let start = surface.width() * RIGHT_RAY_ANCHOR;
    let tip = surface.width() - MARGIN;

    surface.line(
        Point::new(start, y),
        Point::new(tip, y),
        INTERVAL_COLOR,
        SEGMENT_WIDTH,
    );
    draw_point(surface, Point::new(start, y), left_closed, INTERVAL_COLOR);
    surface.polygon(
        &[
            Point::new(tip, y),
            Point::new(tip - ARROW_LENGTH, y - ARROW_HALF_HEIGHT),
            Point::new(tip - ARROW_LENGTH, y + ARROW_HALF_HEIGHT),
        ],
        INTERVAL_COLOR,
    );

    label(surface, start, a);
}

fn draw_left_ray<S: Surface + ?Sized>(surface: &mut S, b: f64, right_closed: bool) {
    let y = surface.height() / 2.0;
    let end = surface.width() * LEFT_RAY_ANCHOR;
    let tip = MARGIN;

    surface.line(
        Point::new(tip, y),
        Point::new(end, y),
        INTERVAL_COLOR,
        SEGMENT_WIDTH,
    );
    draw_point(surface, Point::new(end, y), right_closed, INTERVAL_COLOR);
    surface.polygon(
        &[
            Point::new(tip, y),
            Point::new(tip + ARROW_LENGTH, y - ARROW_HALF_HEIGHT),
            Point::new(tip + ARROW_LENGTH, y + ARROW_HALF_HEIGHT),
        ],
        INTERVAL_COLOR,
    );

    label(surface, end, b);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb,
        outline: Option<(Rgb, f64)>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
    },
    Text {
        at: Point,
        text: String,
        color: Rgb,
    },
}

/// Surface that keeps the operations issued since the last clear
#[derive(Debug, Clone)]
pub struct Recorder {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Centers of the drawn points and whether each one is solid
    pub fn points(&self) -> Vec<(Point, bool)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle {
                    center, outline, ..
                } => Some((*center, outline.is_none())),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arrows(&self) -> Vec<&[Point]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Rgb, outline: Option<(Rgb, f64)>) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn polygon(&mut self, points: &[Point], fill: Rgb) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            fill,
        });
    }

    fn text(&mut self, at: Point, text: &str, color: Rgb) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 600.0;
    const H: f64 = 150.0;

    fn draw(figure: Figure) -> Recorder {
        let mut surface = Recorder::new(W, H);
        render(&mut surface, &figure);
        surface
    }

    /// Fill and outline of every drawn point, in drawing order
    fn point_styles(rec: &Recorder) -> Vec<(Rgb, Option<(Rgb, f64)>)> {
        rec.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { fill, outline, .. } => Some((*fill, *outline)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_closed_interval_two_solid_points() {
        let rec = draw(Interval::Closed { left: 2, right: 5 }.into());

        let points = rec.points();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|(_, solid)| *solid));
        assert_eq!(rec.labels(), vec!["2", "5"]);
        assert!(rec.arrows().is_empty());
    }

    #[test]
    fn test_finite_interval_is_padded() {
        let (start, end) = finite_positions(W, 2.0, 5.0);
        // axis is 520 wide; padding is 0.6 units on each side of 3
        assert!((start - (40.0 + 520.0 / 7.0)).abs() < 1e-9);
        assert!((end - (40.0 + 520.0 * 6.0 / 7.0)).abs() < 1e-9);
        assert!(start > MARGIN);
        assert!(end < W - MARGIN);
    }

    #[test]
    fn test_open_endpoints_are_hollow() {
        let rec = draw(Interval::SemiLeft { left: -1, right: 2 }.into());

        let points = rec.points();
        assert!(points[0].1, "left end of [a,b) is solid");
        assert!(!points[1].1, "right end of [a,b) is hollow");
        assert!(points[0].0.x < points[1].0.x);

        assert_eq!(
            point_styles(&rec),
            vec![
                (INTERVAL_COLOR, None),
                (WHITE, Some((INTERVAL_COLOR, OUTLINE_WIDTH))),
            ]
        );
    }

    #[test]
    fn test_reduced_neighborhood() {
        let n = Neighborhood {
            center: 3.0,
            radius: 2.0,
            reduced: true,
        };
        let rec = draw(n.into());

        let points = rec.points();
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|(_, solid)| !*solid));
        assert_eq!(points[0].0.x, W / 2.0);
        assert_eq!(rec.labels(), vec!["1", "3", "5"]);

        let hollow = (WHITE, Some((NEIGHBORHOOD_COLOR, OUTLINE_WIDTH)));
        assert_eq!(point_styles(&rec), vec![hollow; 3]);
    }

    #[test]
    fn test_symmetric_neighborhood_has_solid_center() {
        let n = Neighborhood {
            center: 0.0,
            radius: 1.5,
            reduced: false,
        };
        let rec = draw(n.into());

        let points = rec.points();
        assert!(points[0].1);
        assert!(!points[1].1 && !points[2].1);
        assert_eq!(point_styles(&rec)[0], (NEIGHBORHOOD_COLOR, None));

        let radius_px = neighborhood_radius_px(W, 1.5);
        assert!((points[1].0.x - (W / 2.0 - radius_px)).abs() < 1e-9);
        assert!((points[2].0.x - (W / 2.0 + radius_px)).abs() < 1e-9);
        assert_eq!(rec.labels(), vec!["-1.5", "0", "1.5"]);
    }

    #[test]
    fn test_right_ray() {
        let rec = draw(
            Interval::InfRight {
                left: 4,
                left_closed: true,
            }
            .into(),
        );

        let points = rec.points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], (Point::new(W * 0.3, H / 2.0), true));
        assert_eq!(rec.labels(), vec!["4"]);

        let arrows = rec.arrows();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0][0], Point::new(W - MARGIN, H / 2.0));
    }

    #[test]
    fn test_left_ray() {
        let rec = draw(
            Interval::InfLeft {
                right: -2,
                right_closed: false,
            }
            .into(),
        );

        let points = rec.points();
        assert_eq!(points, vec![(Point::new(W * 0.7, H / 2.0), false)]);
        assert_eq!(rec.labels(), vec!["-2"]);
        assert_eq!(rec.arrows()[0][0], Point::new(MARGIN, H / 2.0));
    }

    #[test]
    fn test_render_clears_first() {
        let mut surface = Recorder::new(W, H);
        render(&mut surface, &Interval::Open { left: 0, right: 1 }.into());
        render(&mut surface, &Interval::Open { left: 0, right: 1 }.into());

        assert_eq!(surface.ops()[0], DrawOp::Clear);
        let clears = surface
            .ops()
            .iter()
            .filter(|op| **op == DrawOp::Clear)
            .count();
        assert_eq!(clears, 1);
        assert_eq!(surface.points().len(), 2);
    }

    #[test]
    fn test_axis_spans_margins() {
        let rec = draw(Interval::Open { left: 0, right: 1 }.into());
        assert_eq!(
            rec.ops()[1],
            DrawOp::Line {
                from: Point::new(MARGIN, H / 2.0),
                to: Point::new(W - MARGIN, H / 2.0),
                color: AXIS_COLOR,
                width: AXIS_WIDTH,
            }
        );
    }
}
