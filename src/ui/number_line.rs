use entornos::render::{
    render, DrawOp, Figure, Point, Recorder, Rgb, Surface, AXIS_COLOR, LABEL_COLOR, WHITE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

const SOLID_POINT: &str = "●";
const HOLLOW_POINT: &str = "○";

/// Number line drawn on a braille canvas. The figure is first drawn onto a
/// virtual `width` x `height` surface and the recorded operations are then
/// replayed onto the terminal grid.
pub struct NumberLine<'a> {
    figure: Option<Figure>,
    width: f64,
    height: f64,
    block: Option<Block<'a>>,
}

impl<'a> NumberLine<'a> {
    pub fn new(figure: Option<Figure>, width: f64, height: f64) -> Self {
        Self {
            figure,
            width,
            height,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Operations for the current figure, empty when there is nothing to show
    pub fn ops(&self) -> Vec<DrawOp> {
        let mut recorder = Recorder::new(self.width, self.height);
        match &self.figure {
            Some(figure) => render(&mut recorder, figure),
            None => recorder.clear(),
        }
        recorder.ops().to_vec()
    }
}

/// Terminal colour for a surface colour. The dark label and axis colours
/// would vanish on a dark terminal, so they map to greys.
fn terminal_color(color: Rgb) -> Color {
    match color {
        LABEL_COLOR => Color::Gray,
        AXIS_COLOR => Color::DarkGray,
        WHITE => Color::White,
        Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

fn flip(height: f64, p: Point) -> (f64, f64) {
    (p.x, height - p.y)
}

/// Left edge for `text` so that it is centred on `x`
fn centered_x(x: f64, text: &str, cell_width: f64) -> f64 {
    x - text.width() as f64 * cell_width / 2.0
}

fn draw_line(ctx: &mut Context, height: f64, from: Point, to: Point, color: Rgb) {
    let (x1, y1) = flip(height, from);
    let (x2, y2) = flip(height, to);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color: terminal_color(color),
    });
}

fn paint(ctx: &mut Context, ops: &[DrawOp], height: f64, cell_width: f64) {
    for op in ops {
        match op {
            DrawOp::Clear => {}
            DrawOp::Line {
                from, to, color, ..
            } => draw_line(ctx, height, *from, *to, *color),
            DrawOp::Polygon { points, fill } => {
                for (i, from) in points.iter().enumerate() {
                    let to = points[(i + 1) % points.len()];
                    draw_line(ctx, height, *from, to, *fill);
                }
            }
            DrawOp::Circle {
                center,
                fill,
                outline,
                ..
            } => {
                let (glyph, color) = match outline {
                    Some((color, _)) => (HOLLOW_POINT, *color),
                    None => (SOLID_POINT, *fill),
                };
                let (x, y) = flip(height, *center);
                ctx.print(
                    centered_x(x, glyph, cell_width),
                    y,
                    Span::styled(glyph, Style::default().fg(terminal_color(color))),
                );
            }
            DrawOp::Text { at, text, color } => {
                let (x, y) = flip(height, *at);
                ctx.print(
                    centered_x(x, text, cell_width),
                    y,
                    Span::styled(text.clone(), Style::default().fg(terminal_color(*color))),
                );
            }
        }
    }
}

impl Widget for NumberLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ops = self.ops();
        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        let cell_width = self.width / f64::from(inner.width.max(1));
        let height = self.height;

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(|ctx| paint(ctx, &ops, height, cell_width));
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}
