//! Rendering node trees into a `ratatui` buffer.
//!
//! Scene space is y-up with fractional coordinates; the buffer is y-down in
//! whole cells.  A [`Placement`] ties the two together: it names the buffer
//! cell where scene `x = 0` meets the scene's top edge (`y = height`).

use ratatui::buffer::Buffer;
use ratatui::style::Color as TermColor;
use ratatui::symbols::{self, line};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::color::Color;
use crate::geometry::{Bounds, Vec2};
use crate::label::{Label, TextAlign};
use crate::node::{Node, NodeKind};
use crate::shape::{self, Shape};

/// Where a scene of a given height sits in buffer cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Buffer column of scene `x = 0`.
    pub left: i32,
    /// Buffer row whose top edge is scene `y = height`.
    pub top: i32,
    /// Scene height in units (one unit per row).
    pub height: f32,
}

impl Placement {
    pub fn new(left: i32, top: i32, height: f32) -> Self {
        Self { left, top, height }
    }

    /// Column whose left edge is at scene `x`.
    pub fn col_for(&self, x: f32) -> i32 {
        self.left + x.round() as i32
    }

    /// Row whose top edge is at scene `y`.
    pub fn row_for(&self, y: f32) -> i32 {
        self.top + (self.height - y).round() as i32
    }

    /// Scene coordinates of the center of a buffer cell.
    pub fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        Vec2::new(
            (col - self.left) as f32 + 0.5,
            self.height - (row - self.top) as f32 - 0.5,
        )
    }

    fn cells(&self, bounds: Bounds) -> CellRect {
        CellRect {
            x0: self.col_for(bounds.left()),
            x1: self.col_for(bounds.right()),
            y0: self.row_for(bounds.top()),
            y1: self.row_for(bounds.bottom()),
        }
    }
}

/// A half-open range of buffer cells; may extend past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl CellRect {
    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x0 && col < self.x1 && row >= self.y0 && row < self.y1
    }

    fn intersect(&self, other: &CellRect) -> CellRect {
        CellRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }
}

/// Paints nodes into a buffer, never writing outside its clip.
pub struct Painter<'a> {
    buf: &'a mut Buffer,
    placement: Placement,
    clip: CellRect,
}

impl<'a> Painter<'a> {
    /// A painter clipped to the whole buffer.
    pub fn new(buf: &'a mut Buffer, placement: Placement) -> Self {
        let area = buf.area;
        let clip = CellRect {
            x0: area.x as i32,
            y0: area.y as i32,
            x1: area.right() as i32,
            y1: area.bottom() as i32,
        };
        Self {
            buf,
            placement,
            clip,
        }
    }

    /// Restrict painting to the cells of `area`.
    pub fn with_clip(mut self, area: ratatui::layout::Rect) -> Self {
        let rect = CellRect {
            x0: area.x as i32,
            y0: area.y as i32,
            x1: area.right() as i32,
            y1: area.bottom() as i32,
        };
        self.clip = self.clip.intersect(&rect);
        self
    }

    /// A painter that additionally clips to `bounds`, given in scene space.
    pub fn clipped(&mut self, bounds: Bounds) -> Painter<'_> {
        let clip = self.clip.intersect(&self.placement.cells(bounds));
        Painter {
            buf: &mut *self.buf,
            placement: self.placement,
            clip,
        }
    }

    /// Paint `node` and its subtree; `origin` is the parent's scene position.
    pub fn paint<B>(&mut self, node: &Node<B>, origin: Vec2) {
        if !node.is_visible() {
            return;
        }
        let origin = origin + node.position();
        match node.kind() {
            NodeKind::Label(label) => self.paint_label(label, origin),
            NodeKind::Draw(list) => {
                for shape in list.shapes() {
                    self.paint_shape(shape, origin);
                }
            }
            NodeKind::Group | NodeKind::HitRegion(_) => {}
        }
        for child in node.children() {
            self.paint(child, origin);
        }
    }

    fn paint_label(&mut self, label: &Label, origin: Vec2) {
        let Some(fg) = label.color().to_terminal() else {
            return;
        };
        let bounds = label.bounds().translate(origin);
        for (i, text) in label.lines().iter().enumerate() {
            let line_top = bounds.top() - i as f32 * label.font_size();
            let line_width = text.width() as f32;
            let start = match label.alignment() {
                TextAlign::Left => bounds.left(),
                TextAlign::Right => bounds.right() - line_width,
                TextAlign::Center => bounds.left() + (bounds.size.width - line_width) / 2.0,
            };

            let row = self.placement.row_for(line_top);
            let mut col = self.placement.col_for(start);
            let mut encoded = [0u8; 4];
            for ch in text.chars() {
                let width = ch.width().unwrap_or(0);
                if width == 0 {
                    continue;
                }
                self.put(col, row, ch.encode_utf8(&mut encoded), fg);
                col += width as i32;
            }
        }
    }

    fn paint_shape(&mut self, shape: &Shape, origin: Vec2) {
        match shape {
            Shape::Polygon {
                points,
                fill,
                border_width,
                border_color,
            } => {
                let points: Vec<Vec2> = points.iter().map(|p| *p + origin).collect();
                let cells = self.placement.cells(shape.bounds().translate(origin));
                if let Some(bg) = fill.to_terminal() {
                    let visible = cells.intersect(&self.clip);
                    for row in visible.y0..visible.y1 {
                        for col in visible.x0..visible.x1 {
                            let center = self.placement.cell_center(col, row);
                            if shape::polygon_contains(&points, center) {
                                self.put_bg(col, row, bg);
                            }
                        }
                    }
                }
                if *border_width > 0.0 && !border_color.is_transparent() {
                    if shape::is_axis_aligned_rect(&points) {
                        self.draw_box(cells, *border_width, *border_color);
                    } else {
                        for (i, from) in points.iter().enumerate() {
                            let to = points[(i + 1) % points.len()];
                            self.draw_line(*from, to, *border_width, *border_color);
                        }
                    }
                }
            }
            Shape::Segment {
                from,
                to,
                width,
                color,
            } => self.draw_line(*from + origin, *to + origin, *width, *color),
        }
    }

    fn draw_box(&mut self, cells: CellRect, width: f32, color: Color) {
        let Some(fg) = color.to_terminal() else {
            return;
        };
        if cells.is_empty() {
            return;
        }
        let set = line_set(width);
        let (right, bottom) = (cells.x1 - 1, cells.y1 - 1);
        for col in cells.x0..cells.x1 {
            self.put(col, cells.y0, set.horizontal, fg);
            self.put(col, bottom, set.horizontal, fg);
        }
        for row in cells.y0..cells.y1 {
            self.put(cells.x0, row, set.vertical, fg);
            self.put(right, row, set.vertical, fg);
        }
        self.put(cells.x0, cells.y0, set.top_left, fg);
        self.put(right, cells.y0, set.top_right, fg);
        self.put(cells.x0, bottom, set.bottom_left, fg);
        self.put(right, bottom, set.bottom_right, fg);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        if width <= 0.0 {
            return;
        }
        let Some(fg) = color.to_terminal() else {
            return;
        };
        let set = line_set(width);
        let p = self.placement;

        if from.y == to.y {
            let row = p.row_for(from.y);
            for col in p.col_for(from.x.min(to.x))..p.col_for(from.x.max(to.x)) {
                self.put(col, row, set.horizontal, fg);
            }
        } else if from.x == to.x {
            let col = p.col_for(from.x);
            for row in p.row_for(from.y.max(to.y))..p.row_for(from.y.min(to.y)) {
                self.put(col, row, set.vertical, fg);
            }
        } else {
            let delta = to - from;
            let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
            for i in 0..=(steps as i32) {
                let point = from + delta * (i as f32 / steps);
                let (col, row) = (p.col_for(point.x), p.row_for(point.y));
                self.put(col, row, symbols::DOT, fg);
            }
        }
    }

    fn put(&mut self, col: i32, row: i32, symbol: &str, fg: TermColor) {
        if !self.clip.contains(col, row) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
            cell.set_symbol(symbol).set_fg(fg);
        }
    }

    fn put_bg(&mut self, col: i32, row: i32, bg: TermColor) {
        if !self.clip.contains(col, row) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
            cell.set_bg(bg);
        }
    }
}

/// Box-drawing glyphs for one stroke weight.
struct Glyphs {
    horizontal: &'static str,
    vertical: &'static str,
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
}

fn line_set(width: f32) -> Glyphs {
    let set = if width >= 2.0 { line::THICK } else { line::NORMAL };
    Glyphs {
        horizontal: set.horizontal,
        vertical: set.vertical,
        top_left: set.top_left,
        top_right: set.top_right,
        bottom_left: set.bottom_left,
        bottom_right: set.bottom_right,
    }
}
