use crate::plot::{Curve, Point, Viewport, SCREEN_HEIGHT, SCREEN_WIDTH};
use ansi_term::Colour;

const AXIS_COLOR: [u8; 3] = [0x80, 0xFF, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: [u8; 3],
}

/// ## Character canvas
///
/// The fixed screen rectangle scaled down onto a grid of terminal cells.

pub struct Canvas {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Cell>>,
}

impl Canvas {
    pub fn new(columns: usize, rows: usize) -> Canvas {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Canvas {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let col = (p.x / SCREEN_WIDTH as f64 * self.columns as f64).floor();
        let row = (p.y / SCREEN_HEIGHT as f64 * self.rows as f64).floor();
        if col >= 0.0 && row >= 0.0 && col < self.columns as f64 && row < self.rows as f64 {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }

    fn set(&mut self, p: Point, ch: char, color: [u8; 3]) {
        if let Some((col, row)) = self.cell_of(p) {
            self.cells[row * self.columns + col] = Some(Cell { ch, color });
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col < self.columns && row < self.rows {
            self.cells[row * self.columns + col].map(|c| c.ch)
        } else {
            None
        }
    }

    pub fn axes(&mut self, view: &Viewport) {
        let (col, row) = view.axes(Point::default());
        if let Some(y) = row {
            for x in 0..SCREEN_WIDTH {
                self.set(Point::new(x as f64, y), '─', AXIS_COLOR);
            }
        }
        if let Some(x) = col {
            for y in 0..SCREEN_HEIGHT {
                self.set(Point::new(x, y as f64), '│', AXIS_COLOR);
            }
        }
        if let (Some(x), Some(y)) = (col, row) {
            self.set(Point::new(x, y), '┼', AXIS_COLOR);
        }
    }

    /// Steps along the segment at screen-pixel resolution.
    pub fn line(&mut self, from: Point, to: Point, color: [u8; 3]) {
        let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil();
        let steps = if steps.is_finite() {
            (steps as usize).min(SCREEN_WIDTH * SCREEN_HEIGHT).max(1)
        } else {
            return;
        };
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.set(p, '•', color);
        }
    }

    pub fn curve(&mut self, curve: &Curve, color: [u8; 3]) {
        for (from, to) in curve.segments() {
            self.line(from, to, color);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                match cell {
                    Some(c) => {
                        let [r, g, b] = c.color;
                        out.push_str(&Colour::RGB(r, g, b).paint(c.ch.to_string()).to_string());
                    }
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_cross_in_middle() {
        let mut canvas = Canvas::new(40, 24);
        canvas.axes(&Viewport::default());
        assert_eq!(canvas.get(19, 11), Some('┼'));
        assert_eq!(canvas.get(0, 11), Some('─'));
        assert_eq!(canvas.get(19, 0), Some('│'));
        assert_eq!(canvas.get(0, 0), None);
    }

    #[test]
    fn test_line_is_continuous() {
        let mut canvas = Canvas::new(40, 24);
        canvas.line(Point::new(0.0, 0.0), Point::new(399.0, 0.0), [1, 2, 3]);
        for col in 0..40 {
            assert_eq!(canvas.get(col, 0), Some('•'));
        }
    }

    #[test]
    fn test_off_screen_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.line(Point::new(-100.0, -100.0), Point::new(-1.0, -1.0), [0, 0, 0]);
        assert!(canvas.render().chars().all(|c| c == ' ' || c == '\n'));
    }
}
