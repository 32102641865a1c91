use super::{Point, Viewport, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::mach::{Instruction, Runtime, Vars};

/// ## Trace cursor
///
/// A screen position that never leaves the screen rectangle.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    x: f64,
    y: f64,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor {
            x: (SCREEN_WIDTH / 2) as f64,
            y: (SCREEN_HEIGHT / 2) as f64,
        }
    }
}

impl Cursor {
    pub fn new(x: f64, y: f64) -> Cursor {
        let mut cursor = Cursor { x: 0.0, y: 0.0 };
        cursor.nudge(x, y);
        cursor
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.x = (self.x + dx).max(0.0).min((SCREEN_WIDTH - 1) as f64);
        self.y = (self.y + dy).max(0.0).min((SCREEN_HEIGHT - 1) as f64);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    pub x: f64,
    /// `None` when the equation has no finite value at `x`.
    pub y: Option<f64>,
}

/// Power of ten a little wider than one pixel column.
pub fn trace_unit(view: &Viewport) -> f64 {
    let exponent = (view.x_span() / SCREEN_WIDTH as f64).log10().ceil();
    10f64.powi(exponent as i32)
}

/// Evaluates the equation at the cursor's domain x.
pub fn trace(
    runtime: &Runtime,
    instructions: &[Instruction],
    view: &Viewport,
    vars: &Vars,
    cursor: &Cursor,
    snap: bool,
) -> Trace {
    let mut x = view.to_domain(cursor.position()).x;
    if snap {
        let unit = trace_unit(view);
        if unit.is_finite() && unit > 0.0 {
            x = (x / unit).round() * unit;
        }
    }
    trace_at(runtime, instructions, vars, x)
}

/// Evaluates the equation at a given domain x.
pub fn trace_at(runtime: &Runtime, instructions: &[Instruction], vars: &Vars, x: f64) -> Trace {
    let y = match runtime.execute(instructions, &vars.scope(x)) {
        Ok(y) if y.is_finite() => Some(y),
        _ => None,
    };
    Trace { x, y }
}
