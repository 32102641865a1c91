use log::warn;

/// Screen columns, numbered `0..SCREEN_WIDTH`.
pub const SCREEN_WIDTH: usize = 400;
/// Screen rows, numbered `0..SCREEN_HEIGHT` from the top.
pub const SCREEN_HEIGHT: usize = 240;

const SXMIN: f64 = 0.0;
const SXMAX: f64 = (SCREEN_WIDTH - 1) as f64;
const SYMIN: f64 = (SCREEN_HEIGHT - 1) as f64;
const SYMAX: f64 = 0.0;

/// Smallest span either axis may be zoomed down to.
pub const MIN_SPAN: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Maps `val` from `[min, max]` onto `[to_min, to_max]`.
pub fn interpolate(val: f64, min: f64, max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + (val - min) * (to_max - to_min) / (max - min)
}

/// ## Viewport transform
///
/// The domain rectangle currently shown on the fixed screen rectangle.
/// Screen y grows downward, domain y grows upward.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport::new(-5.0, 5.0, -3.0, 3.0)
    }
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Viewport {
        Viewport {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn reset(&mut self) {
        *self = Viewport::default();
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point {
            x: interpolate(p.x, self.xmin, self.xmax, SXMIN, SXMAX),
            y: interpolate(p.y, self.ymin, self.ymax, SYMIN, SYMAX),
        }
    }

    pub fn to_domain(&self, p: Point) -> Point {
        Point {
            x: interpolate(p.x, SXMIN, SXMAX, self.xmin, self.xmax),
            y: interpolate(p.y, SYMIN, SYMAX, self.ymin, self.ymax),
        }
    }

    /// Domain x of a pixel column.
    pub fn column_to_x(&self, column: usize) -> f64 {
        interpolate(column as f64, SXMIN, SXMAX, self.xmin, self.xmax)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    /// Pans by a fraction of the current span, as a thumbstick does.
    pub fn pan_by_stick(&mut self, dx: f64, dy: f64, rate: f64) {
        let dx = rate * (self.xmax - self.xmin) * dx;
        let dy = rate * (self.ymax - self.ymin) * dy;
        self.pan(dx, dy);
    }

    pub fn zoom_in(&mut self, factor: f64) -> bool {
        if !Viewport::valid_factor(factor) {
            return false;
        }
        self.rescale(1.0 / factor)
    }

    pub fn zoom_out(&mut self, factor: f64) -> bool {
        if !Viewport::valid_factor(factor) {
            return false;
        }
        self.rescale(factor)
    }

    fn valid_factor(factor: f64) -> bool {
        if factor.is_finite() && factor > 0.0 {
            true
        } else {
            warn!("ignoring zoom factor {}", factor);
            false
        }
    }

    fn rescale(&mut self, scale: f64) -> bool {
        let cx = (self.xmin + self.xmax) / 2.0;
        let cy = (self.ymin + self.ymax) / 2.0;
        let hx = (self.xmax - self.xmin) / 2.0 * scale;
        let hy = (self.ymax - self.ymin) / 2.0 * scale;
        let span_ok = |h: f64| h.is_finite() && 2.0 * h >= MIN_SPAN;
        if !span_ok(hx) || !span_ok(hy) {
            warn!("zoom would leave a degenerate viewport; unchanged");
            return false;
        }
        self.xmin = cx - hx;
        self.xmax = cx + hx;
        self.ymin = cy - hy;
        self.ymax = cy + hy;
        true
    }

    /// Screen column and row of the axis lines through `origin`,
    /// each `None` when off screen.
    pub fn axes(&self, origin: Point) -> (Option<f64>, Option<f64>) {
        let center = self.to_screen(origin);
        let on = |v: f64, max: usize| {
            if v.is_finite() && 0.0 <= v && v < max as f64 {
                Some(v)
            } else {
                None
            }
        };
        (on(center.x, SCREEN_WIDTH), on(center.y, SCREEN_HEIGHT))
    }

    pub fn x_span(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn y_span(&self) -> f64 {
        self.ymax - self.ymin
    }
}
