use super::{interpolate, Point, Viewport, SCREEN_WIDTH};
use crate::mach::{Error, Instruction, Runtime, Vars};
use log::{debug, trace};

/// ## Sampled curve
///
/// Screen-space polylines ready to draw. A run is never shorter than two
/// points. `error` is set when the scan was abandoned.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    runs: Vec<Vec<Point>>,
    error: Option<Error>,
}

impl Curve {
    pub fn runs(&self) -> &[Vec<Point>] {
        &self.runs
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.runs
            .iter()
            .flat_map(|run| run.windows(2).map(|w| (w[0], w[1])))
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn start_run(&mut self, from: Point, to: Point) {
        self.runs.push(vec![from, to]);
    }

    fn continue_run(&mut self, to: Point) {
        match self.runs.last_mut() {
            Some(run) => run.push(to),
            None => debug_assert!(false, "no run to continue"),
        }
    }
}

/// Outcome of one column as far as continuity is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Drawn(Point),
    Gap,
}

/// ## Curve sampler
///
/// Evaluates an equation once per pixel column and joins neighbouring
/// results into line segments.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    width: usize,
}

impl Default for Sampler {
    fn default() -> Sampler {
        Sampler::new(SCREEN_WIDTH)
    }
}

impl Sampler {
    pub fn new(width: usize) -> Sampler {
        Sampler { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Spreads the sampled columns evenly across the domain x range.
    pub fn column_to_x(&self, view: &Viewport, column: usize) -> f64 {
        if self.width == SCREEN_WIDTH {
            view.column_to_x(column)
        } else if self.width > 1 {
            let last = (self.width - 1) as f64;
            interpolate(column as f64, 0.0, last, view.xmin, view.xmax)
        } else {
            view.xmin
        }
    }

    pub fn sample(
        &self,
        runtime: &Runtime,
        instructions: &[Instruction],
        view: &Viewport,
        vars: &Vars,
    ) -> Curve {
        let mut curve = Curve::default();
        let mut last = Column::Gap;
        let mut joined = false;
        for column in 0..self.width {
            let gx = self.column_to_x(view, column);
            let current = match runtime.execute(instructions, &vars.scope(gx)) {
                Ok(gy) if gy.is_finite() => {
                    let point = view.to_screen(Point::new(gx, gy));
                    if point.is_finite() {
                        Column::Drawn(point)
                    } else {
                        Column::Gap
                    }
                }
                Ok(gy) => {
                    trace!("column {}: non-finite result {}", column, gy);
                    Column::Gap
                }
                Err(error) if error.is_pointwise() => {
                    trace!("column {}: {}", column, error);
                    Column::Gap
                }
                Err(error) => {
                    debug!("sampling abandoned at column {}: {}", column, error);
                    curve.error = Some(error);
                    break;
                }
            };
            if let (Column::Drawn(from), Column::Drawn(to)) = (last, current) {
                if joined {
                    curve.continue_run(to);
                } else {
                    curve.start_run(from, to);
                }
                joined = true;
            } else {
                joined = false;
            }
            last = current;
        }
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::ErrorCode;

    #[test]
    fn test_continue_joins_runs() {
        let mut curve = Curve::default();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(2.0, 0.0);
        curve.start_run(a, b);
        curve.continue_run(c);
        assert_eq!(curve.runs().len(), 1);
        assert_eq!(curve.segments().count(), 2);
    }

    #[test]
    fn test_new_run_even_when_points_touch() {
        let mut curve = Curve::default();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        curve.start_run(a, b);
        curve.start_run(b, a);
        assert_eq!(curve.runs().len(), 2);
    }

    #[test]
    fn test_gap_between_equal_values_splits_run() {
        // 1 + 0 * (1 / (x - hole)) is flat with one undefined column
        let vars = Vars::new();
        let view = Viewport::default();
        let sampler = Sampler::new(5);
        let hole = sampler.column_to_x(&view, 2);
        let seq = vec![
            Instruction::Literal(hole),
            Instruction::Push(vars.free()),
            Instruction::Binary(crate::mach::BinaryOp::Sub),
            Instruction::Literal(1.0),
            Instruction::Binary(crate::mach::BinaryOp::Div),
            Instruction::Literal(0.0),
            Instruction::Binary(crate::mach::BinaryOp::Mul),
            Instruction::Literal(1.0),
            Instruction::Binary(crate::mach::BinaryOp::Add),
        ];
        let curve = sampler.sample(&Runtime::default(), &seq, &view, &vars);
        assert!(curve.error().is_none());
        assert_eq!(curve.runs().len(), 2);
        assert_eq!(curve.runs()[0].len(), 2);
        assert_eq!(curve.runs()[1].len(), 2);
    }

    #[test]
    fn test_narrow_sampler() {
        let vars = Vars::new();
        let seq = vec![Instruction::Push(vars.free())];
        let curve = Sampler::new(3).sample(&Runtime::default(), &seq, &Viewport::default(), &vars);
        assert_eq!(curve.segments().count(), 2);
        assert!(curve.error().is_none());
        let run = &curve.runs()[0];
        assert_eq!(run[0].x, 0.0);
        assert_eq!(run[1], Point::new(199.5, 119.5));
        assert_eq!(run[2].x, 399.0);
    }

    #[test]
    fn test_zero_width() {
        let vars = Vars::new();
        let curve = Sampler::new(0).sample(&Runtime::default(), &[], &Viewport::default(), &vars);
        assert!(curve.is_empty());
        assert!(curve.error().is_none());
        let curve = Sampler::new(1).sample(&Runtime::default(), &[], &Viewport::default(), &vars);
        assert_eq!(curve.error().map(|e| e.code()), Some(ErrorCode::Underflow));
    }
}
