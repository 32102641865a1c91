/*!
## Rust Plot Module

This Rust module turns equations into curves on a fixed size screen:
the viewport transform, the column sampler, and the state the keypad
and sliders edit.

*/

mod equation;
mod keypad;
mod sample;
mod slider;
mod trace;
mod view;

pub use equation::Equation;
pub use equation::Equations;
pub use equation::SLOT_COLORS;
pub use equation::SLOT_COUNT;
pub use keypad::Edit;
pub use keypad::Keypad;
pub use sample::Curve;
pub use sample::Sampler;
pub use slider::Slider;
pub use slider::SliderPanel;
pub use trace::trace;
pub use trace::trace_at;
pub use trace::trace_unit;
pub use trace::Cursor;
pub use trace::Trace;
pub use view::interpolate;
pub use view::Point;
pub use view::Viewport;
pub use view::MIN_SPAN;
pub use view::SCREEN_HEIGHT;
pub use view::SCREEN_WIDTH;
