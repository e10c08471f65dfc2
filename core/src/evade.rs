//! Placement of the decline control. Every time a pointer or touch gets near
//! it, the control jumps to a random spot that keeps its whole box inside the
//! container, minus [`EVADE_MARGIN`] on each axis.

pub const EVADE_MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Source of uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic splitmix64 stream.
#[derive(Clone, Debug)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl UnitSource for SplitMix {
    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;
        (z >> 11) as f64 / ((1u64 << 53) as f64)
    }
}

/// Largest top-left offset that keeps `target` inside `container`. A container
/// too small for target + margin pins that axis to 0.
pub fn travel_limits(container: Size, target: Size) -> (f64, f64) {
    let max_x = container.width - target.width - EVADE_MARGIN;
    let max_y = container.height - target.height - EVADE_MARGIN;
    (sanitize(max_x), sanitize(max_y))
}

pub fn initial_position(container: Size, target: Size) -> Position {
    let (max_x, max_y) = travel_limits(container, target);
    Position {
        x: max_x * 0.5,
        y: max_y * 0.5,
    }
}

pub fn on_proximity<R: UnitSource + ?Sized>(container: Size, target: Size, source: &mut R) -> Position {
    let (max_x, max_y) = travel_limits(container, target);
    Position {
        x: draw(source, max_x),
        y: draw(source, max_y),
    }
}

fn draw<R: UnitSource + ?Sized>(source: &mut R, max: f64) -> f64 {
    let unit = source.next_unit();
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    (unit * max).clamp(0.0, max)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
