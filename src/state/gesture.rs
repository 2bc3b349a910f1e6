// Pointer gesture state driven by the interaction controller.
use crate::projection::Point;

/// Exclusive drag mode for the current press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Modifier held at press: drag translates the pan center.
    Panning { last_x: f64, last_y: f64 },
    /// Plain press: horizontal drag turns the sky.
    Rotating { last_x: f64 },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// Where the current press started and how far it has wandered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Press {
    pub origin: Point,
    pub travelled: f64,
}

impl Press {
    pub fn at(origin: Point) -> Self {
        Self {
            origin,
            travelled: 0.0,
        }
    }

    pub fn track(&mut self, at: Point) {
        self.travelled = self.travelled.max(self.origin.distance(at));
    }
}
