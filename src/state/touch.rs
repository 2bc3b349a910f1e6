// Touch/pinch gesture state
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pub single_active: bool,
    pub pinch: bool,
    pub start_pinch_dist: f64,
    pub start_scale: f64,
    pub last_touch_x: f64,
    pub last_touch_y: f64,
}
