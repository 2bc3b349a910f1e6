//! Pointer, wheel, touch and resize handling for the star map.
//!
//! The controller owns the [`ProjectionState`] and a small gesture machine:
//! a press enters either panning (modifier held) or rotating, release or
//! leave always returns to idle, and idle movement tracks the hovered star.
//! The last pointer position is kept so that a view change under a resting
//! pointer re-evaluates the hover as well.
//! Every entry point reports what the host has to do next through a
//! [`Response`]; the controller itself never touches the DOM.

use crate::config::StarMapConfig;
use crate::model::{Constellations, SelectedStar, Star, StarKey};
use crate::projection::{Point, ProjectionState, ScaleBounds, reference_radius};
use crate::state::{Gesture, Press, TouchState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Side effects requested by an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub redraw: bool,
    /// Only set when the cursor affordance actually changes.
    pub cursor: Option<Cursor>,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            cursor: None,
        }
    }

    fn and(self, other: Response) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            cursor: other.cursor.or(self.cursor),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Select(SelectedStar),
    /// Nothing under the pointer: any open profile should close.
    Clear,
    /// The press was a drag; leave the selection alone.
    Ignored,
}

/// Nearest clickable star under a point.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub constellation: &'a str,
    pub name: &'a str,
    pub team: &'a str,
    pub star: &'a Star,
    pub distance: f64,
}

/// Bounding box of the canvas element in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Converts client (CSS) coordinates to canvas pixel coordinates, compensating
/// for the canvas being displayed at a different size than its backing store.
pub fn canvas_point(client_x: f64, client_y: f64, rect: ClientRect, canvas_w: f64, canvas_h: f64) -> Point {
    let sx = if rect.width > 0.0 { canvas_w / rect.width } else { 1.0 };
    let sy = if rect.height > 0.0 { canvas_h / rect.height } else { 1.0 };
    Point::new((client_x - rect.left) * sx, (client_y - rect.top) * sy)
}

pub struct InteractionController {
    view: ProjectionState,
    width: f64,
    height: f64,
    gesture: Gesture,
    press: Option<Press>,
    hovered: Option<StarKey>,
    /// Last mouse position over the surface, `None` once it leaves.
    pointer: Option<Point>,
    touch: TouchState,
    rotation_sensitivity: f64,
    zoom_speed: f64,
    bounds: ScaleBounds,
    hit_radius: f64,
    drag_threshold: f64,
}

impl InteractionController {
    pub fn new(width: f64, height: f64, config: &StarMapConfig) -> Self {
        Self {
            view: ProjectionState::new(width, height, config.initial_scale),
            width,
            height,
            gesture: Gesture::Idle,
            press: None,
            hovered: None,
            pointer: None,
            touch: TouchState::default(),
            rotation_sensitivity: config.rotation_sensitivity,
            zoom_speed: config.zoom_speed,
            bounds: config.scale_bounds(),
            hit_radius: config.hit_radius_px,
            drag_threshold: config.drag_threshold_px,
        }
    }

    pub fn view(&self) -> &ProjectionState {
        &self.view
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn hovered(&self) -> Option<&StarKey> {
        self.hovered.as_ref()
    }

    pub fn radius(&self) -> f64 {
        reference_radius(self.width, self.height)
    }

    /// Nearest clickable star within the hit radius of `at`.
    pub fn hit_test<'a>(&self, at: Point, catalogue: &'a Constellations) -> Option<Hit<'a>> {
        let radius = self.radius();
        let mut best: Option<Hit<'a>> = None;
        for (constellation, c) in catalogue {
            for (name, star) in &c.stars {
                if !star.clickable {
                    continue;
                }
                let distance = self.view.project(star.ra, star.dec, radius).distance(at);
                if distance <= self.hit_radius && best.is_none_or(|b| distance < b.distance) {
                    best = Some(Hit {
                        constellation,
                        name,
                        team: &c.team,
                        star,
                        distance,
                    });
                }
            }
        }
        best
    }

    /// Starts a drag. Hover is suspended until the drag ends.
    pub fn pointer_down(&mut self, at: Point, modifier: bool) -> Response {
        self.pointer = Some(at);
        self.press = Some(Press::at(at));
        self.gesture = if modifier {
            Gesture::Panning {
                last_x: at.x,
                last_y: at.y,
            }
        } else {
            Gesture::Rotating { last_x: at.x }
        };
        self.clear_hover()
    }

    pub fn pointer_move(&mut self, at: Point, catalogue: &Constellations) -> Response {
        self.pointer = Some(at);
        match self.drag_to(at) {
            Some(response) => response,
            None => self.update_hover(at, catalogue),
        }
    }

    /// Ends the drag. The press record survives until the click that follows.
    pub fn pointer_up(&mut self, catalogue: &Constellations) -> Response {
        self.gesture = Gesture::Idle;
        self.refresh_hover(catalogue)
    }

    pub fn pointer_leave(&mut self) -> Response {
        self.gesture = Gesture::Idle;
        self.press = None;
        self.pointer = None;
        self.clear_hover()
    }

    pub fn click(&mut self, at: Point, catalogue: &Constellations) -> ClickOutcome {
        let press = self.press.take();
        if press.is_some_and(|p| p.travelled > self.drag_threshold) {
            return ClickOutcome::Ignored;
        }
        match self.hit_test(at, catalogue) {
            Some(hit) => {
                log::debug!("selected {}/{}", hit.constellation, hit.name);
                ClickOutcome::Select(SelectedStar {
                    key: StarKey::new(hit.constellation, hit.name),
                    star: hit.star.clone(),
                    team: hit.team.to_string(),
                })
            }
            None => ClickOutcome::Clear,
        }
    }

    /// Legal in any gesture state; only the scale changes.
    pub fn wheel(&mut self, delta_y: f64, catalogue: &Constellations) -> Response {
        self.view.zoom(delta_y, self.zoom_speed, self.bounds);
        Response::redraw().and(self.refresh_hover(catalogue))
    }

    pub fn zoom_by(&mut self, factor: f64, catalogue: &Constellations) -> Response {
        self.view.zoom_by(factor, self.bounds);
        Response::redraw().and(self.refresh_hover(catalogue))
    }

    pub fn rotate_by(&mut self, delta: f64, catalogue: &Constellations) -> Response {
        self.view.rotate(delta);
        Response::redraw().and(self.refresh_hover(catalogue))
    }

    /// Puts the pan center back in the middle of the surface.
    pub fn recenter(&mut self, catalogue: &Constellations) -> Response {
        self.view.recenter(self.width, self.height);
        Response::redraw().and(self.refresh_hover(catalogue))
    }

    /// The surface changed size: new reference radius and pan center,
    /// orientation and zoom preserved.
    pub fn resize(&mut self, width: f64, height: f64, catalogue: &Constellations) -> Response {
        self.width = width;
        self.height = height;
        self.view.recenter(width, height);
        Response::redraw().and(self.refresh_hover(catalogue))
    }

    /// Re-runs the hover test at the resting pointer, e.g. after the
    /// catalogue was swapped. No-op while dragging or with no pointer.
    pub fn refresh_hover(&mut self, catalogue: &Constellations) -> Response {
        match self.pointer {
            Some(at) if self.gesture.is_idle() => self.update_hover(at, catalogue),
            _ => Response::default(),
        }
    }

    pub fn touch_start(&mut self, touches: &[Point]) -> Response {
        match touches {
            [] => {}
            [only] => {
                self.touch = TouchState {
                    single_active: true,
                    last_touch_x: only.x,
                    last_touch_y: only.y,
                    ..TouchState::default()
                };
                self.pointer_down(*only, false);
                // Fingers do not hover.
                self.pointer = None;
            }
            [a, b, ..] => {
                self.touch = TouchState {
                    pinch: true,
                    start_pinch_dist: a.distance(*b),
                    start_scale: self.view.scale,
                    ..TouchState::default()
                };
                self.gesture = Gesture::Idle;
                self.press = None;
            }
        }
        Response::default()
    }

    pub fn touch_move(&mut self, touches: &[Point]) -> Response {
        match touches {
            [a, b, ..] if self.touch.pinch => {
                if self.touch.start_pinch_dist <= 0.0 {
                    return Response::default();
                }
                let factor = a.distance(*b) / self.touch.start_pinch_dist;
                self.view.scale = self.bounds.clamp(self.touch.start_scale * factor);
                Response::redraw()
            }
            [only] if self.touch.single_active => {
                self.touch.last_touch_x = only.x;
                self.touch.last_touch_y = only.y;
                self.drag_to(*only).unwrap_or_default()
            }
            _ => Response::default(),
        }
    }

    /// `remaining` is the number of fingers still down. A lifted single
    /// finger that did not drag counts as a tap.
    pub fn touch_end(&mut self, remaining: usize, catalogue: &Constellations) -> ClickOutcome {
        if remaining > 0 {
            // Dropping from a pinch to one finger must not start a rotation.
            self.touch.pinch = false;
            self.touch.single_active = false;
            self.gesture = Gesture::Idle;
            return ClickOutcome::Ignored;
        }
        let tapped = self.touch.single_active;
        let at = Point::new(self.touch.last_touch_x, self.touch.last_touch_y);
        self.touch = TouchState::default();
        self.gesture = Gesture::Idle;
        if tapped {
            self.click(at, catalogue)
        } else {
            self.press = None;
            ClickOutcome::Ignored
        }
    }

    /// Applies an active drag. `None` when idle.
    fn drag_to(&mut self, at: Point) -> Option<Response> {
        if let Some(press) = self.press.as_mut() {
            press.track(at);
        }
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Panning { last_x, last_y } => {
                self.view.pan(at.x - last_x, at.y - last_y);
                self.gesture = Gesture::Panning {
                    last_x: at.x,
                    last_y: at.y,
                };
                Some(Response::redraw())
            }
            Gesture::Rotating { last_x } => {
                self.view.rotate((at.x - last_x) * self.rotation_sensitivity);
                self.gesture = Gesture::Rotating { last_x: at.x };
                Some(Response::redraw())
            }
        }
    }

    fn clear_hover(&mut self) -> Response {
        match self.hovered.take() {
            Some(_) => Response {
                redraw: true,
                cursor: Some(Cursor::Default),
            },
            None => Response::default(),
        }
    }

    fn update_hover(&mut self, at: Point, catalogue: &Constellations) -> Response {
        let hit = self.hit_test(at, catalogue);
        let unchanged = match (&self.hovered, &hit) {
            (None, None) => true,
            (Some(key), Some(h)) => key.matches(h.constellation, h.name),
            _ => false,
        };
        if unchanged {
            return Response::default();
        }
        let was_hovering = self.hovered.is_some();
        self.hovered = hit.map(|h| StarKey::new(h.constellation, h.name));
        let hovering = self.hovered.is_some();
        Response {
            redraw: true,
            cursor: (was_hovering != hovering).then_some(if hovering {
                Cursor::Pointer
            } else {
                Cursor::Default
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Constellation;
    use approx::assert_relative_eq;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    fn star(ra: f64, dec: f64, clickable: bool) -> Star {
        Star {
            ra,
            dec,
            magnitude: 1.0,
            email: Some(format!("{ra}@x.com")),
            clickable,
            ..Default::default()
        }
    }

    fn catalogue() -> Constellations {
        let mut c = Constellation {
            team: "core".into(),
            ..Default::default()
        };
        c.stars.insert("Betelgeuse".into(), star(10.0, 20.0, true));
        c.stars.insert("Rigel".into(), star(100.0, 30.0, true));
        c.stars.insert("Bellatrix".into(), star(200.0, 10.0, false));
        let mut cat = Constellations::new();
        cat.insert("Orion".into(), c);
        cat
    }

    fn controller() -> InteractionController {
        InteractionController::new(W, H, &StarMapConfig::default())
    }

    fn projected(ctl: &InteractionController, cat: &Constellations, name: &str) -> Point {
        let s = &cat["Orion"].stars[name];
        ctl.view().project(s.ra, s.dec, ctl.radius())
    }

    #[test]
    fn test_initial_view() {
        let ctl = controller();
        assert_eq!(ctl.view().center(), Point::new(400.0, 300.0));
        assert_eq!(ctl.view().scale, 0.8);
        assert_eq!(ctl.view().rotation, 0.0);
        assert!(ctl.gesture().is_idle());
    }

    #[test]
    fn test_click_on_star_selects_it() {
        let cat = catalogue();
        let mut ctl = controller();
        let at = projected(&ctl, &cat, "Betelgeuse");
        match ctl.click(at, &cat) {
            ClickOutcome::Select(sel) => {
                assert_eq!(sel.key, StarKey::new("Orion", "Betelgeuse"));
                assert_eq!(sel.team, "core");
                assert_eq!(sel.star, cat["Orion"].stars["Betelgeuse"]);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn test_click_beyond_hit_radius_clears() {
        let cat = catalogue();
        let mut ctl = controller();
        let at = projected(&ctl, &cat, "Betelgeuse");
        let away = Point::new(at.x + 20.0, at.y);
        assert_eq!(ctl.click(away, &cat), ClickOutcome::Clear);
    }

    #[test]
    fn test_unclickable_star_is_never_hit() {
        let cat = catalogue();
        let ctl = controller();
        let at = projected(&ctl, &cat, "Bellatrix");
        assert!(ctl.hit_test(at, &cat).is_none());
    }

    #[test]
    fn test_hit_test_prefers_nearest() {
        let mut cat = catalogue();
        if let Some(c) = cat.get_mut("Orion") {
            c.stars.insert("Alnitak".into(), star(10.5, 20.0, true));
        }
        let ctl = controller();
        let target = projected(&ctl, &cat, "Alnitak");
        let hit = ctl.hit_test(target, &cat).unwrap();
        assert_eq!(hit.name, "Alnitak");
        assert_relative_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_modifier_press_pans() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.pointer_down(Point::new(100.0, 100.0), true);
        assert!(matches!(ctl.gesture(), Gesture::Panning { .. }));
        let r = ctl.pointer_move(Point::new(130.0, 90.0), &cat);
        assert!(r.redraw);
        assert_eq!(ctl.view().center(), Point::new(430.0, 290.0));
        ctl.pointer_move(Point::new(140.0, 95.0), &cat);
        assert_eq!(ctl.view().center(), Point::new(440.0, 295.0));
        assert_eq!(ctl.view().rotation, 0.0);
    }

    #[test]
    fn test_plain_press_rotates_horizontally_only() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.pointer_down(Point::new(100.0, 100.0), false);
        assert!(matches!(ctl.gesture(), Gesture::Rotating { .. }));
        ctl.pointer_move(Point::new(100.0, 400.0), &cat);
        assert_eq!(ctl.view().rotation, 0.0);
        ctl.pointer_move(Point::new(160.0, 400.0), &cat);
        assert_relative_eq!(ctl.view().rotation, 60.0 * 0.005, epsilon = 1e-12);
        assert_eq!(ctl.view().center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_release_and_leave_return_to_idle() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.pointer_down(Point::new(0.0, 0.0), true);
        ctl.pointer_up(&cat);
        assert!(ctl.gesture().is_idle());
        let before = *ctl.view();
        ctl.pointer_move(Point::new(50.0, 50.0), &cat);
        assert_eq!(*ctl.view(), before);

        ctl.pointer_down(Point::new(0.0, 0.0), false);
        ctl.pointer_leave();
        assert!(ctl.gesture().is_idle());
    }

    #[test]
    fn test_hover_updates_cursor_only_on_change() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        let r = ctl.pointer_move(b, &cat);
        assert_eq!(r.cursor, Some(Cursor::Pointer));
        assert_eq!(ctl.hovered(), Some(&StarKey::new("Orion", "Betelgeuse")));

        let r = ctl.pointer_move(Point::new(b.x + 2.0, b.y), &cat);
        assert_eq!(r, Response::default());

        let rigel = projected(&ctl, &cat, "Rigel");
        let r = ctl.pointer_move(rigel, &cat);
        assert!(r.redraw);
        assert_eq!(r.cursor, None);

        let r = ctl.pointer_move(Point::new(1.0, 1.0), &cat);
        assert_eq!(r.cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());
    }

    #[test]
    fn test_leave_clears_hover() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_move(b, &cat);
        let r = ctl.pointer_leave();
        assert_eq!(r.cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());
    }

    #[test]
    fn test_drag_then_click_is_ignored() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_down(Point::new(b.x - 50.0, b.y), true);
        ctl.pointer_move(b, &cat);
        ctl.pointer_up(&cat);
        assert_eq!(ctl.click(b, &cat), ClickOutcome::Ignored);
        // The next click without a drag behaves normally.
        assert_eq!(ctl.click(Point::new(0.0, 0.0), &cat), ClickOutcome::Clear);
    }

    #[test]
    fn test_press_and_release_in_place_still_selects() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_down(b, false);
        ctl.pointer_up(&cat);
        assert!(matches!(ctl.click(b, &cat), ClickOutcome::Select(_)));
    }

    #[test]
    fn test_wheel_in_then_out_restores_scale() {
        let cat = catalogue();
        let mut ctl = controller();
        let start = ctl.view().scale;
        assert!(ctl.wheel(-100.0, &cat).redraw);
        assert!(ctl.view().scale > start);
        ctl.wheel(100.0, &cat);
        assert_relative_eq!(ctl.view().scale, start, epsilon = 1e-12);
    }

    #[test]
    fn test_wheel_is_legal_while_dragging() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.pointer_down(Point::new(10.0, 10.0), false);
        ctl.wheel(-50.0, &cat);
        assert!(matches!(ctl.gesture(), Gesture::Rotating { .. }));
        assert!(ctl.view().scale > 0.8);
    }

    #[test]
    fn test_resize_recenters_and_keeps_orientation() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.pointer_down(Point::new(0.0, 0.0), false);
        ctl.pointer_move(Point::new(90.0, 0.0), &cat);
        ctl.pointer_up(&cat);
        ctl.wheel(-200.0, &cat);
        let (rotation, scale) = (ctl.view().rotation, ctl.view().scale);
        ctl.resize(1280.0, 720.0, &cat);
        assert_eq!(ctl.view().center(), Point::new(640.0, 360.0));
        assert_eq!(ctl.view().rotation, rotation);
        assert_eq!(ctl.view().scale, scale);
        assert_relative_eq!(ctl.radius(), 360.0);
    }

    #[test]
    fn test_hit_radius_follows_resize() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.resize(400.0, 400.0, &cat);
        let b = projected(&ctl, &cat, "Betelgeuse");
        assert!(ctl.hit_test(b, &cat).is_some());
    }

    #[test]
    fn test_zoom_under_resting_pointer_drops_hover() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_move(b, &cat);
        assert!(ctl.hovered().is_some());

        let r = ctl.wheel(-300.0, &cat);
        assert!(r.redraw);
        assert_eq!(r.cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());
        assert!(ctl.hit_test(b, &cat).is_none());

        // Zooming back out brings the star under the pointer again.
        let r = ctl.wheel(300.0, &cat);
        assert_eq!(r.cursor, Some(Cursor::Pointer));
        assert_eq!(ctl.hovered(), Some(&StarKey::new("Orion", "Betelgeuse")));
    }

    #[test]
    fn test_button_rotation_and_resize_refresh_hover() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_move(b, &cat);
        assert_eq!(ctl.rotate_by(0.5, &cat).cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());
        assert_eq!(ctl.rotate_by(-0.5, &cat).cursor, Some(Cursor::Pointer));
        assert_eq!(ctl.resize(1280.0, 720.0, &cat).cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());
    }

    #[test]
    fn test_drag_suspends_hover_until_release() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.pointer_move(b, &cat);
        let r = ctl.pointer_down(b, true);
        assert_eq!(r.cursor, Some(Cursor::Default));
        assert!(ctl.hovered().is_none());

        // Pan away and back: no hover while the button is held.
        ctl.pointer_move(Point::new(b.x + 40.0, b.y), &cat);
        ctl.pointer_move(b, &cat);
        assert!(ctl.hovered().is_none());

        // The pan returned the view to where it was, so the star is under
        // the released pointer again.
        let r = ctl.pointer_up(&cat);
        assert_eq!(r.cursor, Some(Cursor::Pointer));
        assert_eq!(ctl.hovered(), Some(&StarKey::new("Orion", "Betelgeuse")));
    }

    #[test]
    fn test_canvas_point_compensates_css_scale() {
        let rect = ClientRect {
            left: 10.0,
            top: 20.0,
            width: 400.0,
            height: 300.0,
        };
        let p = canvas_point(210.0, 170.0, rect, 800.0, 600.0);
        assert_eq!(p, Point::new(400.0, 300.0));
        let degenerate = ClientRect {
            width: 0.0,
            height: 0.0,
            ..rect
        };
        assert_eq!(canvas_point(15.0, 25.0, degenerate, 800.0, 600.0), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_tap_selects_star() {
        let cat = catalogue();
        let mut ctl = controller();
        let b = projected(&ctl, &cat, "Betelgeuse");
        ctl.touch_start(&[b]);
        assert!(matches!(ctl.touch_end(0, &cat), ClickOutcome::Select(_)));
        assert!(ctl.gesture().is_idle());
    }

    #[test]
    fn test_touch_drag_rotates_without_selecting() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.touch_start(&[Point::new(100.0, 100.0)]);
        assert!(ctl.touch_move(&[Point::new(140.0, 100.0)]).redraw);
        assert_relative_eq!(ctl.view().rotation, 40.0 * 0.005, epsilon = 1e-12);
        assert_eq!(ctl.touch_end(0, &cat), ClickOutcome::Ignored);
    }

    #[test]
    fn test_pinch_zooms_relative_to_start() {
        let cat = catalogue();
        let mut ctl = controller();
        ctl.touch_start(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
        ctl.touch_move(&[Point::new(50.0, 100.0), Point::new(250.0, 100.0)]);
        assert_relative_eq!(ctl.view().scale, 1.6);
        assert_eq!(ctl.touch_end(1, &cat), ClickOutcome::Ignored);
        // The remaining finger does nothing until lifted.
        let before = *ctl.view();
        ctl.touch_move(&[Point::new(300.0, 100.0)]);
        assert_eq!(*ctl.view(), before);
        assert_eq!(ctl.touch_end(0, &cat), ClickOutcome::Ignored);
    }
}
