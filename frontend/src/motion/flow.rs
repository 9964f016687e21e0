use crate::motion::follow::{lerp, Point};

/// Full trip of a dot along its path.
pub const DOT_LOOP_MS: f64 = 4000.0;
/// Each further dot sets off this much later.
pub const DOT_STAGGER_MS: f64 = 500.0;

/// A quadratic curve from `start` to `end` bent toward `control`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl Quad {
    pub fn at(&self, t: f64) -> Point {
        let near = Point::new(
            lerp(self.start.x, self.control.x, t),
            lerp(self.start.y, self.control.y, t),
        );
        let far = Point::new(
            lerp(self.control.x, self.end.x, t),
            lerp(self.control.y, self.end.y, t),
        );
        Point::new(lerp(near.x, far.x, t), lerp(near.y, far.y, t))
    }
}

/// Two joined quadratic curves, the second continuing smoothly from the
/// first (`M start Q control mid T end` in SVG terms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowPath {
    first: Quad,
    second: Quad,
}

impl FlowPath {
    pub fn smooth(start: Point, control: Point, mid: Point, end: Point) -> Self {
        let mirrored = Point::new(2.0 * mid.x - control.x, 2.0 * mid.y - control.y);
        Self {
            first: Quad { start, control, end: mid },
            second: Quad {
                start: mid,
                control: mirrored,
                end,
            },
        }
    }

    /// Point at `t` of the way along; `t` wraps so looping callers can pass
    /// raw elapsed fractions.
    pub fn point_at(&self, t: f64) -> Point {
        let t = if t >= 1.0 && t.fract() == 0.0 { 1.0 } else { t.rem_euclid(1.0) };
        if t < 0.5 {
            self.first.at(t * 2.0)
        } else {
            self.second.at(t * 2.0 - 1.0)
        }
    }

    /// The `d` attribute for an SVG `<path>`.
    pub fn svg(&self) -> String {
        let Quad { start, control, end: mid } = self.first;
        let end = self.second.end;
        format!(
            "M {} {} Q {} {} {} {} T {} {}",
            start.x, start.y, control.x, control.y, mid.x, mid.y, end.x, end.y
        )
    }
}

/// The hero's two lines, in a 1200×800 view box.
pub fn hero_paths() -> [FlowPath; 2] {
    [
        FlowPath::smooth(
            Point::new(0.0, 400.0),
            Point::new(300.0, 350.0),
            Point::new(600.0, 400.0),
            Point::new(1200.0, 400.0),
        ),
        FlowPath::smooth(
            Point::new(0.0, 300.0),
            Point::new(400.0, 200.0),
            Point::new(600.0, 300.0),
            Point::new(1200.0, 250.0),
        ),
    ]
}

/// How far along its path dot `index` is after `elapsed_ms`, or `None`
/// while it is still waiting to set off.
pub fn dot_progress(index: usize, elapsed_ms: f64) -> Option<f64> {
    let travelled = elapsed_ms - index as f64 * DOT_STAGGER_MS;
    (travelled >= 0.0).then(|| (travelled % DOT_LOOP_MS) / DOT_LOOP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn paths_pass_through_their_anchors() {
        let [path, _] = hero_paths();
        assert!(close(path.point_at(0.0), Point::new(0.0, 400.0)));
        assert!(close(path.point_at(0.5), Point::new(600.0, 400.0)));
        assert!(close(path.point_at(1.0), Point::new(1200.0, 400.0)));
    }

    #[test]
    fn second_half_mirrors_the_first_control() {
        let [_, path] = hero_paths();
        assert_eq!(path.svg(), "M 0 300 Q 400 200 600 300 T 1200 250");
        assert_eq!(path.second.control, Point::new(800.0, 400.0));
        // rises above the start line in the first half, dips below mid in the second
        assert!(path.point_at(0.25).y < 300.0);
        assert!(path.point_at(0.75).y > 275.0);
    }

    #[test]
    fn progress_wraps() {
        let [path, _] = hero_paths();
        assert!(close(path.point_at(1.25), path.point_at(0.25)));
        assert!(close(path.point_at(-0.75), path.point_at(0.25)));
    }

    #[test]
    fn dots_set_off_one_after_another() {
        assert_eq!(dot_progress(0, 0.0), Some(0.0));
        assert_eq!(dot_progress(0, 1000.0), Some(0.25));
        assert_eq!(dot_progress(1, 400.0), None);
        assert_eq!(dot_progress(1, 1500.0), Some(0.25));
        assert_eq!(dot_progress(0, DOT_LOOP_MS + 2000.0), Some(0.5));
    }
}
