#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Eases a position toward a moving target, a fixed fraction per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub position: Point,
    pub target: Point,
    ease: f64,
}

impl Follower {
    pub fn new(ease: f64) -> Self {
        Self {
            position: Point::ORIGIN,
            target: Point::ORIGIN,
            ease: ease.clamp(0.0, 1.0),
        }
    }

    pub fn step(&mut self) -> Point {
        self.position.x = lerp(self.position.x, self.target.x, self.ease);
        self.position.y = lerp(self.position.y, self.target.y, self.ease);
        self.position
    }

    /// Within `epsilon` of the target on both axes.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.position.x - self.target.x).abs() < epsilon
            && (self.position.y - self.target.y).abs() < epsilon
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticOptions {
    /// Fraction of the pointer offset the element travels.
    pub strength: f64,
    pub ease: f64,
    /// Pointer distance from the centre beyond which the pull is ignored.
    pub max_distance: f64,
}

impl Default for MagneticOptions {
    fn default() -> Self {
        Self {
            strength: 0.3,
            ease: 0.1,
            max_distance: 100.0,
        }
    }
}

impl MagneticOptions {
    /// The offset an element centred at `center` should drift to, or `None`
    /// when the pointer is out of reach and the current target should stand.
    pub fn pull(&self, pointer: Point, center: Point) -> Option<Point> {
        if pointer.distance(center) < self.max_distance {
            Some(Point::new(
                (pointer.x - center.x) * self.strength,
                (pointer.y - center.y) * self.strength,
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn follower_converges_without_overshoot() {
        let mut follower = Follower::new(0.15);
        follower.target = Point::new(300.0, -120.0);

        let mut last_gap = f64::MAX;
        for _ in 0..120 {
            let position = follower.step();
            let gap = position.distance(follower.target);
            assert!(gap <= last_gap);
            assert!(position.x <= 300.0 && position.y >= -120.0);
            last_gap = gap;
        }
        assert!(follower.is_settled(0.01));
    }

    #[test]
    fn pull_only_inside_reach() {
        let options = MagneticOptions::default();
        let center = Point::new(100.0, 100.0);

        let pulled = options.pull(Point::new(150.0, 100.0), center).unwrap();
        assert!((pulled.x - 15.0).abs() < 1e-9);
        assert_eq!(pulled.y, 0.0);

        assert_eq!(options.pull(Point::new(300.0, 100.0), center), None);
        assert_eq!(options.pull(Point::new(200.0, 100.0), center), None);
    }
}
