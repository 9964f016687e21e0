use crate::motion::follow::Point;

/// Card box in viewport coordinates, as `getBoundingClientRect` reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation of a card in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Leans the card toward the pointer. A pointer on an edge gives
    /// `intensity` degrees on that axis; the top edge tips back.
    pub fn toward(pointer: Point, bounds: Bounds, intensity: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::FLAT;
        }
        let center = bounds.center();
        let dx = ((pointer.x - center.x) / (bounds.width / 2.0)).clamp(-1.0, 1.0);
        let dy = ((pointer.y - center.y) / (bounds.height / 2.0)).clamp(-1.0, 1.0);
        Self {
            rotate_x: -dy * intensity,
            rotate_y: dx * intensity,
        }
    }

    pub fn css(&self, lifted: bool) -> String {
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
            self.rotate_x,
            self.rotate_y,
            if lifted { 50 } else { 0 }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centre_is_flat() {
        let tilt = Tilt::toward(Point::new(200.0, 100.0), CARD, 15.0);
        assert_eq!(tilt.rotate_x.abs(), 0.0);
        assert_eq!(tilt.rotate_y.abs(), 0.0);
    }

    #[test]
    fn edges_reach_full_intensity() {
        let right = Tilt::toward(Point::new(300.0, 100.0), CARD, 15.0);
        assert_eq!(right.rotate_y, 15.0);
        let top = Tilt::toward(Point::new(200.0, 50.0), CARD, 15.0);
        assert_eq!(top.rotate_x, 15.0);
        let bottom_left = Tilt::toward(Point::new(100.0, 150.0), CARD, 8.0);
        assert_eq!(bottom_left, Tilt { rotate_x: -8.0, rotate_y: -8.0 });
    }

    #[test]
    fn halfway_is_half_the_angle() {
        let tilt = Tilt::toward(Point::new(250.0, 75.0), CARD, 12.0);
        assert_eq!(tilt, Tilt { rotate_x: 6.0, rotate_y: 6.0 });
    }

    #[test]
    fn angles_never_exceed_intensity() {
        let tilt = Tilt::toward(Point::new(2000.0, -900.0), CARD, 10.0);
        assert_eq!(tilt, Tilt { rotate_x: 10.0, rotate_y: 10.0 });
    }

    #[test]
    fn collapsed_boxes_stay_flat() {
        let empty = Bounds { width: 0.0, ..CARD };
        assert_eq!(Tilt::toward(Point::new(0.0, 0.0), empty, 15.0), Tilt::FLAT);
    }

    #[test]
    fn css_lifts_while_hovered() {
        let tilt = Tilt { rotate_x: -3.0, rotate_y: 4.5 };
        assert_eq!(tilt.css(true), "rotateX(-3.00deg) rotateY(4.50deg) translateZ(50px)");
        assert_eq!(Tilt::FLAT.css(false), "rotateX(0.00deg) rotateY(0.00deg) translateZ(0px)");
    }
}
