use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Position or displacement in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of length `radius` at `angle` radians.
    pub fn polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self * (1.0 / length)
        } else {
            Self::ORIGIN
        }
    }

    /// Shrinks the vector to at most `max_length`.
    pub fn capped(self, max_length: f64) -> Self {
        let length = self.length();
        if length > max_length {
            self * (max_length / length)
        } else {
            self
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_length() {
        let a = Point::new(3.0, 4.0);

        assert_eq!(a.length(), 5.0);
        assert_eq!(a + Point::new(1.0, -1.0), Point::new(4.0, 3.0));
        assert_eq!(a - a, Point::ORIGIN);
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(-a, Point::new(-3.0, -4.0));
        assert_eq!(a.distance(Point::ORIGIN), 5.0);
    }

    #[test]
    fn normalize_and_cap() {
        assert_eq!(Point::ORIGIN.normalized(), Point::ORIGIN);
        assert!((Point::new(0.0, 7.0).normalized().y - 1.0).abs() < 1e-12);
        assert_eq!(Point::new(6.0, 8.0).capped(5.0), Point::new(3.0, 4.0));
        assert_eq!(Point::new(1.0, 1.0).capped(5.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);

        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(1.5, -2.0));
    }
}
