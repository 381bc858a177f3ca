use serde::{Deserialize, Serialize};

/// A point (or displacement) in grid coordinates. Equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unsigned angle between two vectors in radians, via
    /// `acos(dot / (|a||b|))`. The ratio is clamped to the acos domain so
    /// accumulated rounding never produces NaN; a zero-length input still
    /// yields NaN and callers must not pass one.
    pub fn angle_between(self, other: Self) -> f64 {
        let ratio = self.dot(other) / (self.magnitude() * other.magnitude());
        ratio.clamp(-1.0, 1.0).acos()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Round to 3 decimal places.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Euclidean distance, rounded to 3 decimals to absorb float noise from
/// repeated intersection math. Downstream equality checks rely on the
/// rounding.
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    round3((b - a).magnitude())
}

/// One axis of the grid rectangle. `min < max` is a caller precondition;
/// see `Scene::validate` for untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn contains_strict(&self, v: f64) -> bool {
        self.min < v && v < self.max
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }
}

/// The bounded coordinate grid: domain is the horizontal axis, range the
/// vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRect {
    pub domain: AxisRange,
    pub range: AxisRange,
}

impl GridRect {
    pub const fn new(domain: AxisRange, range: AxisRange) -> Self {
        Self { domain, range }
    }

    /// Corners in order bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.domain.min, self.range.min),
            Vec2::new(self.domain.max, self.range.min),
            Vec2::new(self.domain.max, self.range.max),
            Vec2::new(self.domain.min, self.range.max),
        ]
    }

    /// Edge segments in order top, bottom, left, right.
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let [bl, br, tr, tl] = self.corners();
        [(tl, tr), (bl, br), (bl, tl), (br, tr)]
    }

    /// On or inside the boundary.
    pub fn contains(&self, p: Vec2) -> bool {
        self.domain.contains(p.x) && self.range.contains(p.y)
    }

    /// Strictly inside, boundary excluded.
    pub fn strictly_contains(&self, p: Vec2) -> bool {
        self.domain.contains_strict(p.x) && self.range.contains_strict(p.y)
    }

    pub fn area(&self) -> f64 {
        self.domain.length() * self.range.length()
    }
}
