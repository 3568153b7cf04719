use glam::DVec3;

/// Axis-aligned bounds in world space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: DVec3,
    pub max: DVec3,
}

impl AABB {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Cube centred on the origin with the given half extent
    pub fn cube(half_extent: f64) -> Self {
        Self::new(DVec3::splat(-half_extent), DVec3::splat(half_extent))
    }

    /// Tightest box around the points, None when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Inclusive containment with an absolute tolerance
    pub fn contains(&self, point: DVec3, eps: f64) -> bool {
        point.cmpge(self.min - DVec3::splat(eps)).all()
            && point.cmple(self.max + DVec3::splat(eps)).all()
    }

    pub fn contains_box(&self, other: &AABB) -> bool {
        self.contains(other.min, 0.0) && self.contains(other.max, 0.0)
    }
}
