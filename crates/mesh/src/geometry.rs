use cgmath::{InnerSpace, Zero};

pub type Vector3 = cgmath::Vector3<f32>;
pub type Vector2 = cgmath::Vector2<f32>;

// We rely on the vector types being repr(c) so attribute buffers can be viewed as flat floats.
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);
static_assertions::assert_eq_size!(Vector2, [f32; 2]);
static_assertions::assert_eq_align!(Vector2, f32);

#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    /// Returns the unit normal of this triangle.
    ///
    /// Corners are expected in counter-clockwise order when viewed from the front, so the normal
    /// is `(p1 - p0) x (p2 - p0)`. A degenerate triangle (collinear or coincident corners) has
    /// no defined direction and yields the zero vector.
    pub fn normal(&self) -> Vector3 {
        normalize_or_zero((self.p1 - self.p0).cross(self.p2 - self.p0))
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: Vector3::zero(),
            p1: Vector3::zero(),
            p2: Vector3::zero(),
        }
    }
}

/// Scales `v` to unit length, or returns the zero vector if `v` has no usable length.
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    let len = v.magnitude();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        Vector3::zero()
    }
}

/// Views a slice of vectors as the flat float buffer a GPU upload expects.
pub fn flatten3(v: &[Vector3]) -> &[f32] {
    // Safety: Vector3 has the size and alignment of [f32; 3] (asserted above), so a slice of
    // `n` vectors covers exactly `3n` contiguous floats.
    unsafe { std::slice::from_raw_parts(v.as_ptr() as *const f32, v.len() * 3) }
}

/// Views a slice of 2D vectors as a flat float buffer.
pub fn flatten2(v: &[Vector2]) -> &[f32] {
    // Safety: see `flatten3`.
    unsafe { std::slice::from_raw_parts(v.as_ptr() as *const f32, v.len() * 2) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn triangle_normal_follows_winding() {
        let t = Triangle {
            p0: Vector3::new(0.0, 0.0, 0.0),
            p1: Vector3::new(1.0, 0.0, 0.0),
            p2: Vector3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(Vector3::new(0.0, 0.0, 1.0), t.normal());

        let flipped = Triangle {
            p0: t.p0,
            p1: t.p2,
            p2: t.p1,
        };
        assert_eq!(Vector3::new(0.0, 0.0, -1.0), flipped.normal());
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let t = Triangle {
            p0: Vector3::new(0.0, 0.0, 0.0),
            p1: Vector3::new(1.0, 1.0, 1.0),
            p2: Vector3::new(2.0, 2.0, 2.0),
        };
        assert_eq!(Vector3::zero(), t.normal());
        assert_eq!(Vector3::zero(), Triangle::default().normal());
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let n = normalize_or_zero(Vector3::new(3.0, 0.0, 4.0));
        assert_float_eq!(n.magnitude(), 1.0, abs <= 0.0001);
        assert_float_eq!(n.x, 0.6, abs <= 0.0001);
        assert_float_eq!(n.z, 0.8, abs <= 0.0001);
    }

    #[test]
    fn flatten_preserves_order() {
        let v = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        assert_eq!(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], flatten3(&v));

        let uv = [Vector2::new(0.25, 0.75)];
        assert_eq!(&[0.25, 0.75], flatten2(&uv));
    }
}
