use std::ops::{Add, Index};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    #[inline(always)]
    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

/// Column major, matching what `glUniformMatrix4fv` expects without transposition.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    /// Orthographic projection, same layout as `glOrtho`.
    ///
    /// Passing `bottom = height, top = 0` gives a y-down pixel space.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4x4 {
        let rl = right - left;
        let tb = top - bottom;
        let fun = far - near;
        Mat4x4 {
            c0: Vec4::new(2.0 / rl, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / tb, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -2.0 / fun, 0.0),
            c3: Vec4::new(
                -(right + left) / rl,
                -(top + bottom) / tb,
                -(far + near) / fun,
                1.0,
            ),
        }
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for (i, col) in [self.c0, self.c1, self.c2, self.c3].iter().enumerate() {
            arr[i * 4..i * 4 + 4].copy_from_slice(&col.as_array());
        }
        arr
    }

    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let cols = [self.c0, self.c1, self.c2, self.c3];
        let row = |r: usize| (0..4).map(|c| cols[c][r] * v[c]).sum::<f32>();
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn project(m: &Mat4x4, x: f32, y: f32) -> (f32, f32) {
        let p = m.mul_vec4(Vec4::new(x, y, 0.0, 1.0));
        (p.x, p.y)
    }

    #[test]
    fn pixel_ortho_maps_corners_to_clip_space() {
        let m = Mat4x4::ortho(0.0, 1200.0, 700.0, 0.0, -1.0, 1.0);

        let (x, y) = project(&m, 0.0, 0.0);
        assert_relative_eq!(x, -1.0);
        assert_relative_eq!(y, 1.0);

        let (x, y) = project(&m, 1200.0, 700.0);
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(y, -1.0);

        let (x, y) = project(&m, 600.0, 350.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.0);
    }

    #[test]
    fn cols_array_is_column_major() {
        let m = Mat4x4::ortho(0.0, 2.0, 2.0, 0.0, -1.0, 1.0);
        let arr = m.to_cols_array();
        // translation lives in the last column
        assert_relative_eq!(arr[12], -1.0);
        assert_relative_eq!(arr[13], 1.0);
        assert_relative_eq!(arr[15], 1.0);
    }
}
