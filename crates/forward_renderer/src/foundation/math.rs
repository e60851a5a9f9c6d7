//! Math utilities and types
//!
//! Provides the vector and matrix types used by the scene graph and the
//! frame pipeline, plus the handful of transform constructors the renderer needs.

pub use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 3, the default vertical field of view
    pub const THIRD_PI: f32 = std::f32::consts::FRAC_PI_3;

    /// Pi / 2
    pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a uniform scale matrix
    fn uniform_scale(scale: f32) -> Mat4;

    /// Create a non-uniform scale matrix
    fn nonuniform_scale(x: f32, y: f32, z: f32) -> Mat4;

    /// Create a translation matrix
    fn translation(offset: Vec3) -> Mat4;

    /// Create a right-handed perspective projection with depth mapped to [0, 1]
    fn perspective_rh_zo(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Upper-left 3x3 block
    fn upper_left_3x3(&self) -> Mat3;

    /// Normal-correcting matrix: upper-left 3x3 of `transpose(inverse(self))`.
    ///
    /// Returns `None` when the matrix is not invertible.
    fn normal_matrix(&self) -> Option<Mat3>;
}

impl Mat4Ext for Mat4 {
    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn uniform_scale(scale: f32) -> Mat4 {
        Mat4::new_scaling(scale)
    }

    fn nonuniform_scale(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_nonuniform_scaling(&Vec3::new(x, y, z))
    }

    fn translation(offset: Vec3) -> Mat4 {
        Mat4::new_translation(&offset)
    }

    fn perspective_rh_zo(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Camera looks down -Z; clip-space depth runs from 0 at the near plane
        // to 1 at the far plane.
        let ys = 1.0 / (fov_y * 0.5).tan();
        let xs = ys / aspect;
        let zs = far / (near - far);

        Mat4::new(
            xs,  0.0, 0.0,  0.0,
            0.0, ys,  0.0,  0.0,
            0.0, 0.0, zs,   near * zs,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    fn upper_left_3x3(&self) -> Mat3 {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }

    fn normal_matrix(&self) -> Option<Mat3> {
        self.try_inverse()
            .map(|inverse| inverse.transpose().upper_left_3x3())
    }
}

/// Pack a 3-vector into a 16-byte aligned GPU slot (w = 0)
pub fn pad_vec3(v: &Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

/// Pack a 3x3 matrix as three 16-byte padded columns
pub fn pad_mat3(m: &Mat3) -> [[f32; 4]; 3] {
    let mut columns = [[0.0; 4]; 3];
    for (index, column) in columns.iter_mut().enumerate() {
        let source = m.column(index);
        column[..3].copy_from_slice(&[source[0], source[1], source[2]]);
    }
    columns
}
