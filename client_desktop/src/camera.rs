//! Camera for Pong game
//!
//! Simple 2D orthographic camera

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for 2D game
    /// Arena is `width` x `height` units, origin at the bottom-left corner
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Look straight down at the middle of the arena
        let eye = Vec3::new(width / 2.0, height / 2.0, 10.0);
        let target = Vec3::new(width / 2.0, height / 2.0, 0.0);
        let up = Vec3::Y;
        let view = Mat4::look_at_rh(eye, target, up);

        // View space is centered on the eye, so the volume is symmetric
        let projection = Mat4::orthographic_rh(
            -width / 2.0,
            width / 2.0,
            -height / 2.0,
            height / 2.0,
            0.1,
            100.0,
        );

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_clip(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.view_proj() * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_arena_corners_map_to_clip_corners() {
        let camera = Camera::orthographic(800.0, 600.0);

        let bottom_left = to_clip(&camera, 0.0, 0.0);
        assert!((bottom_left.x + 1.0).abs() < 1e-5);
        assert!((bottom_left.y + 1.0).abs() < 1e-5);

        let top_right = to_clip(&camera, 800.0, 600.0);
        assert!((top_right.x - 1.0).abs() < 1e-5);
        assert!((top_right.y - 1.0).abs() < 1e-5);

        let center = to_clip(&camera, 400.0, 300.0);
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&center.z), "Inside the depth range");
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
