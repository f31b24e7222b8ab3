use glam::Vec3;

use crate::math::HexColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: HexColor,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: HexColor,
    pub intensity: f32,
    /// Shines from here toward the origin.
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: HexColor,
    pub intensity: f32,
    /// Range after which the light contributes nothing; 0 means unbounded.
    pub distance: f32,
    pub position: Vec3,
}

/// Ambient fill, a key light and an indigo accent from below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingRig {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub point: PointLight,
}

impl Default for LightingRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: HexColor::from_u32(0x404040),
                intensity: 0.6,
            },
            directional: DirectionalLight {
                color: HexColor::from_u32(0xffffff),
                intensity: 0.8,
                position: Vec3::new(10.0, 10.0, 5.0),
                cast_shadow: true,
            },
            point: PointLight {
                color: HexColor::from_u32(0x6366f1),
                intensity: 0.5,
                distance: 100.0,
                position: Vec3::new(-10.0, -10.0, -10.0),
            },
        }
    }
}
