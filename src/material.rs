use crate::math::HexColor;
use crate::prompt::{Modifier, ModifierSet};

/// Surface response family. Exactly one applies per material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    Standard {
        metalness: f32,
        roughness: f32,
    },
    Metallic {
        metalness: f32,
        roughness: f32,
    },
    Glass {
        opacity: f32,
        transmission: f32,
        thickness: f32,
    },
}

impl Shading {
    pub const STANDARD: Shading = Shading::Standard {
        metalness: 0.0,
        roughness: 1.0,
    };
    pub const METALLIC: Shading = Shading::Metallic {
        metalness: 0.8,
        roughness: 0.2,
    };
    pub const GLASS: Shading = Shading::Glass {
        opacity: 0.6,
        transmission: 0.9,
        thickness: 0.5,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: HexColor,
    pub shading: Shading,
    pub wireframe: bool,
}

impl Material {
    pub fn standard(color: HexColor) -> Self {
        Self {
            color,
            shading: Shading::STANDARD,
            wireframe: false,
        }
    }

    /// Metallic takes precedence over glass; wireframe composes with either.
    pub fn from_modifiers(color: HexColor, modifiers: ModifierSet) -> Self {
        let shading = if modifiers.contains(Modifier::Metallic) {
            Shading::METALLIC
        } else if modifiers.contains(Modifier::Glass) {
            Shading::GLASS
        } else {
            Shading::STANDARD
        };
        Self {
            color,
            shading,
            wireframe: modifiers.contains(Modifier::Wireframe),
        }
    }

    pub fn metalness(&self) -> f32 {
        match self.shading {
            Shading::Standard { metalness, .. } | Shading::Metallic { metalness, .. } => metalness,
            Shading::Glass { .. } => 0.0,
        }
    }

    pub fn roughness(&self) -> f32 {
        match self.shading {
            Shading::Standard { roughness, .. } | Shading::Metallic { roughness, .. } => roughness,
            Shading::Glass { .. } => 0.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self.shading {
            Shading::Glass { opacity, .. } => opacity,
            _ => 1.0,
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self.shading, Shading::Glass { .. })
    }
}
