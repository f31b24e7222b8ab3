use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MeshNode, SceneObject, Transform};
use crate::geometry::{Complexity, Geometry};
use crate::material::Material;
use crate::math::HexColor;
use crate::prompt::{keywords, ParsedPrompt};

const DECORATION_OFFSET: f32 = 1.5;
const DECORATION_SPHERE_COLOR: HexColor = HexColor::from_u32(0x8b5cf6);
const DECORATION_BOX_COLOR: HexColor = HexColor::from_u32(0xf97316);

/// Caller-supplied knobs, copied per generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub complexity: Complexity,
    pub size: f32,
    /// Used when the prompt names no color.
    pub color: HexColor,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            complexity: Complexity::Medium,
            size: 1.0,
            color: keywords::DEFAULT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("size must be a positive finite number, got {0}")]
    InvalidSize(f32),
}

/// Build the scene object for a parsed prompt.
///
/// The object is fully assembled before it is returned; nothing is attached
/// anywhere on failure.
pub fn build(parsed: &ParsedPrompt, options: &GenerationOptions) -> Result<SceneObject, BuildError> {
    if !options.size.is_finite() || options.size <= 0.0 {
        return Err(BuildError::InvalidSize(options.size));
    }

    let color = if parsed.color_matched {
        parsed.color
    } else {
        options.color
    };

    let geometry = Geometry::for_kind(parsed.kind, options.complexity);
    let material = Material::from_modifiers(color, parsed.modifiers);

    let mut primary = MeshNode::new(parsed.kind.name(), geometry, material);
    primary.transform = Transform::default().with_uniform_scale(options.size);
    primary.cast_shadow = true;
    primary.receive_shadow = true;

    let mut object = SceneObject::new(parsed.kind.name(), primary);

    if parsed.is_complex() {
        let mut sphere = MeshNode::new(
            "decoration-sphere",
            Geometry::sphere(0.2, 8, 8),
            Material::standard(DECORATION_SPHERE_COLOR),
        );
        sphere.transform = Transform::from_position(Vec3::new(DECORATION_OFFSET, 0.0, 0.0));
        sphere.cast_shadow = true;

        let mut cube = MeshNode::new(
            "decoration-box",
            Geometry::cuboid(0.3, 0.3, 0.3, 1),
            Material::standard(DECORATION_BOX_COLOR),
        );
        cube.transform = Transform::from_position(Vec3::new(-DECORATION_OFFSET, 0.0, 0.0));
        cube.cast_shadow = true;

        object.push(sphere);
        object.push(cube);
    }

    debug!("built {}", object.summary());
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{self, PrimitiveKind};

    #[test]
    fn test_rejects_bad_size() {
        let parsed = prompt::parse("cube");
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let options = GenerationOptions {
                size,
                ..Default::default()
            };
            assert!(build(&parsed, &options).is_err(), "size {}", size);
        }
    }

    #[test]
    fn test_options_color_used_without_keyword() {
        let options = GenerationOptions {
            color: HexColor::from_u32(0x123456),
            ..Default::default()
        };
        let object = build(&prompt::parse("a torus"), &options).unwrap();
        assert_eq!(object.primary().material.color, HexColor::from_u32(0x123456));
    }

    #[test]
    fn test_keyword_color_beats_options_color() {
        let options = GenerationOptions {
            color: HexColor::from_u32(0x123456),
            ..Default::default()
        };
        let object = build(&prompt::parse("green cone"), &options).unwrap();
        assert_eq!(object.primary().material.color, HexColor::from_u32(0x22c55e));
        assert_eq!(object.primary().geometry.kind(), PrimitiveKind::Cone);
    }

    #[test]
    fn test_primary_scaled_and_shadowed() {
        let options = GenerationOptions {
            size: 2.5,
            ..Default::default()
        };
        let object = build(&prompt::parse("plane"), &options).unwrap();
        let primary = object.primary();
        assert_eq!(primary.transform.scale, Vec3::splat(2.5));
        assert!(primary.cast_shadow && primary.receive_shadow);
    }

    #[test]
    fn test_decorations_placed_on_x_axis() {
        let object = build(&prompt::parse("complex"), &GenerationOptions::default()).unwrap();
        let decorations = object.decorations();
        assert_eq!(decorations.len(), 2);
        assert_eq!(decorations[0].transform.position, Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(decorations[0].material.color, DECORATION_SPHERE_COLOR);
        assert_eq!(decorations[1].transform.position, Vec3::new(-1.5, 0.0, 0.0));
        assert_eq!(decorations[1].geometry.kind(), PrimitiveKind::Box);
        assert!(decorations.iter().all(|d| d.cast_shadow));
    }
}
