use prompt3d::geometry::{Complexity, GeometryParams};
use prompt3d::material::Shading;
use prompt3d::math::HexColor;
use prompt3d::prompt::{parse, PrimitiveKind};
use prompt3d::scene::{build, GenerationOptions};

fn options(complexity: Complexity) -> GenerationOptions {
    GenerationOptions {
        complexity,
        ..Default::default()
    }
}

#[cfg(test)]
mod density_tests {
    use super::*;

    const PROMPTS: [(&str, PrimitiveKind); 10] = [
        ("box", PrimitiveKind::Box),
        ("sphere", PrimitiveKind::Sphere),
        ("cylinder", PrimitiveKind::Cylinder),
        ("cone", PrimitiveKind::Cone),
        ("torus", PrimitiveKind::Torus),
        ("plane", PrimitiveKind::Plane),
        ("octahedron", PrimitiveKind::Octahedron),
        ("dodecahedron", PrimitiveKind::Dodecahedron),
        ("icosahedron", PrimitiveKind::Icosahedron),
        ("tetrahedron", PrimitiveKind::Tetrahedron),
    ];

    #[test]
    fn test_kind_and_density_for_every_tier() {
        for complexity in [Complexity::Low, Complexity::Medium, Complexity::High] {
            for (text, kind) in PROMPTS {
                let object = build(&parse(text), &options(complexity)).unwrap();
                let geometry = &object.primary().geometry;
                assert_eq!(geometry.kind(), kind);
                let expected = match kind {
                    PrimitiveKind::Octahedron
                    | PrimitiveKind::Dodecahedron
                    | PrimitiveKind::Icosahedron
                    | PrimitiveKind::Tetrahedron => None,
                    _ => Some(complexity.segments()),
                };
                assert_eq!(geometry.density(), expected, "{} at {:?}", text, complexity);
            }
        }
    }

    #[test]
    fn test_segment_axes() {
        let sphere = build(&parse("red sphere"), &options(Complexity::Medium)).unwrap();
        assert_eq!(
            *sphere.primary().geometry.params(),
            GeometryParams::Sphere {
                radius: 1.0,
                width_segments: 16,
                height_segments: 16,
            }
        );

        // only the torus halves an axis
        let torus = build(&parse("torus"), &options(Complexity::High)).unwrap();
        assert_eq!(
            *torus.primary().geometry.params(),
            GeometryParams::Torus {
                radius: 1.0,
                tube: 0.4,
                radial_segments: 16,
                tubular_segments: 32,
            }
        );
    }

    #[test]
    fn test_higher_tier_has_more_triangles() {
        let low = build(&parse("cylinder"), &options(Complexity::Low)).unwrap();
        let high = build(&parse("cylinder"), &options(Complexity::High)).unwrap();
        assert!(
            high.primary().geometry.mesh().triangle_count()
                > low.primary().geometry.mesh().triangle_count()
        );
    }
}

#[cfg(test)]
mod material_tests {
    use super::*;

    #[test]
    fn test_metallic_and_glass_exclusive() {
        let object = build(&parse("metallic glass sphere"), &GenerationOptions::default()).unwrap();
        assert_eq!(object.primary().material.shading, Shading::METALLIC);
    }

    #[test]
    fn test_wireframe_with_glass() {
        let object = build(&parse("glass wireframe cone"), &GenerationOptions::default()).unwrap();
        let material = object.primary().material;
        assert!(material.wireframe);
        assert_eq!(material.shading, Shading::GLASS);
    }

    #[test]
    fn test_wireframe_with_metallic() {
        let object = build(&parse("wireframe metallic box"), &GenerationOptions::default()).unwrap();
        let material = object.primary().material;
        assert!(material.wireframe);
        assert_eq!(material.shading, Shading::METALLIC);
    }
}

#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn test_red_sphere_scenario() {
        let object = build(&parse("red sphere"), &options(Complexity::Medium)).unwrap();
        let primary = object.primary();
        assert_eq!(primary.geometry.kind(), PrimitiveKind::Sphere);
        assert_eq!(primary.geometry.density(), Some(16));
        assert_eq!(primary.material.color, HexColor::from_u32(0xef4444));
        assert_eq!(object.mesh_count(), 1);
    }

    #[test]
    fn test_complex_composition_scenario() {
        for complexity in [Complexity::Low, Complexity::Medium, Complexity::High] {
            let object = build(&parse("сложная композиция"), &options(complexity)).unwrap();
            assert_eq!(object.mesh_count(), 3);
            assert_eq!(object.primary().material.color, HexColor::from_u32(0x6366f1));
        }
    }

    #[test]
    fn test_complex_english_keyword() {
        let object = build(&parse("complex red torus"), &GenerationOptions::default()).unwrap();
        assert_eq!(object.mesh_count(), 3);
        assert_eq!(object.primary().geometry.kind(), PrimitiveKind::Torus);
    }

    #[test]
    fn test_plain_prompt_has_single_mesh() {
        let object = build(&parse("yellow plane"), &GenerationOptions::default()).unwrap();
        assert_eq!(object.mesh_count(), 1);
        assert!(object.decorations().is_empty());
    }

    #[test]
    fn test_primary_always_casts_and_receives_shadows() {
        for text in ["box", "glass sphere", "complex wireframe cone"] {
            let object = build(&parse(text), &GenerationOptions::default()).unwrap();
            assert!(object.primary().cast_shadow);
            assert!(object.primary().receive_shadow);
        }
    }

    #[test]
    fn test_size_scales_bounds() {
        let small = build(&parse("box"), &GenerationOptions::default()).unwrap();
        let large = build(
            &parse("box"),
            &GenerationOptions {
                size: 3.0,
                ..Default::default()
            },
        )
        .unwrap();
        let small_extent = small.bounds().unwrap().extent();
        let large_extent = large.bounds().unwrap().extent();
        assert!((large_extent.x - small_extent.x * 3.0).abs() < 1e-4);
    }
}
