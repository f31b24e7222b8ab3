//! Bilingual keyword tables. Rule order is the match priority: for shape
//! and color the first rule with any keyword present wins.

use super::{Modifier, PrimitiveKind};
use crate::math::HexColor;

/// One rule: a value and the lowercase substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub value: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

const fn rule<T>(value: T, keywords: &'static [&'static str]) -> KeywordRule<T> {
    KeywordRule { value, keywords }
}

pub const SHAPE_RULES: &[KeywordRule<PrimitiveKind>] = &[
    rule(PrimitiveKind::Sphere, &["sphere", "ball", "шар"]),
    rule(PrimitiveKind::Cylinder, &["cylinder", "цилиндр"]),
    rule(PrimitiveKind::Cone, &["cone", "конус"]),
    rule(PrimitiveKind::Torus, &["torus", "тор", "donut"]),
    rule(PrimitiveKind::Plane, &["plane", "плоскость"]),
    rule(PrimitiveKind::Octahedron, &["octahedron", "октаэдр"]),
    rule(PrimitiveKind::Dodecahedron, &["dodecahedron", "додекаэдр"]),
    rule(PrimitiveKind::Icosahedron, &["icosahedron", "икосаэдр"]),
    rule(PrimitiveKind::Tetrahedron, &["tetrahedron", "тетраэдр"]),
];

pub const MODIFIER_RULES: &[KeywordRule<Modifier>] = &[
    rule(Modifier::Wireframe, &["wireframe", "каркас"]),
    rule(Modifier::Smooth, &["smooth", "гладкий"]),
    rule(Modifier::Metallic, &["metallic", "металлический"]),
    rule(Modifier::Glass, &["glass", "стекло"]),
];

pub const COLOR_RULES: &[KeywordRule<HexColor>] = &[
    rule(HexColor::from_u32(0xef4444), &["red", "красный"]),
    rule(HexColor::from_u32(0x3b82f6), &["blue", "синий"]),
    rule(HexColor::from_u32(0x22c55e), &["green", "зеленый"]),
    rule(HexColor::from_u32(0xeab308), &["yellow", "желтый"]),
    rule(HexColor::from_u32(0x8b5cf6), &["purple", "фиолетовый"]),
    rule(HexColor::from_u32(0xf97316), &["orange", "оранжевый"]),
    rule(HexColor::from_u32(0xec4899), &["pink", "розовый"]),
    rule(HexColor::from_u32(0xffffff), &["white", "белый"]),
    rule(HexColor::from_u32(0x000000), &["black", "черный"]),
];

/// "complex" plus the Russian stem shared by сложный/сложная/сложное.
pub const COMPLEX_KEYWORDS: &[&str] = &["complex", "сложн"];

pub const DEFAULT_KIND: PrimitiveKind = PrimitiveKind::Box;
pub const DEFAULT_COLOR: HexColor = HexColor::from_u32(0x6366f1);

/// Value of the first rule (in table order) that matches.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], lowered: &str) -> Option<T> {
    rules.iter().find(|r| r.matches(lowered)).map(|r| r.value)
}

/// Values of every rule that matches, in table order.
pub fn all_matches<'a, T: Copy>(
    rules: &'a [KeywordRule<T>],
    lowered: &'a str,
) -> impl Iterator<Item = T> + 'a {
    rules.iter().filter(move |r| r.matches(lowered)).map(|r| r.value)
}
