//! Prompt interpretation: free text to a structured shape description.
//!
//! Matching is plain substring containment on the lowercased text, over
//! English and Russian vocabularies. Parsing never fails; text without any
//! known keyword yields the default box in indigo with no modifiers.

pub mod keywords;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::HexColor;

/// Canonical solid the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Plane,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    Tetrahedron,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 10] = [
        PrimitiveKind::Box,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Cone,
        PrimitiveKind::Torus,
        PrimitiveKind::Plane,
        PrimitiveKind::Octahedron,
        PrimitiveKind::Dodecahedron,
        PrimitiveKind::Icosahedron,
        PrimitiveKind::Tetrahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Box => "box",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Cone => "cone",
            PrimitiveKind::Torus => "torus",
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Octahedron => "octahedron",
            PrimitiveKind::Dodecahedron => "dodecahedron",
            PrimitiveKind::Icosahedron => "icosahedron",
            PrimitiveKind::Tetrahedron => "tetrahedron",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-exclusive visual trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Wireframe,
    Smooth,
    Metallic,
    Glass,
}

impl Modifier {
    const fn bit(self) -> u8 {
        match self {
            Modifier::Wireframe => 1,
            Modifier::Smooth => 1 << 1,
            Modifier::Metallic => 1 << 2,
            Modifier::Glass => 1 << 3,
        }
    }
}

/// Set of modifiers, iterated in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet(u8);

impl ModifierSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        [
            Modifier::Wireframe,
            Modifier::Smooth,
            Modifier::Metallic,
            Modifier::Glass,
        ]
        .into_iter()
        .filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(ModifierSet::empty(), ModifierSet::with)
    }
}

/// Structured reading of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    pub kind: PrimitiveKind,
    pub modifiers: ModifierSet,
    pub color: HexColor,
    /// False when `color` is the fallback rather than a keyword match.
    pub color_matched: bool,
    /// Raw prompt as typed.
    pub text: String,
}

impl ParsedPrompt {
    pub fn is_complex(&self) -> bool {
        mentions_complex(&self.text)
    }
}

/// Parse a prompt. Total and deterministic.
pub fn parse(text: &str) -> ParsedPrompt {
    let lowered = text.to_lowercase();

    let kind = keywords::first_match(keywords::SHAPE_RULES, &lowered)
        .unwrap_or(keywords::DEFAULT_KIND);
    let modifiers = keywords::all_matches(keywords::MODIFIER_RULES, &lowered).collect();
    let matched_color = keywords::first_match(keywords::COLOR_RULES, &lowered);

    ParsedPrompt {
        kind,
        modifiers,
        color: matched_color.unwrap_or(keywords::DEFAULT_COLOR),
        color_matched: matched_color.is_some(),
        text: text.to_string(),
    }
}

/// Whether the raw text asks for a "complex" composition.
pub fn mentions_complex(text: &str) -> bool {
    let lowered = text.to_lowercase();
    keywords::COMPLEX_KEYWORDS
        .iter()
        .any(|k| lowered.contains(k))
}

/// Sample prompts offered in the UI.
pub fn example_prompts() -> &'static [&'static str] {
    &[
        "красный шар",
        "синий куб с металлическим покрытием",
        "зеленый цилиндр",
        "желтый конус",
        "фиолетовый тор",
        "стеклянная сфера",
        "каркасный октаэдр",
        "сложная композиция из геометрических фигур",
        "белый додекаэдр",
        "черный икосаэдр",
    ]
}
