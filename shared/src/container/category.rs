use std::fmt;

use super::ColorTag;

/// Semantic group an entity is classified into.
///
/// Every category except [`Category::Root`] is backed by a canonical,
/// engine-managed container; `Root` places the entity directly under the
/// scene root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Category {
    Cameras,
    Lighting,
    Images,
    LineArt,
    Root,
}

impl Category {
    /// Default relative order of the canonical containers under the root.
    pub const CANONICAL: [Category; 4] = [
        Category::Cameras,
        Category::Lighting,
        Category::Images,
        Category::LineArt,
    ];

    /// Name of the backing container, `None` for the root.
    pub fn container_name(&self) -> Option<&'static str> {
        match self {
            Category::Cameras => Some("Cameras"),
            Category::Lighting => Some("Lighting"),
            Category::Images => Some("Images"),
            Category::LineArt => Some("LineArt"),
            Category::Root => None,
        }
    }

    /// Colour tag given to the backing container when the engine creates it.
    pub fn color_tag(&self) -> Option<ColorTag> {
        match self {
            Category::Cameras => Some(ColorTag::Color01),
            _ => None,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Category::Root)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.container_name() {
            Some(name) => f.write_str(name),
            None => f.write_str("<root>"),
        }
    }
}
