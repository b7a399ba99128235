use crate::{
    classifier::{Classification, PendingReason},
    Category, EntityKind, EntitySnapshot, HostCapabilities, IMAGE_REFERENCE, LINE_ART_MODIFIER,
    MODIFIERS,
};

const IMAGE_NAME_HINTS: [&str; 3] = ["image", "img", "reference"];
const LINE_ART_NAME_HINT: &str = "lineart";
const LINE_ART_NAME_HINT_KO: &str = "라인아트";

/// One entry of the ordered rule list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassificationRule {
    Camera,
    Light,
    ImageMarker,
    LineArt,
    GenericRoot,
}

impl ClassificationRule {
    /// Rule list in priority order. The first rule that returns `Some` wins.
    pub const DEFAULT_ORDER: [ClassificationRule; 5] = [
        ClassificationRule::Camera,
        ClassificationRule::Light,
        ClassificationRule::ImageMarker,
        ClassificationRule::LineArt,
        ClassificationRule::GenericRoot,
    ];

    /// `None` means the rule does not apply and the next one is tried.
    pub fn evaluate(
        &self,
        entity: &EntitySnapshot,
        capabilities: &HostCapabilities,
    ) -> Option<Classification> {
        match self {
            ClassificationRule::Camera => (entity.kind == EntityKind::CameraLike)
                .then_some(Classification::Matched(Category::Cameras)),
            ClassificationRule::Light => (entity.kind == EntityKind::LightLike)
                .then_some(Classification::Matched(Category::Lighting)),
            ClassificationRule::ImageMarker => image_marker(entity, capabilities),
            ClassificationRule::LineArt => line_art(entity, capabilities),
            ClassificationRule::GenericRoot => (entity.kind == EntityKind::GenericRoot)
                .then_some(Classification::Matched(Category::Root)),
        }
    }
}

fn image_marker(
    entity: &EntitySnapshot,
    capabilities: &HostCapabilities,
) -> Option<Classification> {
    if entity.kind != EntityKind::ImageMarker {
        return None;
    }

    if capabilities.structured_image_reference {
        if entity.attributes.contains(IMAGE_REFERENCE) {
            return Some(Classification::Matched(Category::Images));
        }
        return Some(Classification::Pending(PendingReason::ImageReferenceMissing));
    }

    let name = entity.name.to_lowercase();
    IMAGE_NAME_HINTS
        .iter()
        .any(|hint| name.contains(hint))
        .then_some(Classification::Matched(Category::Images))
}

fn line_art(entity: &EntitySnapshot, capabilities: &HostCapabilities) -> Option<Classification> {
    if has_line_art_name(&entity.name) {
        return Some(Classification::Matched(Category::LineArt));
    }

    if entity.kind != EntityKind::LineArtMarker || !capabilities.line_art_modifiers {
        return None;
    }

    match entity.attributes.list(MODIFIERS) {
        Some(modifiers) if modifiers.iter().any(|m| m == LINE_ART_MODIFIER) => {
            Some(Classification::Matched(Category::LineArt))
        }
        Some(_) => None,
        None => Some(Classification::Pending(PendingReason::ModifierStackMissing)),
    }
}

/// "Line Art", "line_art.001" and "LINEART" all count.
pub(crate) fn has_line_art_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    if lowered.contains(LINE_ART_NAME_HINT_KO) {
        return true;
    }
    let squashed: String = lowered
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    squashed.contains(LINE_ART_NAME_HINT)
}
