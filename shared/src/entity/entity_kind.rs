/// The host's coarse type for an entity.
///
/// Kind alone does not decide classification: image and line-art markers also
/// need attribute or name signals, see [`crate::Classifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    CameraLike,
    LightLike,
    ImageMarker,
    LineArtMarker,
    /// Plain geometry and helpers that belong directly under the root.
    GenericRoot,
    Unclassified,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::CameraLike => "camera-like",
            EntityKind::LightLike => "light-like",
            EntityKind::ImageMarker => "image-marker",
            EntityKind::LineArtMarker => "line-art-marker",
            EntityKind::GenericRoot => "generic-root",
            EntityKind::Unclassified => "unclassified",
        }
    }
}
