use log::debug;

/// Host version that first reports the structured image reference on image
/// markers.
pub const STRUCTURED_IMAGE_REFERENCE_SINCE: (u16, u16, u16) = (2, 80, 0);

/// Host version that first exposes the modifier stack of line-art markers.
pub const LINE_ART_MODIFIERS_SINCE: (u16, u16, u16) = (2, 93, 0);

/// Which classification signals the host can supply.
///
/// Resolved once from the host adapter and handed to the classifier, so rule
/// bodies never check host versions themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    pub structured_image_reference: bool,
    pub line_art_modifiers: bool,
}

impl HostCapabilities {
    /// Every signal available.
    pub fn full() -> Self {
        Self {
            structured_image_reference: true,
            line_art_modifiers: true,
        }
    }

    /// Only kinds and names; every signal rule falls back to name heuristics.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn from_version(version: (u16, u16, u16)) -> Self {
        let capabilities = Self {
            structured_image_reference: version >= STRUCTURED_IMAGE_REFERENCE_SINCE,
            line_art_modifiers: version >= LINE_ART_MODIFIERS_SINCE,
        };
        debug!("Host {:?} resolved to {:?}", version, capabilities);
        capabilities
    }
}
