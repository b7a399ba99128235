use std::collections::HashMap;

/// Key of the structured image reference on image markers. Only reported by
/// hosts advertising `structured_image_reference`.
pub const IMAGE_REFERENCE: &str = "image_reference";

/// Key of the modifier type list on line-art markers. Only reported by hosts
/// advertising `line_art_modifiers`.
pub const MODIFIERS: &str = "modifiers";

/// Modifier type that marks a stroke entity as line-art output.
pub const LINE_ART_MODIFIER: &str = "LINEART";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

/// Version dependent attributes reported by the host for one entity.
///
/// A missing key means the host has not (yet) materialized that attribute,
/// which is different from a key that is present but empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeBag {
    inner: HashMap<String, AttributeValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: AttributeValue) -> Option<AttributeValue> {
        self.inner.insert(key.to_string(), value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.inner.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttributeValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.get(key) {
            Some(AttributeValue::List(list)) => Some(list.as_slice()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
