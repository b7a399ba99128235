use super::ContainerKey;

/// Who created a container. Only `Engine` containers are ever reclaimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Engine,
    User,
}

/// Outliner colour tag, as offered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Color01,
    Color02,
    Color03,
    Color04,
    Color05,
    Color06,
    Color07,
    Color08,
}

/// Point-in-time description of a container as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerInfo {
    pub key: ContainerKey,
    pub name: String,
    pub owner: Owner,
    pub color_tag: Option<ColorTag>,
    pub member_count: usize,
    pub child_count: usize,
}

impl ContainerInfo {
    /// No direct members and no child containers.
    pub fn is_empty(&self) -> bool {
        self.member_count == 0 && self.child_count == 0
    }

    pub fn is_engine_owned(&self) -> bool {
        self.owner == Owner::Engine
    }
}
