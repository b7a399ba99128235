mod category;
mod container_info;
mod container_key;

pub use category::Category;
pub use container_info::{ColorTag, ContainerInfo, Owner};
pub use container_key::ContainerKey;
