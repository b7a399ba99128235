use scene_sorter_shared::EntityId;

use crate::TestHost;

/// Assert the entity is a member of exactly one container, the one named
#[macro_export]
macro_rules! assert_sole_member {
    ($host:expr, $entity:expr, $name:expr) => {
        assert_eq!(
            $host.container_names_of(&$entity),
            vec![$name.to_string()],
            "{} should belong only to {}",
            $entity,
            $name
        );
    };
}

/// Assert the root's leading children are exactly `names`, in order
#[macro_export]
macro_rules! assert_leading_children {
    ($host:expr, $names:expr) => {
        let children = $host.root_child_names();
        let expected: Vec<String> = $names.iter().map(|name| name.to_string()).collect();
        assert!(
            children.starts_with(&expected),
            "root children {:?} should start with {:?}",
            children,
            expected
        );
    };
}

/// Names of all containers each entity belongs to, for before/after comparisons
pub fn membership(host: &TestHost, entities: &[EntityId]) -> Vec<Vec<String>> {
    entities
        .iter()
        .map(|entity| host.container_names_of(entity))
        .collect()
}
