
pub use helpers::*;
pub use test_host::{MutationCounts, TestContainer, TestHost, ROOT_NAME};
