mod sorter;
mod sorter_config;

pub use sorter::Sorter;
pub use sorter_config::SorterConfig;
