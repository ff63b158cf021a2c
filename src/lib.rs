pub mod analysis;
pub mod config;
pub mod data;
pub mod export;
pub mod pipeline;
pub mod plotting;
pub mod selection;
#[cfg(feature = "gui")]
pub mod viewer;
