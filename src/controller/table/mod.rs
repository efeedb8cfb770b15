pub mod aggregators;
pub mod builder;
pub mod http_handlers;
pub mod sort_utils;

pub use aggregators::*;
pub use builder::*;
pub use http_handlers::*;
pub use sort_utils::*;
