pub mod args;
pub mod cache;
pub mod error;
pub mod model;
pub mod normalize;
pub mod odds;
pub mod resolve;
pub mod storage;
pub mod controller {
    pub mod feeds;
    pub mod table;
}
pub mod mvu {
    pub mod runtime;
    pub mod table;
}
pub mod view {
    pub mod index;
    pub mod table;
}

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::AppError;
