pub mod advertisement;
pub mod content;
pub mod context;
