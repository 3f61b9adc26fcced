pub mod arena;
pub mod particles;
pub mod standard_renderer;
pub mod traits;
pub mod types;
