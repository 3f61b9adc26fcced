pub mod audio;
pub mod config;
pub mod input;
pub mod presenter;
pub mod render;
pub mod replay;
pub mod views;
