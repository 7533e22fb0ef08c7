pub mod interactive;
pub mod render;
pub mod submit;
