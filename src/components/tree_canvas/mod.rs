mod component;
mod input;
mod random;
mod render;
mod router;
mod state;
mod store;
mod types;

pub use component::TreeCanvas;
pub use types::TreeConfig;
