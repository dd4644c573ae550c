mod component;
mod layout;
mod render;
mod state;
mod types;

pub use component::EcosystemMapCanvas;
pub use layout::{LayoutParams, compute_layout};
pub use types::{Catalog, Category, EcosystemMap, ServiceEntry, Shape};
