//! Request location entities: admin screen and front-end queried object.

pub mod location;
pub mod model;

pub use location::QueriedObject;
pub use model::Screen;
