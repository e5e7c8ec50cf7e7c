mod api;
mod model;

pub use api::HooksApi;
pub use model::*;
