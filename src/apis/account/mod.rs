mod api;
mod model;

pub use api::AccountApi;
pub use model::*;
