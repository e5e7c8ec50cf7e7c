mod api;
mod model;

pub use api::CountriesApi;
pub use model::*;
