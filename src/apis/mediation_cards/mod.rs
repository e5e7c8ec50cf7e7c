mod api;
mod model;

pub use api::MediationCardsApi;
pub use model::*;
