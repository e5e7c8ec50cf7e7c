mod api;
mod model;

pub use api::PaymentCardsApi;
pub use model::*;
