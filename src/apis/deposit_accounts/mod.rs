mod api;
mod model;

pub use api::DepositAccountsApi;
pub use model::*;
