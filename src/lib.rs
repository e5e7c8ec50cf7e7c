//! Rust client for the [Tropipay](https://www.tropipay.com) payment APIs.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Create a set of API credentials (client ID and client secret) from the security section
//! of your Tropipay account. Use the development environment while integrating.
//!
//! ## Initialize a new `TropipayClient`
//!
//! Create a new [`TropipayClient`](crate::client::TropipayClient) and provide your client ID and client secret.
//!
//! ```rust,no_run
//! # use tropipay_rust::{TropipayClient, Error, apis::auth::Credentials, client::Environment};
//! # fn main() -> Result<(), Error> {
//! let tropipay = TropipayClient::builder(Credentials::new("some-client-id", "some-client-secret"))
//!     .with_environment(Environment::Production)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `TropipayClient` connects to the development environment and requests
//! every available scope. Use [`Credentials::with_scopes`](crate::apis::auth::Credentials::with_scopes)
//! to restrict them.
//!
//! No request is sent until the first API call: the access token is obtained lazily,
//! shared by all the API clients of the same `TropipayClient` and renewed automatically
//! shortly before it expires.
//!
//! ## Create a payment card
//!
//! ```rust,no_run
//! # use tropipay_rust::{TropipayClient, Error, apis::payment_cards::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let tropipay: TropipayClient = unreachable!();
//! #
//! let request = CreatePaymentCardRequestBuilder::default()
//!     .reference("my-order-1")
//!     .concept("Bicycle")
//!     .description("One red bicycle")
//!     .amount(30000u64)
//!     .currency(Currency::Eur)
//!     .reason_id(4u32)
//!     .expiration_days(1u32)
//!     .lang("es")
//!     .url_success("https://my.shop/success")
//!     .url_failed("https://my.shop/failed")
//!     .url_notification("https://my.shop/notify")
//!     .service_date("2021-08-20")
//!     .build()
//!     .unwrap();
//!
//! let card = tropipay.payment_cards.create(&request).await?;
//! println!("Payment link: {:?}", card.short_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Verify a webhook notification
//!
//! ```rust,no_run
//! # use tropipay_rust::TropipayClient;
//! # let tropipay: TropipayClient = unreachable!();
//! # let (original_currency_amount, bank_order_code, signature) = ("100", "ORD-1", "abc");
//! if !tropipay.verify_signature(original_currency_amount, bank_order_code, signature) {
//!     // Reject the notification
//! }
//! ```
//!
//! ## Errors
//!
//! Every runtime failure is reported as an [`ApiError`](crate::error::ApiError) carrying a
//! message, an HTTP status (500 when no response was received) and the error object returned
//! by Tropipay, if any. Failed requests are never retried.
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example create_payment_card
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod signature;

pub use client::TropipayClient;
pub use error::Error;
