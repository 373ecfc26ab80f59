//! A small blocking HTTP fetcher for TCGplayer price point data, built on
//! curl.
//!
//! The crate exposes a minimal [`Client`] that performs one GET request at a
//! time and buffers the entire response body in memory, in the order the
//! chunks were received. HTTP error statuses are not treated as failures;
//! only transport-level problems (DNS, connect, TLS, reading the response)
//! produce an [`Error`].
//!
//! # Examples
//!
//! ```no_run
//! let url = pricefetch::pricepoints_url(610510);
//! let response = pricefetch::get(&url)?;
//!
//! println!("{}", String::from_utf8_lossy(response.body()));
//! # Ok::<(), pricefetch::Error>(())
//! ```
//!
//! Diagnostics are emitted through the [`log`] crate and are silent unless a
//! logger is installed.

pub mod client;
pub mod error;

mod handler;
mod parse;

pub use crate::client::Client;
pub use crate::error::Error;

/// A fully buffered HTTP response.
pub type Response = http::Response<Vec<u8>>;

/// Base URL of the price lookup API.
pub const API_BASE: &str = "https://mpapi.tcgplayer.com/v2";

/// Build the price points URL for the given product listing.
pub fn pricepoints_url(product_id: u32) -> String {
    format!("{}/product/{}/pricepoints", API_BASE, product_id)
}

/// Send a GET request to the given URI using a one-off client.
pub fn get(uri: &str) -> Result<Response, Error> {
    Client::new().get(uri)
}

#[cfg(test)]
mod tests {
    #[test]
    fn pricepoints_url_includes_the_product_id() {
        assert_eq!(
            super::pricepoints_url(610510),
            "https://mpapi.tcgplayer.com/v2/product/610510/pricepoints"
        );
    }
}
