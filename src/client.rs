//! The HTTP client implementation.

use crate::{handler::Collector, Error, Response};
use curl::easy::Easy2;
use once_cell::sync::Lazy;
use std::fmt;

static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "curl/{} pricefetch/{}",
        curl::Version::get().version(),
        env!("CARGO_PKG_VERSION")
    )
});

/// A blocking HTTP client for fetching price data.
///
/// A [`Client`] owns a single curl easy handle and performs one request at a
/// time. The handle, along with any connection resources curl holds for it,
/// is released when the client is dropped, on every exit path.
///
/// # Examples
///
/// ```no_run
/// use pricefetch::Client;
///
/// let mut client = Client::new();
/// let response = client.get("https://example.org")?;
///
/// println!("{}", String::from_utf8_lossy(response.body()));
/// # Ok::<(), pricefetch::Error>(())
/// ```
pub struct Client {
    /// A curl easy handle used to execute transfers.
    handle: Easy2<Collector>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create a new client.
    pub fn new() -> Self {
        Self {
            handle: Easy2::new(Collector::new()),
        }
    }

    /// Send a GET request to the given URI, blocking until the transfer
    /// completes or fails.
    ///
    /// The entire response body is accumulated in memory, exactly as
    /// received, with no decoding applied. Any HTTP status counts as a
    /// completed exchange, including 4xx and 5xx; only transport-level
    /// failures (DNS, connect, TLS, read) produce an [`Error`].
    ///
    /// The URI is passed to curl verbatim without validation, so a malformed
    /// URI surfaces as a transport error as well. No timeout is configured
    /// beyond curl's own defaults, and redirects are not followed.
    pub fn get(&mut self, uri: &str) -> Result<Response, Error> {
        log::debug!("GET {}", uri);

        let easy = &mut self.handle;

        // Restore default options and discard state from a previous transfer.
        easy.reset();
        easy.get_mut().clear();

        easy.signal(false)?;
        easy.useragent(&USER_AGENT)?;
        easy.get(true)?;
        easy.url(uri)?;

        if let Err(e) = easy.perform() {
            log::debug!("curl error: {}", e);
            return Err(e.into());
        }

        easy.get_mut().take_response()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish()
    }
}
