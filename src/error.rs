//! Types for error handling.

use std::error::Error as StdError;
use std::fmt;

/// All possible types of errors that can be returned from a fetch.
///
/// Every variant is a transport-level failure. HTTP error statuses such as
/// 404 or 500 are not errors; they are returned as ordinary responses.
#[derive(Debug)]
pub enum Error {
    /// The server certificate could not be validated.
    BadServerCertificate(Option<String>),
    /// Failed to connect to the server.
    ConnectFailed,
    /// Couldn't resolve host name.
    CouldntResolveHost,
    /// An unrecognized error thrown by curl.
    Curl(String),
    /// Validation error when parsing the response.
    InvalidHttpFormat(http::Error),
    /// The server did not send a response.
    NoResponse,
    /// An error occurred while reading the response body.
    ResponseBodyError(Option<String>),
    /// Failed to connect over a secure socket.
    SSLConnectFailed(Option<String>),
    /// The request took longer than the transport allows.
    Timeout,
}

impl Error {
    fn description(&self) -> &str {
        match self {
            Error::BadServerCertificate(Some(e)) => e,
            Error::BadServerCertificate(None) => "the server certificate could not be validated",
            Error::ConnectFailed => "failed to connect to the server",
            Error::CouldntResolveHost => "couldn't resolve host name",
            Error::Curl(e) => e,
            Error::InvalidHttpFormat(_) => "invalid HTTP response",
            Error::NoResponse => "server did not send a response",
            Error::ResponseBodyError(Some(e)) => e,
            Error::ResponseBodyError(None) => "error reading the response body",
            Error::SSLConnectFailed(Some(e)) => e,
            Error::SSLConnectFailed(None) => "failed to connect over a secure socket",
            Error::Timeout => "request took longer than the transport allows",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self, self.description())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidHttpFormat(e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<curl::Error> for Error {
    fn from(error: curl::Error) -> Error {
        if error.is_peer_failed_verification() || error.is_ssl_cacert() {
            Error::BadServerCertificate(error.extra_description().map(str::to_owned))
        } else if error.is_couldnt_connect() {
            Error::ConnectFailed
        } else if error.is_couldnt_resolve_host() {
            Error::CouldntResolveHost
        } else if error.is_got_nothing() {
            Error::NoResponse
        } else if error.is_write_error() || error.is_partial_file() {
            Error::ResponseBodyError(error.extra_description().map(str::to_owned))
        } else if error.is_ssl_connect_error() {
            Error::SSLConnectFailed(error.extra_description().map(str::to_owned))
        } else if error.is_operation_timedout() {
            Error::Timeout
        } else {
            Error::Curl(error.description().to_owned())
        }
    }
}

#[doc(hidden)]
impl From<http::Error> for Error {
    fn from(error: http::Error) -> Error {
        Error::InvalidHttpFormat(error)
    }
}
