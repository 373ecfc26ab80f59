//! The curl callback handler that collects a response in memory.

use crate::{parse, Error, Response};
use curl::easy::{Handler, WriteError};
use http::{HeaderMap, StatusCode, Version};
use std::mem;

/// Receives callbacks from curl and incrementally builds up a response as
/// the transfer progresses.
///
/// The response body is accumulated one `write` callback per received chunk,
/// in receipt order, and is read out exactly once after the transfer
/// completes.
pub(crate) struct Collector {
    /// Status code of the response.
    status: Option<StatusCode>,

    /// HTTP version of the response.
    version: Option<Version>,

    /// Response headers received so far.
    headers: HeaderMap,

    /// Accumulated response body.
    buffer: Vec<u8>,
}

impl Collector {
    pub(crate) fn new() -> Self {
        Self {
            status: None,
            version: None,
            headers: HeaderMap::new(),
            buffer: Vec::new(),
        }
    }

    /// Discard all state collected from a previous transfer.
    pub(crate) fn clear(&mut self) {
        self.status = None;
        self.version = None;
        self.headers.clear();
        self.buffer.clear();
    }

    /// Consume the collected state and build the final response.
    pub(crate) fn take_response(&mut self) -> Result<Response, Error> {
        let mut builder = http::Response::builder();

        if let Some(status) = self.status.take() {
            builder = builder.status(status);
        }

        if let Some(version) = self.version.take() {
            builder = builder.version(version);
        }

        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers.drain());
        }

        builder
            .body(mem::take(&mut self.buffer))
            .map_err(Error::InvalidHttpFormat)
    }
}

impl Handler for Collector {
    /// Gets called by curl for each line of data in the HTTP response header.
    fn header(&mut self, data: &[u8]) -> bool {
        // Curl calls this function for all lines in the response not part of
        // the response body, not just for headers. We need to inspect the
        // contents of each line in order to determine what it is and how to
        // parse it, just as if we were reading from the socket of a HTTP/1.0
        // or HTTP/1.1 connection ourselves.

        // Is this the status line?
        if let Some((version, status)) = parse::parse_status_line(data) {
            self.version = Some(version);
            self.status = Some(status);

            // Also clear any pre-existing headers that might be left over
            // from a previous intermediate response.
            self.headers.clear();

            return true;
        }

        // Is this a header line?
        if let Some((name, value)) = parse::parse_header(data) {
            self.headers.append(name, value);
            return true;
        }

        // Is this the end of the response header?
        if data == b"\r\n" {
            return true;
        }

        // Unknown header line we don't know how to parse.
        false
    }

    /// Gets called by curl when bytes from the response body are received.
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        log::trace!("received {} bytes of data", data.len());

        self.buffer.extend_from_slice(data);

        Ok(data.len())
    }
}
