//! A tiny local HTTP server that serves a fixed response, so tests can
//! verify what the client puts on the wire and hands back.
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
};
use tiny_http::{Response, Server};

pub struct TestServer {
    addr: SocketAddr,
    server: Arc<Server>,
    requests: Arc<AtomicUsize>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    /// Spawn a server that answers every request with the given status code
    /// and body.
    pub fn spawn(status: u16, body: &[u8]) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(AtomicUsize::new(0));

        let handle = {
            let server = server.clone();
            let requests = requests.clone();
            let body = body.to_vec();

            thread::spawn(move || {
                while let Ok(request) = server.recv() {
                    requests.fetch_add(1, Ordering::SeqCst);

                    let response = Response::from_data(body.clone()).with_status_code(status);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            addr,
            server,
            requests,
            handle: Some(handle),
        }
    }

    /// Get the HTTP URL of this server.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Get the number of requests received so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.unblock();

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
