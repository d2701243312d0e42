//! Loopback HTTP server for tests
//!
//! Serves a fixed list of canned responses, one per connection, in order.
//! Every response carries `Connection: close` so the blocking client opens
//! a fresh connection per request and the ordering stays deterministic.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

pub(crate) struct CannedResponse {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn json(status: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: "200 OK",
            content_type: "application/octet-stream",
            body: body.to_vec(),
        }
    }
}

/// Spawn a server that answers the given responses in order, then exits.
/// Returns the base URL, e.g. `http://127.0.0.1:49152`.
pub(crate) fn serve(responses: Vec<CannedResponse>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            // Read until the end of the request headers; the body, if any,
            // stays unread and the connection is closed after answering.
            let mut buf = vec![0u8; 16 * 1024];
            let mut total = 0;
            loop {
                match stream.read(&mut buf[total..]) {
                    Ok(0) => break,
                    Ok(n) => {
                        total += n;
                        if buf[..total].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                        if total == buf.len() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                response.status,
                response.content_type,
                response.body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&response.body);
        }
    });

    format!("http://{addr}")
}
