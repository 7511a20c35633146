//! Minimal HTTP/1.1 server answering HEAD requests for integration tests.
//!
//! Serves a fixed status line and optional Content-Length/Location headers,
//! so probe behavior can be exercised against real sockets.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[derive(Debug, Clone)]
pub struct HeadServerOptions {
    /// Status line sent first, e.g. "HTTP/1.1 200 OK".
    pub status_line: String,
    /// Content-Length header value; None omits the header.
    pub content_length: Option<u64>,
    /// Location header value (pair with a 3xx status line); None omits it.
    pub location: Option<String>,
}

impl Default for HeadServerOptions {
    fn default() -> Self {
        Self {
            status_line: "HTTP/1.1 200 OK".to_string(),
            content_length: Some(100),
            location: None,
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(opts: HeadServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &HeadServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let mut response = format!("{}\r\n", opts.status_line);
    if let Some(len) = opts.content_length {
        response.push_str(&format!("Content-Length: {}\r\n", len));
    }
    if let Some(location) = &opts.location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
}
