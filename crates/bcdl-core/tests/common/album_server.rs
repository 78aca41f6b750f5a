//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves static bodies by request path (404 otherwise) and counts hits per
//! path so tests can assert which URLs were fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct Routes {
    bodies: HashMap<String, Vec<u8>>,
    hits: HashMap<String, usize>,
}

#[derive(Clone)]
pub struct AlbumServer {
    base: String,
    authority: String,
    routes: Arc<Mutex<Routes>>,
}

impl AlbumServer {
    /// Starts a server in a background thread. Runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(Mutex::new(Routes::default()));
        let shared = Arc::clone(&routes);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&shared);
                thread::spawn(move || handle(stream, &routes));
            }
        });
        let authority = format!("127.0.0.1:{}", port);
        Self {
            base: format!("http://{}", authority),
            authority,
            routes,
        }
    }

    /// Registers `body` under `path` (must start with `/`).
    pub fn serve(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .bodies
            .insert(path.to_string(), body.into());
    }

    /// Absolute URL for `path`, e.g. `http://127.0.0.1:1234/album`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Protocol-relative URL for `path`, as album pages embed them.
    pub fn scheme_less_url(&self, path: &str) -> String {
        format!("//{}{}", self.authority, path)
    }

    /// Number of GETs seen for `path`, whatever the response.
    pub fn hits(&self, path: &str) -> usize {
        self.routes
            .lock()
            .unwrap()
            .hits
            .get(path)
            .copied()
            .unwrap_or(0)
    }
}

fn handle(mut stream: TcpStream, routes: &Mutex<Routes>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut first = request.lines().next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let path = first.next().unwrap_or("/").to_string();

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let body = {
        let mut routes = routes.lock().unwrap();
        *routes.hits.entry(path.clone()).or_insert(0) += 1;
        routes.bodies.get(&path).cloned()
    };

    match body {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}
