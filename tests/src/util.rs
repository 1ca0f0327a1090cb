use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const MAX_REQUEST: usize = 8192;

/// A one-route HTTP server that answers every request with the same canned response.
///
/// Only the request lines are recorded. The server stops when dropped.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Answers with `status` and a JSON `body`.
    pub async fn respond(status: u16, body: &str) -> std::io::Result<Self> {
        let reason = if status == 200 { "OK" } else { "Stub" };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        Self::start(Some(response)).await
    }

    /// Accepts connections and reads requests but never answers.
    pub async fn silent() -> std::io::Result<Self> {
        Self::start(None).await
    }

    async fn start(response: Option<String>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            let mut parked: Vec<TcpStream> = Vec::new();
            while let Ok((mut socket, _)) = listener.accept().await {
                let request_line = read_request_line(&mut socket).await;
                if let Some(line) = request_line {
                    if let Ok(mut requests) = log.lock() {
                        requests.push(line);
                    }
                }

                match &response {
                    Some(response) => {
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    }
                    None => parked.push(socket),
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Base URL to hand to [`ouilookup_common::config::Config::api_url`].
    pub fn api_url(&self) -> String {
        format!("http://{}/v2/macs", self.addr)
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Reads until the end of the request headers and returns the first line.
async fn read_request_line(socket: &mut TcpStream) -> Option<String> {
    let mut buf = vec![0u8; MAX_REQUEST];
    let mut read = 0;

    while read < buf.len() {
        match socket.read(&mut buf[read..]).await {
            Ok(0) | Err(_) => break,
            Ok(n) => read += n,
        }
        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    String::from_utf8_lossy(&buf[..read])
        .lines()
        .next()
        .map(str::to_string)
}

/// An address nothing listens on.
pub async fn closed_api_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/v2/macs"))
}
