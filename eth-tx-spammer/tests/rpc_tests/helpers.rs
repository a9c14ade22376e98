use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Handle to a mock JSON-RPC endpoint.
///
/// Records every decoded request envelope it receives so tests can assert
/// on methods, ids and parameters.
pub struct MockRpc {
    /// Base URL of the endpoint (http://127.0.0.1:<port>)
    pub url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockRpc {
    /// Snapshot of the request envelopes received so far, in arrival order.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// Spawns a mock JSON-RPC endpoint on a free port.
///
/// Replies to every POST with `body` and records the decoded request
/// envelopes. The listener task runs until the test runtime shuts down.
pub async fn spawn_mock_rpc(body: &'static str) -> MockRpc {
    // Bind to a free port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind to port");
    let addr = listener.local_addr().unwrap();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let recorded = Arc::clone(&recorded);

            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];

                // Read until the headers plus Content-Length bytes of payload arrive
                let request_body = loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                    if let Some(complete) = extract_body(&buf) {
                        break complete.to_vec();
                    }
                };

                if let Ok(envelope) = serde_json::from_slice::<serde_json::Value>(&request_body) {
                    recorded.lock().unwrap().push(envelope);
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
            });
        }
    });

    MockRpc {
        url: format!("http://{}", addr),
        requests,
    }
}

/// Returns the request body once the buffer holds the complete headers and
/// `Content-Length` bytes of payload.
fn extract_body(buf: &[u8]) -> Option<&[u8]> {
    let header_end = buf.windows(4).position(|window| window == b"\r\n\r\n")?;
    let head = std::str::from_utf8(&buf[..header_end]).ok()?;

    let length = head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })?;

    let body = &buf[header_end + 4..];
    (body.len() >= length).then(|| &body[..length])
}
