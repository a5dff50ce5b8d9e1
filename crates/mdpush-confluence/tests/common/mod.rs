//! In-process HTTP server that replays canned responses.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use serde_json::{Value, json};

/// Expected basic auth header for `bot@acme.test` / `s3cret`.
pub const AUTH_HEADER: &str = "Basic Ym90QGFjbWUudGVzdDpzM2NyZXQ=";

/// A request as received by [`MockServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Serves one canned response per connection, in order.
///
/// The server stops accepting after the last response, so a request beyond
/// the expected count fails to connect.
pub struct MockServer {
    url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let url = format!("http://{}/wiki", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().expect("accept connection");
                requests.push(handle_connection(stream, status, &body));
            }
            requests
        });

        Self { url, handle }
    }

    /// Wiki base URL to point the client at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait until every response has been served and return the requests.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("mock server panicked")
    }
}

/// Page JSON as Confluence returns it for `GET /content/{id}`.
pub fn page_json(id: &str, title: &str, version: u32) -> String {
    json!({
        "id": id,
        "type": "page",
        "status": "current",
        "title": title,
        "version": {"number": version, "minorEdit": false},
        "_links": {"webui": format!("/spaces/ENG/pages/{id}")}
    })
    .to_string()
}

fn handle_connection(stream: TcpStream, status: u16, body: &str) -> RecordedRequest {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("read request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_owned();
    let path = parts.next().unwrap_or_default().to_owned();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("read header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_owned(), value.trim().to_owned()));
        }
    }

    let find = |name: &str| {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    };
    let chunked = find("transfer-encoding").is_some_and(|v| v.contains("chunked"));
    let request_body = if chunked {
        read_chunked(&mut reader)
    } else {
        let length = find("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let mut buf = vec![0; length];
        reader.read_exact(&mut buf).expect("read body");
        buf
    };

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .expect("write response");
    stream.flush().expect("flush response");

    RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8(request_body).expect("request body is not UTF-8"),
    }
}

fn read_chunked(reader: &mut impl BufRead) -> Vec<u8> {
    let mut body = Vec::new();
    loop {
        let mut size_line = String::new();
        reader.read_line(&mut size_line).expect("read chunk size");
        let size_hex = size_line.trim().split(';').next().unwrap_or("0");
        let size = usize::from_str_radix(size_hex, 16).expect("chunk size");

        let mut line_end = String::new();
        if size == 0 {
            reader.read_line(&mut line_end).expect("read final CRLF");
            return body;
        }

        let mut chunk = vec![0; size];
        reader.read_exact(&mut chunk).expect("read chunk");
        body.extend_from_slice(&chunk);
        reader.read_line(&mut line_end).expect("read chunk CRLF");
    }
}
