use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Accepts one connection on `server` and answers it with `status_line` and
/// `json_payload`. Returns the request line that was received.
pub fn handle_request(server: &TcpListener, status_line: &str, json_payload: &str) -> String {
    let (mut stream, _) = server.accept().unwrap();

    let buf_reader = BufReader::new(&stream);
    let http_request: Vec<_> = buf_reader
        .lines()
        .map(|result| result.unwrap())
        .take_while(|line| !line.is_empty())
        .collect();

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        json_payload.len(),
        json_payload
    );
    stream.write_all(response.as_bytes()).unwrap();
    http_request[0].clone()
}

/// Serves a single request from a background thread.
pub fn serve_once(
    status_line: &'static str,
    json_payload: String,
) -> (String, JoinHandle<String>) {
    let server = TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind");
    let port = server.local_addr().unwrap().port();
    let handle = thread::spawn(move || handle_request(&server, status_line, &json_payload));
    (format!("http://127.0.0.1:{port}"), handle)
}
