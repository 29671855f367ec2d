use std::io::Read;

use super::{AnalysisError, ClientResult};

const MAX_RESPONSE_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers one JSON POST and hands back whatever the server answered.
/// Only failures to complete the exchange are errors; status codes are not.
pub trait AnalysisTransport: Send + Sync {
    fn post_json(&self, url: &str, body: &str) -> ClientResult<HttpResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl AnalysisTransport for HttpTransport {
    fn post_json(&self, url: &str, body: &str) -> ClientResult<HttpResponse> {
        let transport_error = |message: String| AnalysisError::Transport {
            url: url.to_string(),
            message,
        };

        let response = match self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_string(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(transport_error(err.to_string())),
        };

        let status = response.status();
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_RESPONSE_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|err| transport_error(err.to_string()))?;
        Ok(HttpResponse {
            status,
            body: bytes,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serves exactly one request with the given status line and JSON body.
    /// The join handle yields the request body the server received.
    pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let url = format!(
            "http://{}/analyze",
            listener.local_addr().expect("listener address")
        );
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept test connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut content_length = 0_usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header line");
                let trimmed = line.trim_end();
                if trimmed.is_empty() {
                    break;
                }
                if let Some((name, value)) = trimmed.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().expect("content length");
                    }
                }
            }
            let mut request_body = vec![0_u8; content_length];
            std::io::Read::read_exact(&mut reader, &mut request_body).expect("read request body");

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
            String::from_utf8(request_body).expect("utf-8 request body")
        });
        (url, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::serve_once;
    use super::*;

    #[test]
    fn post_json_returns_error_statuses_as_responses() {
        let (url, server) = serve_once("500 INTERNAL SERVER ERROR", r#"{"error":"boom"}"#);
        let response = HttpTransport::new()
            .post_json(&url, r#"{"image":"x"}"#)
            .expect("exchange completes");

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.body, br#"{"error":"boom"}"#.to_vec());
        assert_eq!(server.join().expect("server thread"), r#"{"image":"x"}"#);
    }

    #[test]
    fn post_json_fails_when_nothing_listens() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}/analyze", listener.local_addr().expect("address"));
        drop(listener);

        let err = HttpTransport::new()
            .post_json(&url, "{}")
            .expect_err("closed port must fail");
        assert!(matches!(err, AnalysisError::Transport { .. }));
    }
}
