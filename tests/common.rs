#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// Nothing listens here: any test that reaches the network fails loudly.
pub const DEAD_BACKEND: &str = "http://127.0.0.1:9";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// A `rattendance` command isolated in its own config directory.
pub fn rat_in(dir: &str) -> Command {
    let mut cmd = rat();
    cmd.env("RATTENDANCE_CONFIG_DIR", dir)
        .env_remove("RUST_LOG")
        .args(["--base-url", DEAD_BACKEND]);
    cmd
}

/// Fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance", name));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).expect("create test dir");
    path.to_string_lossy().to_string()
}

/// Unique file path inside the system temp dir (removed if present)
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Unsigned three-part token around `payload`.
pub fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.c2lnbmF0dXJl")
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

/// UTC timestamp on `day()`.
pub fn at(h: u32, m: u32) -> DateTime<Utc> {
    at_s(h, m, 0)
}

pub fn at_s(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, h, m, s)
        .single()
        .expect("valid timestamp")
}

/// `rattendance` isolated in `dir` and pointed at `base_url`, bypassing
/// any proxy configured in the environment.
pub fn rat_at(dir: &str, base_url: &str) -> Command {
    let mut cmd = rat();
    cmd.env("RATTENDANCE_CONFIG_DIR", dir)
        .env_remove("RUST_LOG")
        .args(["--base-url", base_url]);
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// One canned HTTP answer.
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Local HTTP server answering one connection per canned reply, in order.
/// Every request it sees (head plus body) is forwarded to `requests()`.
pub struct StubServer {
    pub base_url: String,
    seen: Receiver<String>,
}

impl StubServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let port = listener.local_addr().expect("stub address").port();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for reply in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let request = read_request(&mut stream);
                if tx.send(request).is_err() {
                    return;
                }
                let head = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    reply.status,
                    reply.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(reply.body.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            seen: rx,
        }
    }

    /// The requests received so far (waits briefly for each of `count`).
    pub fn requests(&self, count: usize) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.seen.recv_timeout(Duration::from_secs(5)).ok())
            .collect()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return String::from_utf8_lossy(&data).to_string(),
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
    let body_len = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < header_end + body_len {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&data).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
