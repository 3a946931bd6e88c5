//! Transport Tests
//!
//! Tests for the terminator-driven read loop and the blocking TCP transport.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use wfclink::net::{read_until, TcpTransport, Transport};
use wfclink::protocol::contains_terminator;
use wfclink::WfcError;

/// Reader that delivers its data one byte per read call, simulating the
/// worst-case chunking of a slow stream.
struct TrickleReader {
    data: Vec<u8>,
    pos: usize,
}

impl TrickleReader {
    fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
        }
    }
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

// =============================================================================
// read_until Tests
// =============================================================================

#[test]
fn test_read_until_stops_at_terminator_byte_by_byte() {
    let response = b"\\otherslist\\o\\354860031\\uniquenick\\abc\\oldone\\\\final\\";
    let mut reader = TrickleReader::new(response);

    let got = read_until(&mut reader, &contains_terminator, None).unwrap();
    assert_eq!(got, response);
}

#[test]
fn test_read_until_does_not_consume_past_terminator() {
    // Trailing garbage after the terminator must never be read: the loop
    // checks the predicate before every read.
    let mut data = b"\\a\\1\\final\\".to_vec();
    data.extend_from_slice(b"GARBAGE");
    let mut reader = TrickleReader::new(&data);

    let got = read_until(&mut reader, &contains_terminator, None).unwrap();
    assert_eq!(got, b"\\a\\1\\final\\");
}

#[test]
fn test_read_until_eof_before_terminator_is_error() {
    let mut reader = TrickleReader::new(b"\\a\\1\\fin");
    let err = read_until(&mut reader, &contains_terminator, None).unwrap_err();
    match err {
        WfcError::Protocol(msg) => assert!(msg.contains("before the terminator")),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn test_read_until_respects_length_cap() {
    let mut reader = TrickleReader::new(&[b'x'; 256]);
    let err = read_until(&mut reader, &contains_terminator, Some(16)).unwrap_err();
    match err {
        WfcError::Protocol(msg) => assert!(msg.contains("exceeded")),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[test]
fn test_read_until_satisfied_predicate_reads_nothing() {
    let mut reader = TrickleReader::new(b"unread");
    let got = read_until(&mut reader, &|_| true, None).unwrap();
    assert!(got.is_empty());
    assert_eq!(reader.pos, 0);
}

// =============================================================================
// TcpTransport Tests
// =============================================================================

/// Spawn a one-shot TCP server that records the request it receives and
/// writes `response` back in small delayed chunks.
fn spawn_chunked_server(response: &'static [u8]) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = vec![0u8; 1024];
        let n = stream.read(&mut request).unwrap();
        request.truncate(n);

        for chunk in response.chunks(3) {
            stream.write_all(chunk).unwrap();
            stream.flush().unwrap();
            thread::sleep(Duration::from_millis(1));
        }

        request
    });

    (port, handle)
}

#[test]
fn test_tcp_exchange_end_to_end() {
    let response: &[u8] = b"\\o\\447214276\\uniquenick\\7dkt0p6gtRMCJ2ljh72h\\oldone\\\\final\\";
    let (port, server) = spawn_chunked_server(response);

    let transport = TcpTransport::with_limits(5000, 64 * 1024);
    let got = transport
        .exchange("127.0.0.1", port, b"\\request\\final\\", &contains_terminator)
        .unwrap();

    assert_eq!(got, response);
    assert_eq!(server.join().unwrap(), b"\\request\\final\\");
}

#[test]
fn test_tcp_exchange_truncated_response_is_error() {
    // Server closes the connection before sending a terminator.
    let (port, server) = spawn_chunked_server(b"\\o\\447214276\\uniquen");

    let transport = TcpTransport::with_limits(5000, 64 * 1024);
    let err = transport
        .exchange("127.0.0.1", port, b"\\request\\final\\", &contains_terminator)
        .unwrap_err();

    match err {
        WfcError::Protocol(msg) => assert!(msg.contains("before the terminator")),
        other => panic!("expected protocol error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn test_tcp_connect_failure_names_host() {
    // Port 1 on localhost is refused immediately on any sane test machine.
    let transport = TcpTransport::with_limits(1000, 1024);
    let err = transport
        .exchange("127.0.0.1", 1, b"x", &contains_terminator)
        .unwrap_err();

    match err {
        WfcError::Unreachable { host, .. } => assert_eq!(host, "127.0.0.1:1"),
        other => panic!("expected unreachable error, got {other:?}"),
    }
}
