/*
 * session_roundtrip.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Telaio, an HTTP/1.x client engine.
 *
 * Telaio is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Telaio is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Telaio.  If not, see <http://www.gnu.org/licenses/>.
 */

//! End-to-end round trips over an in-process duplex channel standing in for
//! the TCP stream.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::task::JoinHandle;

use telaio::http::Method;
use telaio::{Error, Protocol, Session, SessionConfig};

fn config() -> SessionConfig {
    SessionConfig {
        read_timeout: Duration::from_secs(2),
        write_timeout: Duration::from_secs(2),
        ..SessionConfig::default()
    }
}

fn session() -> (Session<DuplexStream>, DuplexStream) {
    let (client, server) = tokio::io::duplex(16384);
    (Session::from_transport(client, config()), server)
}

/// Reads one request head off `server`, replies with `response`, and hands
/// back the captured request bytes.
fn serve_once(mut server: DuplexStream, response: &'static [u8]) -> JoinHandle<Vec<u8>> {
    tokio::spawn(async move {
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = server.read(&mut buf).await.unwrap();
            assert!(n > 0, "peer closed before request head completed");
            request.extend_from_slice(&buf[..n]);
        }
        server.write_all(response).await.unwrap();
        request
    })
}

#[tokio::test]
async fn fixed_length_round_trip() {
    let (mut session, server) = session();
    let handle = serve_once(
        server,
        b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nContent-Type: text/plain\r\n\r\nhello",
    );

    session.get("/index.html").with_header("Host", "example.com");
    let response = session.send().await.unwrap();
    assert_eq!(response.proto, Protocol::Http11);
    assert_eq!(response.code, 200);
    assert_eq!(response.status, "OK");
    assert_eq!(response.content_length, 5);
    assert_eq!(response.content_type, "text/plain");

    let body = session.body().full().await.unwrap().to_vec();
    assert_eq!(body, b"hello");

    let request = handle.await.unwrap();
    let head = String::from_utf8(request).unwrap();
    assert!(head.starts_with("GET /index.html HTTP/1.1\r\n"));
    assert!(head.contains("Host: example.com\r\n"));
}

#[tokio::test]
async fn chunked_round_trip() {
    let (mut session, server) = session();
    let handle = serve_once(
        server,
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n\
          5\r\nhello\r\n7\r\n, world\r\n0\r\n\r\n",
    );

    session.get("/").with_header("Host", "example.com");
    let response = session.send().await.unwrap();
    assert!(response.encoding.chunked);
    assert!(response.encoding.transfer.is_empty());

    let mut collected = Vec::new();
    session
        .body()
        .each(|piece| {
            collected.extend_from_slice(piece);
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(collected, b"hello, world");

    handle.await.unwrap();
}

#[tokio::test]
async fn chunked_with_trailer_lines() {
    let (mut session, server) = session();
    let handle = serve_once(
        server,
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nTrailer: Expires\r\n\r\n\
          4\r\nwiki\r\n0\r\nExpires: never\r\n\r\n",
    );

    session.get("/").with_header("Host", "example.com");
    let response = session.send().await.unwrap();
    assert!(response.encoding.has_trailer);
    let body = session.body().full().await.unwrap().to_vec();
    assert_eq!(body, b"wiki");

    handle.await.unwrap();
}

#[tokio::test]
async fn sequential_requests_drain_unconsumed_body() {
    let (mut session, mut server) = session();
    let handle: JoinHandle<()> = tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        for reply in [
            &b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\n0123456789"[..],
            &b"HTTP/1.1 204 No Content\r\nContent-Length: 0\r\n\r\n"[..],
        ] {
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = server.read(&mut buf).await.unwrap();
                assert!(n > 0);
                request.extend_from_slice(&buf[..n]);
            }
            server.write_all(reply).await.unwrap();
        }
    });

    session.get("/first").with_header("Host", "example.com");
    let response = session.send().await.unwrap();
    assert_eq!(response.code, 200);
    // Body deliberately left unconsumed.

    session.get("/second").with_header("Host", "example.com");
    let response = session.send().await.unwrap();
    assert_eq!(response.code, 204);
    assert!(session.body().full().await.unwrap().is_empty());

    handle.await.unwrap();
}

#[tokio::test]
async fn slow_body_delivery_is_reassembled() {
    let (mut session, mut server) = session();
    let handle: JoinHandle<()> = tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = server.read(&mut buf).await.unwrap();
            assert!(n > 0);
            request.extend_from_slice(&buf[..n]);
        }
        server
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\n")
            .await
            .unwrap();
        for piece in [&b"onetwo"[..], &b"th"[..]] {
            tokio::time::sleep(Duration::from_millis(20)).await;
            server.write_all(piece).await.unwrap();
        }
    });

    session.get("/").with_header("Host", "example.com");
    session.send().await.unwrap();
    let body = session.body().full().await.unwrap().to_vec();
    assert_eq!(body, b"onetwoth");

    handle.await.unwrap();
}

#[tokio::test]
async fn io_style_read_with_small_buffer() {
    let (mut session, server) = session();
    let handle = serve_once(
        server,
        b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\n\r\nabcdef",
    );

    session.get("/").with_header("Host", "example.com");
    session.send().await.unwrap();

    let mut out = Vec::new();
    let mut body = session.body();
    let mut buf = [0u8; 4];
    loop {
        let n = body.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(out, b"abcdef");

    handle.await.unwrap();
}

#[tokio::test]
async fn post_sends_body_and_reads_reply() {
    let (mut session, server) = session();
    let handle = serve_once(
        server,
        b"HTTP/1.1 201 Created\r\nContent-Length: 0\r\n\r\n",
    );

    session
        .post("/submit")
        .with_header("Host", "example.com")
        .with_header("Content-Length", "7")
        .with_body(b"payload".to_vec());
    let response = session.send().await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.status, "Created");

    let request = handle.await.unwrap();
    let text = String::from_utf8(request).unwrap();
    assert!(text.starts_with("POST /submit HTTP/1.1\r\n"));
    assert!(text.ends_with("\r\n\r\npayload"));
}

#[tokio::test]
async fn caller_owned_request_round_trip() {
    let (mut session, server) = session();
    let handle = serve_once(server, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");

    let mut request = telaio::Request::new(4);
    request
        .with_method(Method::Head)
        .with_path("/probe")
        .with_header("Host", "example.com");
    let response = session.send_request(&mut request).await.unwrap();
    assert_eq!(response.code, 200);

    let captured = handle.await.unwrap();
    assert!(captured.starts_with(b"HEAD /probe HTTP/1.1\r\n"));
}

#[tokio::test]
async fn malformed_status_line_is_an_error() {
    let (mut session, server) = session();
    let handle = serve_once(server, b"HTTP/1.1 2x0 OK\r\n\r\n");

    session.get("/").with_header("Host", "example.com");
    assert!(matches!(
        session.send().await,
        Err(Error::BadStatusLine)
    ));

    handle.await.unwrap();
}

#[tokio::test]
async fn peer_close_mid_head_is_closed_error() {
    let (mut session, mut server) = session();
    let handle: JoinHandle<()> = tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = server.read(&mut buf).await.unwrap();
            assert!(n > 0);
            request.extend_from_slice(&buf[..n]);
        }
        server.write_all(b"HTTP/1.1 200 O").await.unwrap();
        drop(server);
    });

    session.get("/").with_header("Host", "example.com");
    assert!(matches!(session.send().await, Err(Error::Closed)));

    handle.await.unwrap();
}
