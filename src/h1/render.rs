/*
 * render.rs
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

//! Serializes a request head and body into one buffer and writes it to the
//! connection in a single call.

use std::io::Read;

use bytes::{BufMut, BytesMut};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::http::request::{BodySource, Request};
use crate::transport::{Connection, Transport};

const CRLF: &[u8] = b"\r\n";

pub(crate) struct Renderer {
    buf: BytesMut,
}

impl Renderer {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(config.render_buffer_size),
        }
    }

    /// Render the request and write it out. A deferred builder error, such
    /// as a file that failed to open, surfaces here before any bytes move.
    pub async fn send<T: Transport>(
        &mut self,
        request: &mut Request,
        conn: &mut Connection<T>,
    ) -> Result<()> {
        if let Some(err) = request.take_error() {
            return Err(err);
        }
        self.buf.clear();
        self.buf.put_slice(request.method.as_str().as_bytes());
        self.buf.put_u8(b' ');
        self.buf.put_slice(request.path.as_bytes());
        self.buf.put_u8(b' ');
        self.buf.put_slice(request.proto.as_str().as_bytes());
        self.buf.put_slice(CRLF);
        for (key, value) in request.headers.iter() {
            self.buf.put_slice(key.as_bytes());
            self.buf.put_slice(b": ");
            self.buf.put_slice(value.as_bytes());
            self.buf.put_slice(CRLF);
        }
        self.buf.put_slice(CRLF);
        match request.body_mut() {
            BodySource::None => {}
            BodySource::Bytes(data) => self.buf.put_slice(data),
            BodySource::File(file) => {
                let mut contents = Vec::new();
                file.read_to_end(&mut contents)?;
                self.buf.put_slice(&contents);
            }
        }
        log::trace!("request rendered, {} bytes", self.buf.len());
        conn.write_all(&self.buf).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tokio::io::AsyncReadExt;

    use crate::http::method::Method;

    fn harness() -> (Connection<tokio::io::DuplexStream>, tokio::io::DuplexStream) {
        let (client, server) = tokio::io::duplex(4096);
        let config = SessionConfig::default();
        (Connection::new(client, None, &config), server)
    }

    async fn read_rendered(server: &mut tokio::io::DuplexStream, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        server.read_exact(&mut out).await.unwrap();
        out
    }

    #[tokio::test]
    async fn renders_minimal_get() {
        let (mut conn, mut server) = harness();
        let config = SessionConfig::default();
        let mut renderer = Renderer::new(&config);
        let mut request = Request::new(config.prealloc_headers);
        request.with_header("Host", "example.com");
        renderer.send(&mut request, &mut conn).await.unwrap();
        drop(conn);
        let expected = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let got = read_rendered(&mut server, expected.len()).await;
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn renders_post_with_body_and_headers_in_order() {
        let (mut conn, mut server) = harness();
        let config = SessionConfig::default();
        let mut renderer = Renderer::new(&config);
        let mut request = Request::new(config.prealloc_headers);
        request
            .with_method(Method::Post)
            .with_path("/submit")
            .with_header("Host", "example.com")
            .with_header("Content-Length", "5")
            .with_body(b"hello".to_vec());
        renderer.send(&mut request, &mut conn).await.unwrap();
        drop(conn);
        let expected =
            b"POST /submit HTTP/1.1\r\nHost: example.com\r\nContent-Length: 5\r\n\r\nhello";
        let got = read_rendered(&mut server, expected.len()).await;
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn renders_file_body() {
        let mut path = std::env::temp_dir();
        path.push(format!("telaio-render-{}.txt", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(b"file payload").unwrap();
        }
        let (mut conn, mut server) = harness();
        let config = SessionConfig::default();
        let mut renderer = Renderer::new(&config);
        let mut request = Request::new(config.prealloc_headers);
        request
            .with_method(Method::Post)
            .with_header("Host", "example.com")
            .with_file(&path);
        renderer.send(&mut request, &mut conn).await.unwrap();
        drop(conn);
        std::fs::remove_file(&path).unwrap();
        let expected = b"POST / HTTP/1.1\r\nHost: example.com\r\n\r\nfile payload";
        let got = read_rendered(&mut server, expected.len()).await;
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn missing_file_error_surfaces_on_send() {
        let (mut conn, _server) = harness();
        let config = SessionConfig::default();
        let mut renderer = Renderer::new(&config);
        let mut request = Request::new(config.prealloc_headers);
        request.with_file("/no/such/file/anywhere");
        assert!(request.error().is_some());
        assert!(renderer.send(&mut request, &mut conn).await.is_err());
    }
}
