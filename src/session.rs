/*
 * session.rs
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

//! Session: one connection plus the reusable request, response, parser, and
//! renderer state for sequential round trips over it.

use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::timeout;

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::h1::body::BodyReader;
use crate::h1::parser::{Parsed, ResponseParser};
use crate::h1::render::Renderer;
use crate::http::body::Body;
use crate::http::method::Method;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::transport::{Connection, Transport};

/// Client session over one connection. Requests are sent one at a time; a
/// body left unconsumed by the caller is drained before the next send so
/// the stream stays in sync.
pub struct Session<T: Transport> {
    conn: Connection<T>,
    parser: ResponseParser,
    renderer: Renderer,
    body: BodyReader,
    request: Request,
    response: Response,
}

impl Session<TcpStream> {
    /// Connect to `addr` over TCP with the default configuration.
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        Self::connect_with(addr, SessionConfig::default()).await
    }

    /// Connect to `addr` over TCP, bounded by the configured connect
    /// timeout.
    pub async fn connect_with(addr: impl ToSocketAddrs, config: SessionConfig) -> Result<Self> {
        let stream = timeout(config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::TimedOut)??;
        let remote = stream.peer_addr().ok();
        if let Some(remote) = remote {
            log::debug!("connected to {}", remote);
        }
        let conn = Connection::new(stream, remote, &config);
        Ok(Self::from_connection(conn, &config))
    }
}

impl<T: Transport> Session<T> {
    /// Build a session over an already-established transport. This is how
    /// non-TCP channels (or test fixtures) become sessions.
    pub fn from_transport(transport: T, config: SessionConfig) -> Self {
        Self::from_connection(Connection::new(transport, None, &config), &config)
    }

    fn from_connection(conn: Connection<T>, config: &SessionConfig) -> Self {
        Self {
            conn,
            parser: ResponseParser::new(config),
            renderer: Renderer::new(config),
            body: BodyReader::new(),
            request: Request::new(config.prealloc_headers),
            response: Response::new(config.prealloc_headers),
        }
    }

    /// The session's internal request, reset to `method` and `path`. Chain
    /// further setters on it, then call [`send`](Self::send).
    pub fn request(&mut self, method: Method, path: impl Into<String>) -> &mut Request {
        self.request.clear();
        self.request.with_method(method).with_path(path);
        &mut self.request
    }

    pub fn get(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Get, path)
    }

    pub fn head(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Head, path)
    }

    pub fn post(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Post, path)
    }

    pub fn put(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Put, path)
    }

    pub fn delete(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Delete, path)
    }

    pub fn options(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Options, path)
    }

    pub fn patch(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Patch, path)
    }

    pub fn trace(&mut self, path: impl Into<String>) -> &mut Request {
        self.request(Method::Trace, path)
    }

    /// Send the session's internal request and parse the response head. The
    /// body is not consumed; use [`body`](Self::body) afterwards.
    pub async fn send(&mut self) -> Result<&Response> {
        Self::round_trip(
            &mut self.conn,
            &mut self.parser,
            &mut self.renderer,
            &mut self.body,
            &mut self.response,
            &mut self.request,
        )
        .await?;
        Ok(&self.response)
    }

    /// Send a caller-owned request over this session.
    pub async fn send_request(&mut self, request: &mut Request) -> Result<&Response> {
        Self::round_trip(
            &mut self.conn,
            &mut self.parser,
            &mut self.renderer,
            &mut self.body,
            &mut self.response,
            request,
        )
        .await?;
        Ok(&self.response)
    }

    async fn round_trip(
        conn: &mut Connection<T>,
        parser: &mut ResponseParser,
        renderer: &mut Renderer,
        body: &mut BodyReader,
        response: &mut Response,
        request: &mut Request,
    ) -> Result<()> {
        // Whatever the caller left of the previous body must come off the
        // wire before the next response can start.
        body.drain(conn).await?;
        response.clear();
        parser.release();
        renderer.send(request, conn).await?;
        loop {
            let data = conn.read().await?;
            match parser.parse(data, response)? {
                Parsed::Pending => {}
                Parsed::HeadersComplete(rest) => {
                    conn.unread(rest);
                    parser.release();
                    body.init(response);
                    log::debug!("response {} {}", response.code, response.status);
                    return Ok(());
                }
            }
        }
    }

    /// Handle over the current response body. Borrows the session, so the
    /// body must be dropped before the next send.
    pub fn body(&mut self) -> Body<'_, T> {
        Body::new(&mut self.body, &mut self.conn)
    }

    /// The most recently parsed response head.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Remote endpoint, when the transport has one.
    pub fn remote(&self) -> Option<std::net::SocketAddr> {
        self.conn.remote()
    }

    /// Shut down the transport. The session cannot be used afterwards.
    pub async fn close(&mut self) -> Result<()> {
        self.conn.shutdown().await
    }
}
