/*
 * request.rs
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

//! Request: method, path, protocol, headers, and a body source.
//!
//! Builder errors (a file that fails to open, a reader that fails) are
//! captured on the request and surfaced when the request is sent, not at
//! the moment the setter was called.

use std::fs::File;
use std::io::Read;

use crate::error::Error;
use crate::headers::Headers;
use crate::http::method::Method;
use crate::http::protocol::Protocol;

/// Request body: exactly one of in-memory bytes, an open file, or nothing.
#[derive(Debug, Default)]
pub enum BodySource {
    #[default]
    None,
    Bytes(Vec<u8>),
    File(File),
}

/// Mutable request. Obtain one from the session's method shortcuts, or
/// build a standalone one and pass it to `Session::send_request`.
#[derive(Debug, Default)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub proto: Protocol,
    pub headers: Headers,
    body: BodySource,
    err: Option<Error>,
}

impl Request {
    pub fn new(prealloc_headers: usize) -> Self {
        Self {
            headers: Headers::with_capacity(prealloc_headers),
            path: "/".to_string(),
            ..Self::default()
        }
    }

    pub fn with_method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    pub fn with_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn with_protocol(&mut self, proto: Protocol) -> &mut Self {
        self.proto = proto;
        self
    }

    pub fn with_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.add(key, value);
        self
    }

    pub fn with_body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.body = BodySource::Bytes(body.into());
        self
    }

    /// Use the contents of `path` as the body. The file is opened read-only
    /// here; an open failure is captured and returned by the next send.
    pub fn with_file(&mut self, path: impl AsRef<std::path::Path>) -> &mut Self {
        match File::open(path) {
            Ok(file) => self.body = BodySource::File(file),
            Err(e) => self.err = Some(Error::Io(e)),
        }
        self
    }

    /// Read `reader` to its end into an in-memory body. A read failure is
    /// captured and returned by the next send.
    pub fn with_body_from(&mut self, mut reader: impl Read) -> &mut Self {
        let mut body = Vec::new();
        match reader.read_to_end(&mut body) {
            Ok(_) => self.body = BodySource::Bytes(body),
            Err(e) => self.err = Some(Error::Io(e)),
        }
        self
    }

    /// Error captured while building, if any.
    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    pub(crate) fn take_error(&mut self) -> Option<Error> {
        self.err.take()
    }

    pub(crate) fn body_mut(&mut self) -> &mut BodySource {
        &mut self.body
    }

    /// Reset to a fresh GET / with no headers, body, or captured error.
    pub fn clear(&mut self) -> &mut Self {
        self.method = Method::Get;
        self.path.clear();
        self.path.push('/');
        self.proto = Protocol::Auto;
        self.headers.clear();
        self.body = BodySource::None;
        self.err = None;
        self
    }
}
