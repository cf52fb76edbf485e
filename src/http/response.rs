/*
 * response.rs
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

//! Response metadata, filled in by the response parser during the read
//! loop. The body itself stays on the wire until pulled through
//! `Session::body`.

use crate::headers::Headers;
use crate::http::encoding::Encoding;
use crate::http::protocol::Protocol;

/// Parsed status line, headers, and resolved framing metadata of one
/// response. Owned by the session and cleared at the start of each
/// round-trip; allocations are retained across responses.
#[derive(Debug)]
pub struct Response {
    pub proto: Protocol,
    /// Numeric status code.
    pub code: u16,
    /// Status reason text, may be empty.
    pub status: String,
    pub headers: Headers,
    /// Parsed Content-Length header; zero when absent. Chunked framing is
    /// signalled by `encoding.chunked`, not by this field.
    pub content_length: u64,
    /// Raw Content-Type header value, empty when absent.
    pub content_type: String,
    pub encoding: Encoding,
}

impl Response {
    pub fn new(prealloc_headers: usize) -> Self {
        Self {
            proto: Protocol::Http11,
            code: 0,
            status: String::new(),
            headers: Headers::with_capacity(prealloc_headers),
            content_length: 0,
            content_type: String::new(),
            encoding: Encoding::default(),
        }
    }

    /// Reset for the next round-trip, keeping allocations.
    pub fn clear(&mut self) {
        self.proto = Protocol::Http11;
        self.code = 0;
        self.status.clear();
        self.headers.clear();
        self.content_length = 0;
        self.content_type.clear();
        self.encoding.clear();
    }
}
