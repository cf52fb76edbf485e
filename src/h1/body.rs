/*
 * body.rs
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

//! Framing-level body reads: plain Content-Length countdown or chunked
//! decoding over the connection, with pushback of anything past the body.

use bytes::{Bytes, BytesMut};

use crate::error::Result;
use crate::http::response::Response;
use crate::transport::{Connection, Transport};

use super::chunked::{ChunkedDecoder, Decoded};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    /// Plain body with this many bytes left; zero means end of stream.
    Fixed(u64),
    /// Chunked transfer; flips to Fixed(0) at the terminator.
    Chunked,
}

/// Reads one response body off the connection, re-armed per response.
///
/// Content-Encoding tokens are recorded on the response but not applied
/// here; only chunked transfer framing is decoded.
// TODO: pipe recorded content-encoding tokens through a CodingRegistry so
// compressed bodies come out decoded.
pub(crate) struct BodyReader {
    framing: Framing,
    has_trailer: bool,
    decoder: ChunkedDecoder,
    /// Accumulator for whole-body reads, reused across responses.
    pub(crate) full_buf: BytesMut,
    /// Decoded surplus held for the io-style adapter.
    pub(crate) pending: Option<Bytes>,
}

impl BodyReader {
    pub fn new() -> Self {
        Self {
            framing: Framing::Fixed(0),
            has_trailer: false,
            decoder: ChunkedDecoder::new(),
            full_buf: BytesMut::new(),
            pending: None,
        }
    }

    /// Re-arm for the response whose head was just parsed. Chunked framing
    /// wins over Content-Length.
    pub fn init(&mut self, response: &Response) {
        self.framing = if response.encoding.chunked {
            Framing::Chunked
        } else {
            Framing::Fixed(response.content_length)
        };
        self.has_trailer = response.encoding.has_trailer;
        self.decoder.reset();
        self.pending = None;
    }

    /// Bytes still expected for a plain body; None when chunked.
    pub fn fixed_remaining(&self) -> Option<u64> {
        match self.framing {
            Framing::Fixed(n) => Some(n),
            Framing::Chunked => None,
        }
    }

    /// Next decoded piece of the body, or None at end of stream. Bytes past
    /// the body end are pushed back onto the connection, never consumed.
    pub async fn next<T: Transport>(&mut self, conn: &mut Connection<T>) -> Result<Option<Bytes>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }
        loop {
            match self.framing {
                Framing::Fixed(0) => return Ok(None),
                Framing::Fixed(remaining) => {
                    let mut data = conn.read().await?;
                    if data.len() as u64 <= remaining {
                        self.framing = Framing::Fixed(remaining - data.len() as u64);
                        return Ok(Some(data));
                    }
                    let piece = data.split_to(remaining as usize);
                    conn.unread(data);
                    self.framing = Framing::Fixed(0);
                    return Ok(Some(piece));
                }
                Framing::Chunked => {
                    let data = conn.read().await?;
                    match self.decoder.decode(data, self.has_trailer)? {
                        Decoded::Data { chunk, rest } => {
                            conn.unread(rest);
                            return Ok(Some(chunk));
                        }
                        Decoded::End { rest } => {
                            conn.unread(rest);
                            self.framing = Framing::Fixed(0);
                            return Ok(None);
                        }
                        Decoded::Partial => {}
                    }
                }
            }
        }
    }

    /// Read to end of stream discarding content. Used before reusing the
    /// connection when the previous body was left unconsumed.
    pub async fn drain<T: Transport>(&mut self, conn: &mut Connection<T>) -> Result<()> {
        self.pending = None;
        while self.next(conn).await?.is_some() {}
        Ok(())
    }
}
