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

//! Public handle over the current response body.
//!
//! The handle borrows the session's connection, so it cannot outlive the
//! next request; consumption styles (piecewise, whole, callback, io-style)
//! can be mixed on the same body.

use bytes::Bytes;

use crate::error::Result;
use crate::h1::body::BodyReader;
use crate::transport::{Connection, Transport};

/// Lazily-consumed response body. Bytes are pulled off the connection only
/// as this handle is read; dropping it unconsumed leaves the rest on the
/// wire to be drained before the next request.
pub struct Body<'a, T: Transport> {
    reader: &'a mut BodyReader,
    conn: &'a mut Connection<T>,
}

impl<'a, T: Transport> Body<'a, T> {
    pub(crate) fn new(reader: &'a mut BodyReader, conn: &'a mut Connection<T>) -> Self {
        Self { reader, conn }
    }

    /// Next decoded piece of the body, or None at end of stream. Piece
    /// boundaries follow network reads and chunk boundaries and carry no
    /// meaning of their own.
    pub async fn next(&mut self) -> Result<Option<Bytes>> {
        self.reader.next(self.conn).await
    }

    /// The entire remaining body as one slice. The returned slice borrows an
    /// internal buffer that is reused by the next response.
    pub async fn full(&mut self) -> Result<&[u8]> {
        self.reader.full_buf.clear();
        if let Some(n) = self.reader.fixed_remaining() {
            self.reader.full_buf.reserve(n as usize);
        }
        while let Some(piece) = self.reader.next(self.conn).await? {
            self.reader.full_buf.extend_from_slice(&piece);
        }
        Ok(&self.reader.full_buf[..])
    }

    /// Call `f` on each piece until end of stream or the first error, from
    /// `f` or from the wire.
    pub async fn each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        while let Some(piece) = self.reader.next(self.conn).await? {
            f(&piece)?;
        }
        Ok(())
    }

    /// io-style read. Fills `buf` from the next piece, holding any surplus
    /// for the following call. Ok(0) means end of stream.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let piece = match self.reader.next(self.conn).await? {
            Some(piece) => piece,
            None => return Ok(0),
        };
        let n = piece.len().min(buf.len());
        buf[..n].copy_from_slice(&piece[..n]);
        if n < piece.len() {
            self.reader.pending = Some(piece.slice(n..));
        }
        Ok(n)
    }

    /// Read to end of stream discarding content.
    pub async fn discard(&mut self) -> Result<()> {
        self.reader.drain(self.conn).await
    }
}
