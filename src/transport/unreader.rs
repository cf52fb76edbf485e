/*
 * unreader.rs
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

//! Pushback buffer: bytes a consumer read but did not use are stored here
//! and replayed, whole and un-split, before the transport is touched again.

use bytes::Bytes;

/// Single-slot pushback buffer.
///
/// Calling `unread` while bytes are already pending is a programmer error;
/// the later call wins and the pending bytes are dropped. That behavior is
/// documented, not guaranteed — callers must interleave `unread` with a
/// successful read. Nothing is allocated when no bytes are pending.
#[derive(Debug, Default)]
pub struct Unreader {
    pending: Option<Bytes>,
}

impl Unreader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes for replay on the next `take`. Empty input is ignored.
    pub fn unread(&mut self, bytes: Bytes) {
        if !bytes.is_empty() {
            self.pending = Some(bytes);
        }
    }

    /// Take pending bytes, if any, leaving the slot empty.
    pub fn take(&mut self) -> Option<Bytes> {
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }
}
