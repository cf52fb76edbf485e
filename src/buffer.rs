/*
 * buffer.rs
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

//! Bounded accumulator buffer: grows from an initial capacity toward a hard
//! maximum, and hands out consecutive token segments of the accumulated data.

use std::ops::Range;

/// Growable byte buffer with a hard maximum.
///
/// Tokens that arrive split across reads are accumulated with `append`, then
/// cut off with `finish`, which returns the range of everything appended
/// since the previous `finish`. Ranges stay valid until `clear`.
#[derive(Debug)]
pub struct BoundedBuffer {
    data: Vec<u8>,
    start: usize,
    max: usize,
}

impl BoundedBuffer {
    pub fn new(initial: usize, max: usize) -> Self {
        Self {
            data: Vec::with_capacity(initial.min(max)),
            start: 0,
            max,
        }
    }

    /// Append bytes. Returns false, leaving the buffer untouched, if the
    /// total length would exceed the configured maximum.
    pub fn append(&mut self, bytes: &[u8]) -> bool {
        if self.data.len() + bytes.len() > self.max {
            return false;
        }
        self.data.extend_from_slice(bytes);
        true
    }

    /// Close the current segment and return its range.
    pub fn finish(&mut self) -> Range<usize> {
        let range = self.start..self.data.len();
        self.start = self.data.len();
        range
    }

    /// Borrow a previously finished segment.
    pub fn segment(&self, range: Range<usize>) -> &[u8] {
        &self.data[range]
    }

    /// Drop all accumulated data, retaining capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.start = 0;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
