/*
 * config.rs
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

//! Session tunables: buffer sizes, bounds, and timeouts.

use std::time::Duration;

/// Buffer sizes, bounds and timeouts for one session, passed at construction.
///
/// The maxima are hard limits: accumulating a response line or header past
/// them fails the round-trip rather than growing without bound.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Deadline for the TCP connect in `Session::connect`.
    pub connect_timeout: Duration,
    /// Deadline applied before each connection read.
    pub read_timeout: Duration,
    /// Deadline applied before each connection write.
    pub write_timeout: Duration,
    /// Size of the reused connection read buffer.
    pub read_buffer_size: usize,
    /// Initial capacity of the response-line accumulator.
    pub response_line_initial: usize,
    /// Hard maximum of the response-line accumulator.
    pub response_line_max: usize,
    /// Initial capacity of the header key/value accumulator.
    pub headers_buffer_initial: usize,
    /// Hard maximum of the header key/value accumulator (all headers of one
    /// response together).
    pub headers_buffer_max: usize,
    /// Initial capacity of the retained request render buffer.
    pub render_buffer_size: usize,
    /// Header pairs preallocated in request and response header collections.
    pub prealloc_headers: usize,
    /// Capacity of the Transfer-Encoding/Content-Encoding token lists.
    pub max_encoding_tokens: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(90),
            write_timeout: Duration::from_secs(90),
            read_buffer_size: 4 * 1024,
            response_line_initial: 256,
            response_line_max: 1024,
            headers_buffer_initial: 2 * 1024,
            headers_buffer_max: 32 * 1024,
            render_buffer_size: 2 * 1024,
            prealloc_headers: 10,
            max_encoding_tokens: 8,
        }
    }
}
