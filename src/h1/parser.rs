/*
 * parser.rs
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

//! Incremental HTTP/1.x response head parser.
//!
//! Feed arbitrarily fragmented slices through `parse`; the call boundary may
//! fall anywhere, including inside a token. Partial tokens accumulate in the
//! bounded buffers and parsing resumes from the stored state on the next
//! call — already-consumed bytes are never re-parsed.

use std::ops::Range;

use bytes::{Buf, Bytes};

use crate::buffer::BoundedBuffer;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::http::encoding::resolve_encoding;
use crate::http::protocol::Protocol;
use crate::http::response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Proto,
    Code,
    Status,
    HeaderKey,
    HeaderKeyCr,
    HeaderValueStart,
    HeaderValue,
}

/// Outcome of one `parse` call.
#[derive(Debug)]
pub(crate) enum Parsed {
    /// Head not finished; feed the next read.
    Pending,
    /// Head finished. The contained bytes are the first bytes of the body
    /// and must be pushed back onto the connection, not parsed again.
    HeadersComplete(Bytes),
}

/// Resumable response-head state machine. One dispatch loop per call picks
/// up at the stored state.
pub(crate) struct ResponseParser {
    state: State,
    resp_line: BoundedBuffer,
    headers_buf: BoundedBuffer,
    /// Segment of `headers_buf` holding the key of the header in flight.
    key: Range<usize>,
    max_encoding_tokens: usize,
}

impl ResponseParser {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            state: State::Proto,
            resp_line: BoundedBuffer::new(config.response_line_initial, config.response_line_max),
            headers_buf: BoundedBuffer::new(
                config.headers_buffer_initial,
                config.headers_buffer_max,
            ),
            key: 0..0,
            max_encoding_tokens: config.max_encoding_tokens,
        }
    }

    /// Consume `data`, mutating `response` as tokens complete. Errors are
    /// terminal for the round-trip; call `release` before reuse.
    pub fn parse(&mut self, mut data: Bytes, response: &mut Response) -> Result<Parsed> {
        loop {
            match self.state {
                State::Proto => {
                    let sp = match data.iter().position(|&b| b == b' ') {
                        Some(n) => n,
                        None => {
                            if !self.resp_line.append(&data) {
                                return Err(Error::ResponseLineTooLong);
                            }
                            return Ok(Parsed::Pending);
                        }
                    };
                    if !self.resp_line.append(&data[..sp]) {
                        return Err(Error::ResponseLineTooLong);
                    }
                    let token = self.resp_line.finish();
                    response.proto = Protocol::from_token(self.resp_line.segment(token))
                        .ok_or(Error::UnsupportedVersion)?;
                    data.advance(sp + 1);
                    self.state = State::Code;
                }
                State::Code => {
                    let mut complete = false;
                    while !data.is_empty() {
                        let b = data[0];
                        data.advance(1);
                        if b == b' ' {
                            complete = true;
                            break;
                        }
                        if !b.is_ascii_digit() {
                            return Err(Error::BadStatusLine);
                        }
                        response.code = response
                            .code
                            .checked_mul(10)
                            .and_then(|code| code.checked_add((b - b'0') as u16))
                            .ok_or(Error::BadStatusLine)?;
                    }
                    if !complete {
                        return Ok(Parsed::Pending);
                    }
                    self.state = State::Status;
                }
                State::Status => {
                    let lf = match data.iter().position(|&b| b == b'\n') {
                        Some(n) => n,
                        None => {
                            if !self.resp_line.append(&data) {
                                return Err(Error::ResponseLineTooLong);
                            }
                            return Ok(Parsed::Pending);
                        }
                    };
                    if !self.resp_line.append(&data[..lf]) {
                        return Err(Error::ResponseLineTooLong);
                    }
                    let range = self.resp_line.finish();
                    let reason = strip_cr(self.resp_line.segment(range));
                    let reason = std::str::from_utf8(reason).map_err(|_| Error::BadStatusLine)?;
                    response.status.clear();
                    response.status.push_str(reason);
                    data.advance(lf + 1);
                    self.state = State::HeaderKey;
                }
                State::HeaderKey => {
                    let first = match data.first() {
                        Some(&b) => b,
                        None => return Ok(Parsed::Pending),
                    };
                    match first {
                        b'\r' => {
                            data.advance(1);
                            self.state = State::HeaderKeyCr;
                        }
                        b'\n' => {
                            data.advance(1);
                            return Ok(Parsed::HeadersComplete(data));
                        }
                        _ => {
                            let colon = match data.iter().position(|&b| b == b':') {
                                Some(n) => n,
                                None => {
                                    if !self.headers_buf.append(&data) {
                                        return Err(Error::HeaderKeyTooLarge);
                                    }
                                    return Ok(Parsed::Pending);
                                }
                            };
                            if !self.headers_buf.append(&data[..colon]) {
                                return Err(Error::HeaderKeyTooLarge);
                            }
                            self.key = self.headers_buf.finish();
                            data.advance(colon + 1);
                            self.state = State::HeaderValueStart;
                        }
                    }
                }
                State::HeaderKeyCr => {
                    let first = match data.first() {
                        Some(&b) => b,
                        None => return Ok(Parsed::Pending),
                    };
                    if first != b'\n' {
                        return Err(Error::BadHeader);
                    }
                    data.advance(1);
                    return Ok(Parsed::HeadersComplete(data));
                }
                State::HeaderValueStart => match data.iter().position(|&b| b != b' ') {
                    Some(n) => {
                        data.advance(n);
                        self.state = State::HeaderValue;
                    }
                    None => return Ok(Parsed::Pending),
                },
                State::HeaderValue => {
                    let lf = match data.iter().position(|&b| b == b'\n') {
                        Some(n) => n,
                        None => {
                            if !self.headers_buf.append(&data) {
                                return Err(Error::HeaderValueTooLarge);
                            }
                            return Ok(Parsed::Pending);
                        }
                    };
                    if !self.headers_buf.append(&data[..lf]) {
                        return Err(Error::HeaderValueTooLarge);
                    }
                    let value = self.headers_buf.finish();
                    self.finish_header(value, response)?;
                    data.advance(lf + 1);
                    self.state = State::HeaderKey;
                }
            }
        }
    }

    /// Record a completed header pair on the response, applying the side
    /// effects of the recognized framing headers.
    fn finish_header(&self, value: Range<usize>, response: &mut Response) -> Result<()> {
        let key = self.headers_buf.segment(self.key.clone());
        let key = std::str::from_utf8(key).map_err(|_| Error::BadHeader)?;
        let value = strip_cr(self.headers_buf.segment(value));
        let value = std::str::from_utf8(value).map_err(|_| Error::BadHeader)?;

        if key.eq_ignore_ascii_case("content-length") {
            response.content_length = value.parse().map_err(|_| Error::InvalidContentLength)?;
        } else if key.eq_ignore_ascii_case("content-type") {
            response.content_type.clear();
            response.content_type.push_str(value);
        } else if key.eq_ignore_ascii_case("transfer-encoding") {
            let chunked = resolve_encoding(
                value,
                &mut response.encoding.transfer,
                self.max_encoding_tokens,
            )?;
            response.encoding.chunked |= chunked;
        } else if key.eq_ignore_ascii_case("content-encoding") {
            resolve_encoding(
                value,
                &mut response.encoding.content,
                self.max_encoding_tokens,
            )?;
        } else if key.eq_ignore_ascii_case("trailer") {
            response.encoding.has_trailer = true;
        }

        response.headers.add(key, value);
        Ok(())
    }

    /// Reset state and buffers for the next response.
    pub fn release(&mut self) {
        self.state = State::Proto;
        self.resp_line.clear();
        self.headers_buf.clear();
        self.key = 0..0;
    }
}

fn strip_cr(bytes: &[u8]) -> &[u8] {
    match bytes.last() {
        Some(b'\r') => &bytes[..bytes.len() - 1],
        _ => bytes,
    }
}
