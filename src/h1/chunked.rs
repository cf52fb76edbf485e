/*
 * chunked.rs
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

//! Chunked transfer decoder: size line (hex, optional extension), chunk
//! data, inter-chunk CRLF, zero-size terminator, optional trailer section.
//! Resumable at any byte boundary.

use bytes::{Buf, Bytes};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading hex digits of the chunk size.
    Size,
    /// Skipping a chunk extension up to the CR.
    Ext,
    /// Size line CR seen, expecting LF.
    SizeLf,
    /// Inside chunk data, `remaining` bytes to go.
    Data,
    /// Chunk data done, expecting CR.
    DataCr,
    /// Expecting the LF that ends a chunk.
    DataLf,
    /// Zero-size chunk seen, no trailers expected, expecting final CR.
    EndCr,
    /// Expecting the final LF.
    EndLf,
    /// Consuming trailer lines; an empty line ends the body.
    Trailer,
}

/// Outcome of one `decode` call.
#[derive(Debug)]
pub(crate) enum Decoded {
    /// One decoded data chunk plus the unconsumed remainder of the input.
    Data { chunk: Bytes, rest: Bytes },
    /// End of body. Trailers, if any, have been consumed and ignored.
    End { rest: Bytes },
    /// All input consumed into state; more bytes needed.
    Partial,
}

/// Resumable chunked-framing decoder. Returns at most one data chunk per
/// call; the caller pushes `rest` back onto its connection.
#[derive(Debug)]
pub(crate) struct ChunkedDecoder {
    state: State,
    remaining: u64,
    trailer_line_has_content: bool,
}

impl ChunkedDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Size,
            remaining: 0,
            trailer_line_has_content: false,
        }
    }

    pub fn reset(&mut self) {
        self.state = State::Size;
        self.remaining = 0;
        self.trailer_line_has_content = false;
    }

    pub fn decode(&mut self, mut data: Bytes, trailer_expected: bool) -> Result<Decoded> {
        while !data.is_empty() {
            match self.state {
                State::Size => {
                    let b = data[0];
                    match b {
                        b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' => {
                            self.remaining = self
                                .remaining
                                .checked_mul(16)
                                .and_then(|size| size.checked_add(hex_value(b)))
                                .ok_or(Error::BadChunk)?;
                            data.advance(1);
                        }
                        b';' => {
                            data.advance(1);
                            self.state = State::Ext;
                        }
                        b'\r' => {
                            data.advance(1);
                            self.state = State::SizeLf;
                        }
                        _ => return Err(Error::BadChunk),
                    }
                }
                State::Ext => match data.iter().position(|&b| b == b'\r') {
                    Some(cr) => {
                        data.advance(cr + 1);
                        self.state = State::SizeLf;
                    }
                    None => data.advance(data.len()),
                },
                State::SizeLf => {
                    if data[0] != b'\n' {
                        return Err(Error::BadChunk);
                    }
                    data.advance(1);
                    self.state = if self.remaining > 0 {
                        State::Data
                    } else if trailer_expected {
                        self.trailer_line_has_content = false;
                        State::Trailer
                    } else {
                        State::EndCr
                    };
                }
                State::Data => {
                    let take = self.remaining.min(data.len() as u64) as usize;
                    let chunk = data.split_to(take);
                    self.remaining -= take as u64;
                    if self.remaining == 0 {
                        self.state = State::DataCr;
                        // fold in the chunk-ending CRLF when already here,
                        // so a terminator in the same read costs no extra
                        // decode call
                        if !data.is_empty() {
                            if data[0] != b'\r' {
                                return Err(Error::BadChunk);
                            }
                            data.advance(1);
                            self.state = State::DataLf;
                            if !data.is_empty() {
                                if data[0] != b'\n' {
                                    return Err(Error::BadChunk);
                                }
                                data.advance(1);
                                self.state = State::Size;
                            }
                        }
                    }
                    return Ok(Decoded::Data { chunk, rest: data });
                }
                State::DataCr => {
                    if data[0] != b'\r' {
                        return Err(Error::BadChunk);
                    }
                    data.advance(1);
                    self.state = State::DataLf;
                }
                State::DataLf => {
                    if data[0] != b'\n' {
                        return Err(Error::BadChunk);
                    }
                    data.advance(1);
                    self.state = State::Size;
                }
                State::EndCr => {
                    if data[0] != b'\r' {
                        return Err(Error::BadChunk);
                    }
                    data.advance(1);
                    self.state = State::EndLf;
                }
                State::EndLf => {
                    if data[0] != b'\n' {
                        return Err(Error::BadChunk);
                    }
                    data.advance(1);
                    self.state = State::Size;
                    return Ok(Decoded::End { rest: data });
                }
                State::Trailer => {
                    let b = data[0];
                    data.advance(1);
                    match b {
                        b'\n' => {
                            if !self.trailer_line_has_content {
                                self.state = State::Size;
                                return Ok(Decoded::End { rest: data });
                            }
                            self.trailer_line_has_content = false;
                        }
                        b'\r' => {}
                        _ => self.trailer_line_has_content = true,
                    }
                }
            }
        }
        Ok(Decoded::Partial)
    }
}

fn hex_value(b: u8) -> u64 {
    match b {
        b'0'..=b'9' => (b - b'0') as u64,
        b'a'..=b'f' => (b - b'a' + 10) as u64,
        _ => (b - b'A' + 10) as u64,
    }
}
