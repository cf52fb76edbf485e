/*
 * error.rs
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

//! Crate error type. Transport failures wrap io::Error; every framing bound
//! violation gets its own variant so nothing is silently truncated.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a session round-trip, body read, or codec lookup.
///
/// Transport errors leave the connection in an undefined state; the session
/// must be discarded and a new one established. Framing errors are terminal
/// for the current round-trip.
#[derive(Debug)]
pub enum Error {
    /// Underlying transport failure (connect, read, write).
    Io(io::Error),
    /// A read or write did not finish within its configured timeout.
    TimedOut,
    /// The peer closed the connection mid-exchange.
    Closed,
    /// Status line exceeded the configured response-line buffer maximum.
    ResponseLineTooLong,
    /// A header key exceeded the configured header buffer maximum.
    HeaderKeyTooLarge,
    /// A header value exceeded the configured header buffer maximum.
    HeaderValueTooLarge,
    /// Protocol token is not HTTP/0.9, HTTP/1.0 or HTTP/1.1.
    UnsupportedVersion,
    /// Status line does not follow `VERSION SP CODE SP REASON`, or the
    /// status code does not fit in sixteen bits.
    BadStatusLine,
    /// Header section syntax error (e.g. a CR not followed by LF).
    BadHeader,
    /// Content-Length value is not an unsigned integer.
    InvalidContentLength,
    /// Transfer-Encoding/Content-Encoding token list exceeded its capacity.
    UnsupportedEncoding,
    /// Malformed chunked transfer framing (bad size line, missing CRLF).
    BadChunk,
    /// No encoder/decoder registered for this coding token.
    UnknownCoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::TimedOut => write!(f, "operation timed out"),
            Error::Closed => write!(f, "connection closed by peer"),
            Error::ResponseLineTooLong => write!(f, "response line too long"),
            Error::HeaderKeyTooLarge => write!(f, "header key too large"),
            Error::HeaderValueTooLarge => write!(f, "header value too large"),
            Error::UnsupportedVersion => write!(f, "unsupported HTTP version"),
            Error::BadStatusLine => write!(f, "malformed status line"),
            Error::BadHeader => write!(f, "malformed header"),
            Error::InvalidContentLength => write!(f, "invalid Content-Length value"),
            Error::UnsupportedEncoding => write!(f, "unsupported encoding: too many coding tokens"),
            Error::BadChunk => write!(f, "malformed chunk framing"),
            Error::UnknownCoding(token) => {
                write!(f, "coding token is not recognized: {}", token)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
