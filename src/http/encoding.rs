/*
 * encoding.rs
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

//! Resolved Transfer-Encoding/Content-Encoding state of one response, and
//! the comma-separated token resolver that fills it.

use crate::error::{Error, Result};

/// Coding tokens of the current response.
///
/// `chunked` is kept as a flag rather than a token because it changes body
/// framing and must be processed by the body reader itself. The remaining
/// tokens are recorded in source order and left for the caller to apply
/// through the codec registry.
#[derive(Debug, Default)]
pub struct Encoding {
    /// Transfer-Encoding tokens, split by comma, `chunked` excluded.
    pub transfer: Vec<String>,
    /// Content-Encoding tokens, split by comma.
    pub content: Vec<String>,
    pub chunked: bool,
    pub has_trailer: bool,
}

impl Encoding {
    /// Reset between responses; token list allocations are retained.
    pub fn clear(&mut self) {
        self.transfer.clear();
        self.content.clear();
        self.chunked = false;
        self.has_trailer = false;
    }
}

/// Split a coding header value on commas into `into`, trimming surrounding
/// spaces and dropping empty tokens. `chunked` is not appended; its presence
/// is the return value. Appending past `capacity` fails with
/// [`Error::UnsupportedEncoding`].
pub fn resolve_encoding(value: &str, into: &mut Vec<String>, capacity: usize) -> Result<bool> {
    let mut chunked = false;
    for raw in value.split(',') {
        let token = raw.trim_matches(' ');
        if token.is_empty() {
            continue;
        }
        if token == "chunked" {
            chunked = true;
            continue;
        }
        if into.len() >= capacity {
            return Err(Error::UnsupportedEncoding);
        }
        into.push(token.to_string());
    }
    Ok(chunked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tokens() {
        let mut toks = Vec::new();
        let chunked = resolve_encoding("gzip,  br , deflate", &mut toks, 8).unwrap();
        assert!(!chunked);
        assert_eq!(toks, ["gzip", "br", "deflate"]);
    }

    #[test]
    fn chunked_becomes_a_flag_not_a_token() {
        let mut toks = Vec::new();
        let chunked = resolve_encoding("gzip, chunked", &mut toks, 8).unwrap();
        assert!(chunked);
        assert_eq!(toks, ["gzip"]);
    }

    #[test]
    fn empty_tokens_are_dropped_silently() {
        let mut toks = Vec::new();
        let chunked = resolve_encoding(", ,chunked,", &mut toks, 8).unwrap();
        assert!(chunked);
        assert!(toks.is_empty());
    }

    #[test]
    fn overflowing_capacity_fails() {
        let mut toks = Vec::new();
        let err = resolve_encoding("a, b, c", &mut toks, 2).unwrap_err();
        assert!(matches!(err, Error::UnsupportedEncoding));
    }
}
