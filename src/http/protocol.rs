/*
 * protocol.rs
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

//! Protocol version token.

/// Protocol version of a request or response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    Http09,
    Http10,
    Http11,
    /// Negotiate the newest supported version (currently HTTP/1.1).
    #[default]
    Auto,
}

impl Protocol {
    /// Match a wire token case-insensitively. Unknown tokens yield None.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        if token.eq_ignore_ascii_case(b"HTTP/1.1") {
            Some(Protocol::Http11)
        } else if token.eq_ignore_ascii_case(b"HTTP/1.0") {
            Some(Protocol::Http10)
        } else if token.eq_ignore_ascii_case(b"HTTP/0.9") {
            Some(Protocol::Http09)
        } else {
            None
        }
    }

    /// Token rendered onto the wire. `Auto` resolves to the newest version.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http09 => "HTTP/0.9",
            Protocol::Http10 => "HTTP/1.0",
            Protocol::Http11 | Protocol::Auto => "HTTP/1.1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_case_insensitively() {
        assert_eq!(Protocol::from_token(b"HTTP/1.1"), Some(Protocol::Http11));
        assert_eq!(Protocol::from_token(b"http/1.0"), Some(Protocol::Http10));
        assert_eq!(Protocol::from_token(b"Http/0.9"), Some(Protocol::Http09));
        assert_eq!(Protocol::from_token(b"HTTP/2"), None);
    }

    #[test]
    fn auto_renders_as_newest() {
        assert_eq!(Protocol::Auto.as_str(), "HTTP/1.1");
    }
}
