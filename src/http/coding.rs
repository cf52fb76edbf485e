/*
 * coding.rs
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

//! Codec registry: maps a coding token to an encoder/decoder. The codecs
//! themselves (gzip, deflate, ...) are supplied by the caller; only the
//! registration and dispatch live here.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Encodes a payload under one coding token.
pub trait Encoder: Send + Sync {
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Decodes a payload under one coding token.
pub trait Decoder: Send + Sync {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Two independent token maps, one per direction. Tokens are
/// case-sensitive. Registering `gzip` or `compress` also registers the
/// legacy `x-` alias pointing at the same codec.
#[derive(Default)]
pub struct CodingRegistry {
    encoders: HashMap<String, Arc<dyn Encoder>>,
    decoders: HashMap<String, Arc<dyn Decoder>>,
}

/// Legacy alias still used by some old peers, per the Content-Encoding
/// registry: gzip/x-gzip, compress/x-compress.
fn legacy_alias(token: &str) -> Option<&'static str> {
    match token {
        "gzip" => Some("x-gzip"),
        "compress" => Some("x-compress"),
        _ => None,
    }
}

impl CodingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_encoder(&mut self, token: &str, encoder: Arc<dyn Encoder>) {
        if let Some(alias) = legacy_alias(token) {
            self.encoders.insert(alias.to_string(), encoder.clone());
        }
        self.encoders.insert(token.to_string(), encoder);
    }

    pub fn add_decoder(&mut self, token: &str, decoder: Arc<dyn Decoder>) {
        if let Some(alias) = legacy_alias(token) {
            self.decoders.insert(alias.to_string(), decoder.clone());
        }
        self.decoders.insert(token.to_string(), decoder);
    }

    /// Encode `input` with the codec registered under `token`.
    pub fn encode(&self, token: &str, input: &[u8]) -> Result<Vec<u8>> {
        match self.encoders.get(token) {
            Some(encoder) => encoder.encode(input),
            None => Err(Error::UnknownCoding(token.to_string())),
        }
    }

    /// Decode `input` with the codec registered under `token`.
    pub fn decode(&self, token: &str, input: &[u8]) -> Result<Vec<u8>> {
        match self.decoders.get(token) {
            Some(decoder) => decoder.decode(input),
            None => Err(Error::UnknownCoding(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Toy codec: reverses bytes both ways.
    struct Mirror;

    impl Encoder for Mirror {
        fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }
    }

    impl Decoder for Mirror {
        fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }
    }

    #[test]
    fn gzip_registration_covers_x_gzip() {
        let mut registry = CodingRegistry::new();
        registry.add_decoder("gzip", Arc::new(Mirror));
        assert_eq!(registry.decode("gzip", b"abc").unwrap(), b"cba");
        assert_eq!(registry.decode("x-gzip", b"abc").unwrap(), b"cba");
    }

    #[test]
    fn compress_registration_covers_x_compress() {
        let mut registry = CodingRegistry::new();
        registry.add_encoder("compress", Arc::new(Mirror));
        assert!(registry.encode("x-compress", b"ab").is_ok());
    }

    #[test]
    fn unknown_token_fails_and_registry_survives() {
        let mut registry = CodingRegistry::new();
        registry.add_encoder("gzip", Arc::new(Mirror));
        match registry.decode("br", b"x") {
            Err(Error::UnknownCoding(token)) => assert_eq!(token, "br"),
            other => panic!("expected unknown coding, got {:?}", other.is_ok()),
        }
        // lookup failure must not disturb existing registrations
        assert!(registry.encode("gzip", b"x").is_ok());
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let mut registry = CodingRegistry::new();
        registry.add_encoder("gzip", Arc::new(Mirror));
        assert!(registry.encode("GZIP", b"x").is_err());
    }
}
