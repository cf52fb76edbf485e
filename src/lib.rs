/*
 * lib.rs
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

//! Telaio is an HTTP/1.x client engine built around one idea: parse
//! incrementally from whatever the network delivers, and hand bytes you did
//! not consume back to the connection instead of buffering ahead.
//!
//! A [`Session`](session::Session) owns one connection and reuses its
//! request, response, and buffer state across round trips. Response bodies
//! are lazy: nothing past the header block is read until the caller asks.
//!
//! ```no_run
//! use telaio::session::Session;
//!
//! # async fn run() -> telaio::error::Result<()> {
//! let mut session = Session::connect("example.com:80").await?;
//! session.get("/").with_header("Host", "example.com");
//! let response = session.send().await?;
//! println!("{} {}", response.code, response.status);
//! let text = session.body().full().await?.to_vec();
//! println!("{} body bytes", text.len());
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod session;
pub mod transport;

mod h1;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use headers::Headers;
pub use http::{Body, Method, Protocol, Request, Response};
pub use session::Session;
