/*
 * mod.rs
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

//! HTTP surface types: requests, responses, bodies, methods, protocol
//! versions, encoding metadata, and the coding registry.

pub mod body;
pub mod coding;
pub mod encoding;
pub mod method;
pub mod protocol;
pub mod request;
pub mod response;

pub use body::Body;
pub use coding::{CodingRegistry, Decoder, Encoder};
pub use encoding::Encoding;
pub use method::Method;
pub use protocol::Protocol;
pub use request::{BodySource, Request};
pub use response::Response;
