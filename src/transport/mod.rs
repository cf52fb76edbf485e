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

//! Connection: duration-bounded, pushback-capable read/write channel over a
//! byte-stream transport. One connection backs one session.

mod unreader;

pub use unreader::Unreader;

use std::net::SocketAddr;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::config::SessionConfig;
use crate::error::{Error, Result};

/// Any byte-stream duplex channel usable as the session transport.
pub trait Transport: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Transport for T {}

/// Duplex channel with per-operation deadlines and pushback.
///
/// `read` returns a zero-copy slice of a reused internal buffer; each call
/// recomputes its deadline from "now + configured duration", so timeouts
/// bound individual operations, not the connection lifetime.
pub struct Connection<T: Transport> {
    transport: T,
    remote: Option<SocketAddr>,
    unreader: Unreader,
    buf: BytesMut,
    buf_size: usize,
    read_timeout: std::time::Duration,
    write_timeout: std::time::Duration,
}

impl<T: Transport> Connection<T> {
    pub fn new(transport: T, remote: Option<SocketAddr>, config: &SessionConfig) -> Self {
        Self {
            transport,
            remote,
            unreader: Unreader::new(),
            buf: BytesMut::with_capacity(config.read_buffer_size),
            buf_size: config.read_buffer_size,
            read_timeout: config.read_timeout,
            write_timeout: config.write_timeout,
        }
    }

    /// Read the next piece of data: pending pushback first, otherwise one
    /// transport read bounded by the read timeout. A closed peer surfaces as
    /// [`Error::Closed`], an elapsed deadline as [`Error::TimedOut`].
    pub async fn read(&mut self) -> Result<Bytes> {
        if let Some(pending) = self.unreader.take() {
            return Ok(pending);
        }
        self.buf.reserve(self.buf_size);
        let n = timeout(self.read_timeout, self.transport.read_buf(&mut self.buf))
            .await
            .map_err(|_| Error::TimedOut)??;
        if n == 0 {
            return Err(Error::Closed);
        }
        Ok(self.buf.split().freeze())
    }

    /// Push bytes back so the next `read` replays them. At most one pushback
    /// may be outstanding; see [`Unreader::unread`].
    pub fn unread(&mut self, bytes: Bytes) {
        self.unreader.unread(bytes);
    }

    /// Write the whole buffer and flush, bounded by the write timeout.
    pub async fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        timeout(self.write_timeout, async {
            self.transport.write_all(bytes).await?;
            self.transport.flush().await
        })
        .await
        .map_err(|_| Error::TimedOut)??;
        Ok(())
    }

    /// Remote endpoint, when the transport has one (TCP peer address).
    pub fn remote(&self) -> Option<SocketAddr> {
        self.remote
    }

    pub async fn shutdown(&mut self) -> Result<()> {
        self.transport.shutdown().await?;
        Ok(())
    }
}
