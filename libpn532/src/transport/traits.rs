// libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/device logic. It never
/// interprets the bytes it moves.
pub trait Transport {
    /// Send raw bytes to the device. Succeeds only if all bytes were accepted.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive at most `max_len` bytes, blocking for up to `timeout_ms`.
    /// Returns whatever arrived; a read that times out with nothing yields
    /// `Error::Timeout`.
    fn receive(&mut self, timeout_ms: u64, max_len: usize) -> Result<Vec<u8>>;

    /// Drop any bytes buffered by the transport. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, timeout_ms: u64, max_len: usize) -> Result<Vec<u8>> {
        (**self).receive(timeout_ms, max_len)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
