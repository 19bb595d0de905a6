// libpn532/src/transport/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: Vec<Vec<u8>>,
    reads: Vec<(u64, usize)>,
    send_failures: usize,
}

/// Mock transport for unit tests. It records sent payloads and returns queued
/// responses. Clones share state, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Empty mock: nothing queued, every send succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // a panic inside a test poisons the lock; keep serving the data
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue bytes to be returned by a later `receive`. An empty entry
    /// simulates a read that returns nothing.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state().responses.push(resp);
    }

    /// Make the next `n` sends fail (for tests).
    pub fn set_send_failures(&self, n: usize) {
        self.state().send_failures = n;
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state().sent.clone()
    }

    /// Forget recorded sends; reads and queued responses are kept.
    pub fn clear_sent(&self) {
        self.state().sent.clear();
    }

    /// `(timeout_ms, max_len)` of every receive call, in order.
    pub fn reads(&self) -> Vec<(u64, usize)> {
        self.state().reads.clone()
    }

    /// Responses queued but not read yet.
    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut st = self.state();
        if st.send_failures > 0 {
            st.send_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        st.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64, max_len: usize) -> Result<Vec<u8>> {
        let mut st = self.state();
        st.reads.push((timeout_ms, max_len));
        if st.responses.is_empty() {
            return Err(Error::Timeout);
        }
        let mut resp = st.responses.remove(0);
        if resp.len() > max_len {
            // leave the tail for the next read, like a bulk endpoint would
            let tail = resp.split_off(max_len);
            st.responses.insert(0, tail);
        }
        Ok(resp)
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears recorded sends but keeps queued responses so tests can
        // pre-seed replies before handing the transport over.
        self.state().sent.clear();
        Ok(())
    }
}
