//! Output side of encode and decode.
//!
//! Shares and recovered blocks are pushed to a [`ShareSink`] one at a time.
//! The slice handed to [`ShareSink::emit`] is only borrowed for that call;
//! a sink that needs the bytes later must copy them.

use bytes::Bytes;

/// Receives shares (from encode) or recovered blocks (from decode).
///
/// Implemented for any `FnMut(usize, usize, &[u8])` closure.
pub trait ShareSink {
    /// Accept one output buffer.
    ///
    /// * `index` — share index (encode) or block position (decode)
    /// * `total` — `n` for encode, `k` for decode
    /// * `data` — the bytes, valid only until this call returns
    fn emit(&mut self, index: usize, total: usize, data: &[u8]);
}

impl<F> ShareSink for F
where
    F: FnMut(usize, usize, &[u8]),
{
    fn emit(&mut self, index: usize, total: usize, data: &[u8]) {
        self(index, total, data)
    }
}

/// An owned share or recovered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Share index (0..k for data, k..n for redundancy) or block position.
    pub index: usize,
    /// The raw bytes.
    pub data: Bytes,
}

/// A sink that copies everything it receives into owned [`Share`]s.
#[derive(Debug, Default)]
pub struct ShareCollector {
    shares: Vec<Share>,
}

impl ShareCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected shares, in emission order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Consume the collector and return the shares in emission order.
    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }
}

impl ShareSink for ShareCollector {
    fn emit(&mut self, index: usize, _total: usize, data: &[u8]) {
        self.shares.push(Share {
            index,
            data: Bytes::copy_from_slice(data),
        });
    }
}
