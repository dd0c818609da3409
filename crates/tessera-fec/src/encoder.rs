//! Systematic erasure encoder.
//!
//! Splits the input into `k` equal blocks. Shares `0..k` are the blocks
//! themselves; shares `k..n` are GF(256) combinations of all `k` blocks
//! weighted by the corresponding encoding-matrix row.

use tessera_gf::addmul_many;
use tracing::debug;

use crate::code::FecCode;
use crate::error::FecError;
use crate::sink::{Share, ShareCollector, ShareSink};

impl FecCode {
    /// Encode `input` into `n` shares, pushing each to `sink` in index order.
    ///
    /// Every share is `input.len() / k` bytes. The buffer passed for a
    /// redundancy share is reused for the next one, so the sink must copy
    /// anything it keeps.
    ///
    /// # Errors
    ///
    /// Returns [`FecError::SizeMismatch`] if `input.len()` is not a multiple
    /// of `k`. Nothing is emitted in that case.
    pub fn encode<S>(&self, input: &[u8], sink: &mut S) -> Result<(), FecError>
    where
        S: ShareSink + ?Sized,
    {
        let (k, n) = (self.k(), self.n());
        if !input.len().is_multiple_of(k) {
            return Err(FecError::SizeMismatch {
                len: input.len(),
                k,
            });
        }

        let block_size = input.len() / k;
        let blocks: Vec<&[u8]> = (0..k)
            .map(|i| &input[i * block_size..(i + 1) * block_size])
            .collect();

        for (i, block) in blocks.iter().enumerate() {
            sink.emit(i, n, block);
        }

        let mut buf = vec![0u8; block_size];
        for i in k..n {
            buf.fill(0);
            addmul_many(&mut buf, &blocks, self.row(i));
            sink.emit(i, n, &buf);
        }

        debug!(k, n, block_size, "encoded input into shares");
        Ok(())
    }

    /// Encode `input` and return all `n` shares as owned buffers.
    pub fn encode_to_shares(&self, input: &[u8]) -> Result<Vec<Share>, FecError> {
        let mut collector = ShareCollector::new();
        self.encode(input, &mut collector)?;
        Ok(collector.into_shares())
    }
}
