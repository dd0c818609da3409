//! Erasure decoder.
//!
//! Rebuilds the `k` original blocks from any `k` (or more) of the `n`
//! shares produced by [`FecCode::encode`].

use std::collections::BTreeMap;

use tessera_gf::{addmul_many, invert_matrix};
use tracing::{debug, error, trace};

use crate::code::FecCode;
use crate::error::FecError;
use crate::sink::ShareSink;

impl FecCode {
    /// Decode the original blocks from a set of shares keyed by index.
    ///
    /// Exactly `k` shares are used. For each position `i` in `0..k`, the
    /// share with index `i` is taken if it is the smallest unused index;
    /// otherwise the unused share with the largest index fills the slot.
    ///
    /// Primary shares (index `< k`) are emitted immediately as
    /// `(position, k, data)`. The remaining positions are recovered after
    /// inverting the decode matrix and emitted afterwards in increasing
    /// position order. Each of the `k` positions is emitted exactly once.
    ///
    /// # Errors
    ///
    /// * [`FecError::InsufficientShares`] if fewer than `k` shares are given
    /// * [`FecError::InvalidIndex`] if any index is `>= n`
    /// * [`FecError::ShareSizeMismatch`] if the shares differ in length
    /// * [`FecError::Matrix`] if the decode matrix is singular, which only
    ///   happens if the code itself is inconsistent
    ///
    /// Only the last case can occur after something has been emitted.
    pub fn decode<T, S>(&self, shares: &BTreeMap<usize, T>, sink: &mut S) -> Result<(), FecError>
    where
        T: AsRef<[u8]>,
        S: ShareSink + ?Sized,
    {
        let (k, n) = (self.k(), self.n());

        if shares.len() < k {
            return Err(FecError::InsufficientShares {
                needed: k,
                got: shares.len(),
            });
        }
        if let Some(&index) = shares.keys().next_back().filter(|&&index| index >= n) {
            return Err(FecError::InvalidIndex { index, n });
        }

        let entries: Vec<(usize, &[u8])> = shares
            .iter()
            .map(|(&index, data)| (index, data.as_ref()))
            .collect();
        let share_size = entries[0].1.len();
        if let Some(&(index, data)) = entries.iter().find(|(_, data)| data.len() != share_size) {
            return Err(FecError::ShareSizeMismatch {
                index,
                expected: share_size,
                got: data.len(),
            });
        }

        // Pick k shares: take index i at position i when it is the smallest
        // remaining, else the largest remaining. The two cursors never meet
        // because at most k <= entries.len() shares are taken.
        let mut lo = 0;
        let mut hi = entries.len();
        let mut dec_matrix = vec![0u8; k * k];
        let mut selected: Vec<(usize, &[u8])> = Vec::with_capacity(k);

        for i in 0..k {
            let (index, data) = if entries[lo].0 == i {
                lo += 1;
                entries[lo - 1]
            } else {
                hi -= 1;
                entries[hi]
            };

            let row = &mut dec_matrix[i * k..(i + 1) * k];
            if index < k {
                debug_assert_eq!(index, i);
                row[i] = 1;
                sink.emit(i, k, data);
            } else {
                row.copy_from_slice(self.row(index));
            }
            selected.push((index, data));
        }

        let missing = selected.iter().filter(|(index, _)| *index >= k).count();
        debug!(
            k,
            n,
            supplied = shares.len(),
            missing,
            share_size,
            "decoding blocks from shares"
        );

        if missing == 0 {
            trace!("all primary shares present, skipping matrix inversion");
            return Ok(());
        }

        invert_matrix(&mut dec_matrix, k).map_err(|e| {
            let indices: Vec<usize> = selected.iter().map(|(index, _)| *index).collect();
            error!(k, n, ?indices, error = %e, "decode matrix inversion failed");
            FecError::from(e)
        })?;

        let sources: Vec<&[u8]> = selected.iter().map(|(_, data)| *data).collect();
        let mut buf = vec![0u8; share_size];
        for (i, (index, _)) in selected.iter().enumerate() {
            if *index < k {
                continue;
            }
            buf.fill(0);
            addmul_many(&mut buf, &sources, &dec_matrix[i * k..(i + 1) * k]);
            trace!(position = i, from_share = index, "recovered block");
            sink.emit(i, k, &buf);
        }

        Ok(())
    }

    /// Decode and concatenate the `k` blocks in position order.
    ///
    /// For data encoded with [`FecCode::encode`], this is the original
    /// input.
    pub fn decode_to_vec<T>(&self, shares: &BTreeMap<usize, T>) -> Result<Vec<u8>, FecError>
    where
        T: AsRef<[u8]>,
    {
        let share_size = shares.values().next().map_or(0, |data| data.as_ref().len());
        let mut out = vec![0u8; self.k() * share_size];
        self.decode(shares, &mut |position: usize, _total: usize, data: &[u8]| {
            out[position * share_size..(position + 1) * share_size].copy_from_slice(data);
        })?;
        Ok(out)
    }
}

/// Index a list of `(index, data)` pairs for [`FecCode::decode`].
///
/// # Errors
///
/// Returns [`FecError::DuplicateShare`] if an index appears twice.
pub fn shares_from_pairs<T>(pairs: &[(usize, T)]) -> Result<BTreeMap<usize, &[u8]>, FecError>
where
    T: AsRef<[u8]>,
{
    let mut shares = BTreeMap::new();
    for (index, data) in pairs {
        if shares.insert(*index, data.as_ref()).is_some() {
            return Err(FecError::DuplicateShare { index: *index });
        }
    }
    Ok(shares)
}
