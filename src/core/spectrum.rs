//! Frequency sample storage and the template-to-bin pairing used for scaling.

use super::constants::FREQUENCY_BIN_COUNT;

/// Byte magnitudes, one per analyser bin. Starts (and stays, without a
/// microphone) all zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyBuffer {
    bins: Vec<u8>,
}

impl Default for FrequencyBuffer {
    fn default() -> Self {
        Self::zeroed(FREQUENCY_BIN_COUNT)
    }
}

impl FrequencyBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self { bins: vec![0; len] }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }

    /// Writable view handed to the analyser once per frame.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bins
    }

    pub fn is_silent(&self) -> bool {
        self.bins.iter().all(|b| *b == 0)
    }
}

/// Even template indices pair with the next bin, odd ones with the previous.
#[inline]
pub fn pair_index(geometry_index: usize) -> usize {
    geometry_index - (geometry_index % 2)
}

/// `frequency[pair] + frequency[pair + 1] / 2`.
///
/// Only the second bin is halved. Bins past the end of `frequency` read as 0.
#[inline]
pub fn pair_average(frequency: &[u8], geometry_index: usize) -> f32 {
    let pair = pair_index(geometry_index);
    let bin = |i: usize| frequency.get(i).copied().unwrap_or(0) as f32;
    bin(pair) + bin(pair + 1) / 2.0
}
