//! Digit classifier network and weight loading.

use std::io::Read;
use std::path::Path;

use crate::error::{ReconocerError, Result};
use crate::primitives::Matrix;

/// Flattened input size: a 28x28 grayscale image.
const IMAGE_SIZE: usize = 28 * 28;
/// Width of the two hidden layers.
const HIDDEN: usize = 16;
/// Number of digit classes.
const CLASSES: usize = 10;

/// Total parameter count of the network, in f32 elements.
///
/// The weight buffer holds exactly this many little-endian f32 values in
/// block order `W1, b1, W2, b2, W3, b3`.
pub const PARAM_COUNT: usize =
    IMAGE_SIZE * HIDDEN + HIDDEN + HIDDEN * HIDDEN + HIDDEN + HIDDEN * CLASSES + CLASSES;

/// Lifecycle of the network's weights.
///
/// `Failed` is terminal: a load error never leaves the network stuck in
/// `Loading`, and `predict` refuses anything but `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Constructed, no load attempted.
    Unloaded,
    /// A load is in progress.
    Loading,
    /// Weights decoded and validated; `predict` is callable.
    Ready,
    /// The last load attempt failed.
    Failed,
}

impl ModelState {
    /// Returns the state name for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModelState::Unloaded => "unloaded",
            ModelState::Loading => "loading",
            ModelState::Ready => "ready",
            ModelState::Failed => "failed",
        }
    }
}

/// The six parameter blocks, immutable once decoded.
#[derive(Debug)]
struct Parameters {
    w1: Matrix,
    b1: Matrix,
    w2: Matrix,
    b2: Matrix,
    w3: Matrix,
    b3: Matrix,
}

impl Parameters {
    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PARAM_COUNT * 4 {
            return Err(ReconocerError::CorruptModel {
                expected_bytes: PARAM_COUNT * 4,
                actual_bytes: bytes.len(),
            });
        }

        let floats: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        let mut cursor = 0;
        let mut take = |rows: usize, cols: usize| -> Result<Matrix> {
            let n = rows * cols;
            let block = floats[cursor..cursor + n].to_vec();
            cursor += n;
            Matrix::from_vec(rows, cols, block)
        };

        Ok(Self {
            w1: take(IMAGE_SIZE, HIDDEN)?,
            b1: take(1, HIDDEN)?,
            w2: take(HIDDEN, HIDDEN)?,
            b2: take(1, HIDDEN)?,
            w3: take(HIDDEN, CLASSES)?,
            b3: take(1, CLASSES)?,
        })
    }
}

/// Feed-forward digit classifier over pretrained weights.
///
/// The weight transport (file, HTTP fetch, embedded bytes) is the caller's
/// concern; the network accepts the delivered bytes and tracks an explicit
/// [`ModelState`] so callers can gate inference on readiness.
///
/// # Examples
///
/// ```
/// use reconocer::nn::{DigitNetwork, ModelState, PARAM_COUNT};
/// use reconocer::primitives::Matrix;
///
/// let net = DigitNetwork::from_bytes(&vec![0u8; PARAM_COUNT * 4]).expect("valid buffer");
/// assert_eq!(net.state(), ModelState::Ready);
///
/// let image = Matrix::zeros(1, 784);
/// let probs = net.predict(&image).expect("network is ready");
/// assert_eq!(probs.shape(), (1, 10));
/// ```
#[derive(Debug)]
pub struct DigitNetwork {
    state: ModelState,
    params: Option<Parameters>,
}

impl Default for DigitNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitNetwork {
    /// Creates an unloaded network.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ModelState::Unloaded,
            params: None,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ModelState {
        self.state
    }

    /// Returns true once weights are loaded and `predict` is callable.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == ModelState::Ready
    }

    /// Loads weights from a raw little-endian f32 buffer.
    ///
    /// On success the network transitions to `Ready`; on failure it parks
    /// in the terminal `Failed` state and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `CorruptModel` unless the buffer holds exactly
    /// [`PARAM_COUNT`] f32 values.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.state = ModelState::Loading;
        match Parameters::decode(bytes) {
            Ok(params) => {
                self.params = Some(params);
                self.state = ModelState::Ready;
                log::debug!("model loaded: {PARAM_COUNT} parameters");
                Ok(())
            }
            Err(e) => {
                self.params = None;
                self.state = ModelState::Failed;
                log::warn!("model load failed: {e}");
                Err(e)
            }
        }
    }

    /// Builds a ready network from a raw weight buffer.
    ///
    /// # Errors
    ///
    /// Returns `CorruptModel` for a buffer of the wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut net = Self::new();
        net.load_bytes(bytes)?;
        Ok(net)
    }

    /// Builds a ready network by draining a reader.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure or `CorruptModel` for a short or
    /// misaligned buffer.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Builds a ready network from a weight file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure or `CorruptModel` for a bad buffer.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Runs the forward pass on a flattened `1x784` image.
    ///
    /// Computation: `L1 = tanh(img*W1 + b1)`, `L2 = tanh(L1*W2 + b2)`,
    /// `L3 = L2*W3 + b3`, output `softmax(L3)`. The result is a `1x10`
    /// row of class probabilities summing to 1 (up to rounding). Pure
    /// function of the image and the loaded weights.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` before weights are loaded and
    /// `DimensionMismatch` if `image` is not `1x784`.
    pub fn predict(&self, image: &Matrix) -> Result<Matrix> {
        let params = match (self.state, &self.params) {
            (ModelState::Ready, Some(params)) => params,
            _ => {
                return Err(ReconocerError::NotReady {
                    state: self.state.as_str(),
                })
            }
        };

        let l1 = image.matmul(&params.w1)?.add(&params.b1)?.tanh();
        let l2 = l1.matmul(&params.w2)?.add(&params.b2)?.tanh();
        let l3 = l2.matmul(&params.w3)?.add(&params.b3)?;
        Ok(l3.softmax())
    }

    /// Predicts and reduces to the most likely digit and its probability.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`predict`](Self::predict).
    pub fn classify(&self, image: &Matrix) -> Result<(u8, f32)> {
        let probs = self.predict(image)?;
        let mut best = (0, f32::NEG_INFINITY);
        for (digit, &p) in probs.as_slice().iter().enumerate() {
            if p > best.1 {
                best = (digit, p);
            }
        }
        Ok((best.0 as u8, best.1))
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
