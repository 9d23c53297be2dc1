//! Capped sample buffer for microphone capture
//!
//! Keeps at most a fixed number of samples. When full, writing new samples
//! drops the oldest ones, so a long recording keeps its most recent part.

use parking_lot::Mutex;
use ringbuf::{traits::*, HeapRb};
use std::sync::Arc;

/// Thread-safe ring buffer of mono f32 samples
#[derive(Clone)]
pub struct CaptureBuffer {
    buffer: Arc<Mutex<HeapRb<f32>>>,
}

impl CaptureBuffer {
    /// Create a buffer holding at most `capacity` samples
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(HeapRb::new(capacity))),
        }
    }

    /// Buffer sized for `seconds` of audio at `sample_rate`
    pub fn for_duration(seconds: u32, sample_rate: u32) -> Self {
        let capacity = (seconds as usize * sample_rate as usize).max(1);
        Self::new(capacity)
    }

    /// Append samples, overwriting the oldest when full
    pub fn write(&self, samples: &[f32]) -> usize {
        let mut buffer = self.buffer.lock();
        for &sample in samples {
            if buffer.try_push(sample).is_err() {
                let _ = buffer.try_pop();
                let _ = buffer.try_push(sample);
            }
        }
        samples.len()
    }

    /// Remove and return everything currently buffered, oldest first
    pub fn drain(&self) -> Vec<f32> {
        let mut buffer = self.buffer.lock();
        let mut samples = Vec::with_capacity(buffer.occupied_len());
        while let Some(sample) = buffer.try_pop() {
            samples.push(sample);
        }
        samples
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().occupied_len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.lock().capacity().get()
    }
}
