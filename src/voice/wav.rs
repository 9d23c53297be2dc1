use crate::error::{Result, SkedgeError};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use tracing::{debug, info};

/// Write mono f32 samples (-1.0..=1.0) to a 16-bit PCM WAV file
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = WavWriter::create(path.as_ref(), spec)
        .map_err(|e| SkedgeError::IOError(format!("Failed to create WAV writer: {}", e)))?;

    for &sample in samples {
        let sample_i16 = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(sample_i16)
            .map_err(|e| SkedgeError::IOError(format!("Failed to write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| SkedgeError::IOError(format!("Failed to finalize WAV file: {}", e)))?;

    info!("Wrote {} samples to {:?}", samples.len(), path.as_ref());
    Ok(())
}

/// Read a 16-bit PCM WAV file back as f32 samples and its sample rate
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let mut reader = WavReader::open(path.as_ref())
        .map_err(|e| SkedgeError::IOError(format!("Failed to open WAV file: {}", e)))?;

    let spec = reader.spec();
    debug!(
        "Reading WAV file: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(SkedgeError::IOError(format!(
            "Unsupported WAV format: {:?} {} bits",
            spec.sample_format, spec.bits_per_sample
        )));
    }

    let samples = reader
        .samples::<i16>()
        .map(|s| {
            s.map(|sample| sample as f32 / i16::MAX as f32)
                .map_err(|e| SkedgeError::IOError(format!("Failed to read sample: {}", e)))
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok((samples, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_write_and_read_back() {
        let path = std::env::temp_dir()
            .join("skedge-tests")
            .join(format!("{}.wav", Uuid::new_v4()));
        let samples: Vec<f32> = (0..800).map(|i| (i as f32 / 100.0).sin() * 0.5).collect();

        write_wav(&path, &samples, 8000).unwrap();
        let (read, rate) = read_wav(&path).unwrap();

        assert_eq!(rate, 8000);
        assert_eq!(read.len(), samples.len());
        for (a, b) in read.iter().zip(&samples) {
            assert!((a - b).abs() < 1e-3);
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let path = std::env::temp_dir()
            .join("skedge-tests")
            .join(format!("{}.wav", Uuid::new_v4()));

        write_wav(&path, &[2.0, -3.0], 8000).unwrap();
        let (read, _) = read_wav(&path).unwrap();
        assert!((read[0] - 1.0).abs() < 1e-3);
        assert!((read[1] + 1.0).abs() < 1e-3);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_wav("/definitely/not/here.wav");
        assert!(matches!(result, Err(SkedgeError::IOError(_))));
    }
}
