//! Writer for WAV files

use std::path::Path;

use hound::*;

/// Writes sample data as mono WAV file in 32-bit float format.
pub fn write(
    filename: impl AsRef<Path> + core::fmt::Display,
    sample_rate: f32,
    samples: &[f32],
) -> hound::Result<()> {
    let path = Path::new("out").join(filename.as_ref());

    // Create parent directories to the path if they don't exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: sample_rate as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;

    for sample in samples {
        writer.write_sample(*sample)?;
    }

    writer.finalize()
}
