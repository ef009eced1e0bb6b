use serde::{Deserialize, Serialize};

/// Sample encoding identifier, as negotiated with the media channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// 8-bit A-law companded
    Alaw,
    /// 16-bit signed linear, little-endian
    Slin16,
}

/// Description of a sample encoding, selected once per session
///
/// `frame_bytes()` bounds the number of bytes read from the generator in one
/// pacing cycle; everything else about chunk sizing and frame duration is
/// derived from these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatProfile {
    /// Sample format the channel must be switched to
    pub format: SampleFormat,
    /// Sample rate in Hz
    pub samples_per_second: u32,
    /// Bytes per sample (1 for companded, 2 for 16-bit linear)
    pub bytes_per_sample: usize,
    /// Samples carried in one outgoing frame
    pub samples_per_frame: usize,
}

impl FormatProfile {
    /// 8kHz mono A-law, 20ms frames
    pub const ALAW_8K: FormatProfile = FormatProfile {
        format: SampleFormat::Alaw,
        samples_per_second: 8000,
        bytes_per_sample: 1,
        samples_per_frame: 160,
    };

    /// 8kHz mono 16-bit signed linear, 20ms frames
    pub const SLIN_8K: FormatProfile = FormatProfile {
        format: SampleFormat::Slin16,
        samples_per_second: 8000,
        bytes_per_sample: 2,
        samples_per_frame: 160,
    };

    /// Maximum number of bytes read from the generator per cycle
    pub fn frame_bytes(&self) -> usize {
        self.bytes_per_sample * self.samples_per_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alaw_profile_frame_bytes() {
        let profile = FormatProfile::ALAW_8K;
        assert_eq!(profile.frame_bytes(), 160);
        assert_eq!(profile.format, SampleFormat::Alaw);
    }

    #[test]
    fn test_slin_profile_frame_bytes() {
        let profile = FormatProfile::SLIN_8K;
        assert_eq!(profile.frame_bytes(), 320);
        assert_eq!(profile.samples_per_frame, 160);
    }
}
