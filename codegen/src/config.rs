//! Synthesizer configuration.
//!
//! Configuration only decides which pre-checks run and what gets logged; it
//! never changes the generated text.

use bon::bon;

/// Configuration of the validating [`crate::Synthesizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    /// Validate descriptors and type spellings before synthesis.
    pub validate: bool,
    /// Emit every synthesized fragment as a trace-level event.
    pub log_source: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self { validate: true, log_source: false }
    }
}

#[bon]
impl SynthConfig {
    /// Create a synthesizer configuration with builder pattern.
    #[builder(finish_fn = build)]
    pub fn builder(#[builder(default = true)] validate: bool, #[builder(default = false)] log_source: bool) -> Self {
        Self { validate, log_source }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `OPSYNTH_NO_VALIDATE` - Skip descriptor validation if set
    /// * `OPSYNTH_LOG_SOURCE` - Log full generated source at trace level if set
    pub fn from_env() -> Self {
        let validate = std::env::var("OPSYNTH_NO_VALIDATE").is_err();
        let log_source = std::env::var("OPSYNTH_LOG_SOURCE").is_ok();

        Self { validate, log_source }
    }
}
