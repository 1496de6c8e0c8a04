//! Local model adapter.
//!
//! Performs the parts of model setup the service shell depends on: it
//! resolves a device and loads the voice packs found on disk. Inference
//! engines wrap or replace this behind [`TtsModel`].

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use tts_core::{ModelConfig, TtsModel, TtsResult};

use crate::device::{select_device, DevicePreference};
use crate::voices::{list_voice_packs, voice_name};

/// Model backed by a directory of voice packs.
#[derive(Debug)]
pub struct LocalModel {
    voices_dir: PathBuf,
    voice_extension: String,
    device: String,
    voices: Mutex<Vec<String>>,
}

impl LocalModel {
    /// Create a model from configuration, resolving the device up front.
    pub fn from_config(config: &ModelConfig) -> TtsResult<Self> {
        let preference: DevicePreference = config.device.parse()?;
        let device = select_device(preference)?;
        Ok(Self::new(&config.voices_dir, &config.voice_extension, device))
    }

    /// Create a model with an explicit device identifier.
    pub fn new(voices_dir: impl AsRef<Path>, voice_extension: &str, device: String) -> Self {
        Self {
            voices_dir: voices_dir.as_ref().to_path_buf(),
            voice_extension: voice_extension.to_string(),
            device,
            voices: Mutex::new(Vec::new()),
        }
    }

    /// Names of the voice packs loaded by the last successful setup.
    pub fn voices(&self) -> Vec<String> {
        self.voices.lock().clone()
    }
}

impl TtsModel for LocalModel {
    fn setup(&self) -> TtsResult<usize> {
        let packs = list_voice_packs(&self.voices_dir, &self.voice_extension)?;
        let names: Vec<String> = packs
            .iter()
            .filter_map(|p| voice_name(p).map(str::to_string))
            .collect();
        debug!(voices = ?names, "Voice packs found");

        let count = names.len();
        *self.voices.lock() = names;
        Ok(count)
    }

    fn device(&self) -> String {
        self.device.clone()
    }

    fn voices_dir(&self) -> &Path {
        &self.voices_dir
    }

    fn release(&self) {
        let mut voices = self.voices.lock();
        if !voices.is_empty() {
            info!(count = voices.len(), "Releasing voice packs");
        }
        voices.clear();
    }
}
