//! Device selection for model placement.
//!
//! Resolution order for `Auto`: Metal (Apple Silicon) → CUDA (NVIDIA) → CPU.
//! The result is a plain device identifier that the lifecycle logs verbatim.

use std::str::FromStr;

use tracing::{info, warn};

use tts_core::{TtsError, TtsResult};

/// Identifier for the general-purpose processor.
pub const CPU: &str = "cpu";
/// Identifier for NVIDIA accelerators.
pub const CUDA: &str = "cuda";
/// Identifier for Apple Silicon accelerators.
pub const METAL: &str = "mps";

/// Device preference for model loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    /// Automatically select the best available device.
    #[default]
    Auto,
    /// Force CPU usage.
    Cpu,
    /// Force Metal GPU (Apple Silicon).
    Metal,
    /// Force CUDA GPU (NVIDIA).
    Cuda,
}

impl FromStr for DevicePreference {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "cpu" => Ok(Self::Cpu),
            "metal" | "mps" | "apple" => Ok(Self::Metal),
            "cuda" | "gpu" | "nvidia" => Ok(Self::Cuda),
            other => Err(TtsError::config(format!("unknown device: {other}"))),
        }
    }
}

/// Resolve a preference to a device identifier.
///
/// Forced accelerators that are unavailable are an error; `Auto` always
/// succeeds by falling back to the CPU.
pub fn select_device(preference: DevicePreference) -> TtsResult<String> {
    match preference {
        DevicePreference::Cpu => {
            info!("Using CPU device (forced)");
            Ok(CPU.to_string())
        }
        DevicePreference::Metal => {
            if is_metal_available() {
                info!("Using Metal GPU (Apple Silicon)");
                Ok(METAL.to_string())
            } else {
                Err(TtsError::device(
                    "Metal GPU requested but not available on this build/host",
                ))
            }
        }
        DevicePreference::Cuda => {
            if is_cuda_available() {
                info!("Using CUDA GPU (NVIDIA)");
                Ok(CUDA.to_string())
            } else {
                Err(TtsError::device(
                    "CUDA GPU requested but not available on this build/host",
                ))
            }
        }
        DevicePreference::Auto => Ok(select_auto()),
    }
}

fn select_auto() -> String {
    if is_metal_available() {
        info!("Auto-selected Metal GPU (Apple Silicon)");
        return METAL.to_string();
    }
    if is_cuda_available() {
        info!("Auto-selected CUDA GPU (NVIDIA)");
        return CUDA.to_string();
    }
    if cfg!(any(feature = "cuda", feature = "metal")) {
        warn!("GPU support compiled in but no device found");
    }
    info!("Using CPU device (no GPU available)");
    CPU.to_string()
}

/// Check if a Metal device can be used.
pub fn is_metal_available() -> bool {
    cfg!(all(feature = "metal", target_os = "macos"))
}

/// Check if a CUDA device can be used.
///
/// Requires the `cuda` feature and a `CUDA_VISIBLE_DEVICES` value that does
/// not hide every device.
pub fn is_cuda_available() -> bool {
    if !cfg!(feature = "cuda") {
        return false;
    }
    cuda_devices_visible(std::env::var("CUDA_VISIBLE_DEVICES").ok().as_deref())
}

fn cuda_devices_visible(visible: Option<&str>) -> bool {
    match visible.map(str::trim) {
        None => true,
        Some("") | Some("-1") | Some("none") | Some("NoDevFiles") => false,
        Some(_) => true,
    }
}
