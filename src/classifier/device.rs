use candle_core::Device;
use tracing::{debug, info, warn};

type OpenDevice = fn() -> candle_core::Result<Device>;

/// GPU backends compiled into this build, in the order they are tried.
fn gpu_backends() -> Vec<(&'static str, OpenDevice)> {
    #[allow(unused_mut)]
    let mut backends: Vec<(&'static str, OpenDevice)> = Vec::new();

    #[cfg(feature = "metal")]
    backends.push(("metal", || Device::new_metal(0)));

    #[cfg(feature = "cuda")]
    backends.push(("cuda", || Device::new_cuda(0)));

    backends
}

/// First GPU that opens, else the CPU.
///
/// A GPU that fails to open is not an error: the classifier is small enough
/// to serve from the CPU.
pub fn select_device() -> Device {
    for (backend, open) in gpu_backends() {
        match open() {
            Ok(device) => {
                info!(backend, "Style classifier on GPU");
                return device;
            }
            Err(e) => warn!(backend, error = %e, "GPU backend did not open"),
        }
    }

    debug!("Style classifier on CPU");
    Device::Cpu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    #[test]
    fn test_cpu_only_build_selects_cpu() {
        assert!(gpu_backends().is_empty());
        assert!(matches!(select_device(), Device::Cpu));
    }

    #[test]
    fn test_select_device_always_returns_a_device() {
        let device = select_device();
        assert!(device.is_cpu() || device.is_cuda() || device.is_metal());
    }
}
