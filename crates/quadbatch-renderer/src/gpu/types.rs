use quadbatch_common::BackendError;

/// Errors that can occur while setting up or reading back the GPU target.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("readback error: {0}")]
    ReadbackError(String),
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<RendererError> for BackendError {
    fn from(e: RendererError) -> Self {
        match e {
            RendererError::AdapterNotFound => BackendError::AdapterNotFound,
            RendererError::DeviceError(msg) | RendererError::ReadbackError(msg) => {
                BackendError::Device(msg)
            }
        }
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}
