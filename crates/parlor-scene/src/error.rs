/// Errors produced by scene services.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A font resource path could not be resolved into a usable face.
    #[error("font resource unavailable: {path}")]
    FontUnavailable { path: String },
}
