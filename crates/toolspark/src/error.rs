/// Collaborator failures raised while a tool computes.
///
/// These never reach the user directly: the pipeline logs them and shows the
/// tool's failure message instead.
#[derive(thiserror::Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("QR encoding failed: {0}")]
    QrEncoding(String),

    #[error("Image error: {0}")]
    Image(String),
}
