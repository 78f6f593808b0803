/// Failures at the engine's JSON boundary.
///
/// Parsing Markdown and serializing blocks never fail; only decoding or
/// encoding the editor's JSON can.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid block document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
