#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalogue at {path:?}.")]
	Read { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse catalogue at {path:?}.")]
	Parse { path: std::path::PathBuf, source: serde_json::Error },
}
