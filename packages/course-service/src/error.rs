pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Catalogue unavailable: {message}")]
	CatalogueUnavailable { message: String },
}
impl From<course_catalogue::Error> for Error {
	fn from(err: course_catalogue::Error) -> Self {
		let message = match &err {
			course_catalogue::Error::Read { source, .. } => format!("{err} {source}"),
			course_catalogue::Error::Parse { source, .. } => format!("{err} {source}"),
		};

		Self::CatalogueUnavailable { message }
	}
}
