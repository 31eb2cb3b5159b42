mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalogue, Config, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.catalogue.path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "catalogue.path must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.search.default_sort.as_str(), "distance" | "relevance") {
		return Err(Error::Validation {
			message: "search.default_sort must be one of distance or relevance.".to_string(),
		});
	}
	if cfg.search.overview_limit_chars == 0 {
		return Err(Error::Validation {
			message: "search.overview_limit_chars must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.search.default_sort = cfg.search.default_sort.trim().to_ascii_lowercase();

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
