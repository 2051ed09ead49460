use std::{env, path::PathBuf, time::Duration};

use nagayo_core::fetch::DEFAULT_TIMEOUT;

use crate::error::{env_error, ServerResult};

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
	pub port: u16,
	/// Schedule page queried with `year` and `month`
	pub schedule_url: String,
	pub fetch_timeout: Duration,
	/// Directory holding `index.html`
	pub static_dir: PathBuf,
}

impl Config {
	/// Load `.env` if present, then read the environment.
	pub fn load() -> ServerResult<Self> {
		dotenvy::dotenv().ok();

		let port = env::var("PORT")
			.map_err(|_| env_error("PORT", "must be set"))?
			.parse()
			.map_err(|_| env_error("PORT", "must be a port number"))?;

		let schedule_url =
			env::var("SCHEDULE_URL").unwrap_or_else(|_| nagayo_core::SCHEDULE_URL.to_string());

		let fetch_timeout = match env::var("FETCH_TIMEOUT_SECS") {
			Ok(secs) => Duration::from_secs(
				secs.parse()
					.map_err(|_| env_error("FETCH_TIMEOUT_SECS", "must be a number of seconds"))?,
			),
			Err(_) => DEFAULT_TIMEOUT,
		};

		let static_dir = env::var("STATIC_DIR").map_or_else(|_| PathBuf::from("static"), PathBuf::from);

		Ok(Self {
			port,
			schedule_url,
			fetch_timeout,
			static_dir,
		})
	}
}
