use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use ushiro_core::humanize::noise::FillerSet;
use ushiro_core::{HumanizeResult, Humanizer, Lexicon, LexiconTokenizer, RuleTables, Tokenizer};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "USHIRO_CONFIG";

/// Configuration file used when `USHIRO_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "./ushiro.toml";

/// Server configuration, read from a TOML file.
///
/// Every field is optional in the file; missing fields fall back to
/// [`ServerConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	/// Bind address.
	pub host: String,

	/// Bind port.
	pub port: u16,

	/// Tab or comma separated lexicon file. `None` uses the built-in table.
	pub lexicon_path: Option<PathBuf>,

	/// Extra words for the tokenizer, one per line.
	pub user_dictionary: Option<PathBuf>,

	/// Replaces the built-in filler phrases when non-empty.
	pub fillers: Option<Vec<String>>,

	/// Origins allowed by CORS. `*` allows any origin.
	pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			lexicon_path: None,
			user_dictionary: None,
			fillers: None,
			allowed_origins: vec!["*".to_owned()],
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from `USHIRO_CONFIG` (or `./ushiro.toml`)
	/// and applies the `USHIRO_HOST` / `USHIRO_PORT` overrides.
	pub fn load() -> Result<Self, Box<dyn Error>> {
		let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
		let mut config = Self::load_from(Path::new(&path))?;
		config.apply_overrides(|key| std::env::var(key).ok());
		Ok(config)
	}

	/// Reads `path`, or returns the defaults if it does not exist.
	pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
		if !path.exists() {
			info!("Config file {:?} not found, using defaults", path);
			return Ok(Self::default());
		}

		let content = std::fs::read_to_string(path)?;
		let config: Self = toml::from_str(&content)?;
		info!("Loaded config from {:?}", path);
		Ok(config)
	}

	/// Applies host / port overrides looked up through `lookup`.
	///
	/// An unparsable port is ignored with a warning.
	pub fn apply_overrides<F>(&mut self, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(host) = lookup("USHIRO_HOST") {
			self.host = host;
		}
		if let Some(port) = lookup("USHIRO_PORT") {
			match port.trim().parse::<u16>() {
				Ok(port) => self.port = port,
				Err(e) => warn!("Ignoring USHIRO_PORT={port}: {e}"),
			}
		}
	}

	/// `true` when CORS should accept any origin.
	pub fn allows_any_origin(&self) -> bool {
		self.allowed_origins.iter().any(|origin| origin == "*")
	}

	/// Builds the shared humanizer described by this configuration.
	///
	/// # Behavior
	/// - A configured lexicon that cannot be read yields an empty lexicon.
	/// - A user dictionary that cannot be read leaves the humanizer without
	///   a tokenizer, so requests are echoed back unchanged.
	///
	/// # Errors
	/// Returns an error only if a built-in rule pattern fails to compile.
	pub fn build_humanizer(&self) -> HumanizeResult<Humanizer> {
		let lexicon = match &self.lexicon_path {
			Some(path) => Lexicon::load_or_empty(path),
			None => Lexicon::builtin(),
		};

		let tokenizer: Option<Arc<dyn Tokenizer>> = match &self.user_dictionary {
			Some(path) => match LexiconTokenizer::with_user_dictionary(lexicon.words(), path) {
				Ok(tokenizer) => Some(Arc::new(tokenizer)),
				Err(e) => {
					error!("Tokenizer initialization failed: {e}");
					None
				}
			},
			None => Some(Arc::new(LexiconTokenizer::new(lexicon.words()))),
		};

		let mut tables = RuleTables::standard(lexicon)?;
		if let Some(fillers) = &self.fillers {
			let fillers = FillerSet::new(fillers);
			if fillers.is_empty() {
				warn!("Configured filler list is empty, keeping the built-in fillers");
			} else {
				tables = tables.with_fillers(fillers);
			}
		}

		Ok(Humanizer::new(tokenizer, tables))
	}
}
