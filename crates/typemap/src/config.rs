//! Mapping configuration consulted when type maps are built.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Flags read by the registry and the implicit mapping builder.
///
/// Loaded from TOML; missing keys take their defaults and unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
	/// Populate new type maps by matching property names.
	pub implicit_mapping: bool,
	/// Compare property names ignoring ASCII case.
	pub case_insensitive_names: bool,
	/// Leave destination properties unmapped when the source sample holds `null` for them.
	pub skip_null_sample_properties: bool,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			implicit_mapping: true,
			case_insensitive_names: false,
			skip_null_sample_properties: false,
		}
	}
}

impl Configuration {
	/// Parses a configuration document.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_implicit_mapping(mut self, enabled: bool) -> Self {
		self.implicit_mapping = enabled;
		self
	}

	pub fn with_case_insensitive_names(mut self, enabled: bool) -> Self {
		self.case_insensitive_names = enabled;
		self
	}

	pub fn with_skip_null_sample_properties(mut self, enabled: bool) -> Self {
		self.skip_null_sample_properties = enabled;
		self
	}
}
