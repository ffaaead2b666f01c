use crate::key::TypeKey;

/// Registry operation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// An explicit registration targeted a key that already holds a type map.
	#[error("type map already registered: {key}")]
	DuplicateKey { key: TypeKey },
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to parse configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Value conversion failures reported by converters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
	#[error("converter does not accept {found} values")]
	Unsupported { found: &'static str },
	#[error("invalid value: {0}")]
	Invalid(String),
}
