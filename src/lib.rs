//! Date attribute mapper for identity brokering.
//!
//! Reads a date-like value from a federated identity's profile, reformats it
//! from a configured input pattern to a configured output pattern, and stores
//! the result as a user attribute.
//!
//! # Core Components
//!
//! - [`DateAttributeConverter`] - Strict, pure reformatting between two date patterns
//! - [`AttributeSyncPolicy`] - Decides set/remove/no-op for first login and update flows
//! - [`DateAttributeMapper`] - Host adapter implementing [`IdentityProviderMapper`]
//!
//! # Quick Start
//!
//! ```rust
//! use date_attribute_mapper::{
//!     DateAttributeMapper, IdentityProviderMapper, InMemoryAttributes, MapperConfig,
//!     MapperModel, SourceValue,
//! };
//!
//! let model = MapperModel::new(
//!     "birthdate",
//!     MapperConfig::builder()
//!         .json_field_path("birthday")
//!         .input_pattern("yyyy-MM-dd")
//!         .output_pattern("dd/MM/yyyy")
//!         .target_attribute("birthdate")
//!         .build(),
//! );
//! let profile = |_: &str| SourceValue::scalar("1990-07-15");
//! let mut identity = InMemoryAttributes::new();
//!
//! DateAttributeMapper.preprocess_federated_identity(&model, &profile, &mut identity);
//! assert_eq!(identity.first("birthdate"), Some("15/07/1990"));
//! ```

pub mod config;
pub mod date_format;
pub mod error;
pub mod mapper;
pub mod schema;
pub mod source;
pub mod sync;

// Re-export commonly used types for convenience
pub use config::{MapperConfig, MapperModel};
pub use date_format::{DateAttributeConverter, DatePattern, convert};
pub use error::{ConversionFailure, ConversionResult, MapperError, MapperResult};
pub use mapper::{ANY_PROVIDER, DateAttributeMapper, IdentityProviderMapper, MapperDescriptor};
pub use schema::{CONFIG_PROPERTIES, ConfigProperty};
pub use source::{ProfileSource, SourceValue};
pub use sync::{AttributeMutation, AttributeSyncPolicy, AttributeTarget, InMemoryAttributes, SyncContext};
