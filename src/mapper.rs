//! Host-facing mapper plugin.
//!
//! The identity broker discovers mappers through [`IdentityProviderMapper`]:
//! a registration identity, a configuration schema and two entry points, one
//! per login flow. [`DateAttributeMapper`] implements it by reading the
//! configured profile field and delegating to [`AttributeSyncPolicy`].

use crate::config::MapperModel;
use crate::schema::{CONFIG_PROPERTIES, ConfigProperty};
use crate::source::{ProfileSource, SourceValue};
use crate::sync::{AttributeMutation, AttributeSyncPolicy, AttributeTarget, SyncContext};
use log::warn;
use serde::Serialize;

/// Compatibility marker meaning "any upstream identity provider".
pub const ANY_PROVIDER: &str = "*";

/// Contract a mapper plugin fulfils towards the broker.
pub trait IdentityProviderMapper: Send + Sync {
    /// Stable identifier the host selects the mapper by
    fn id(&self) -> &'static str;

    /// Identity provider types this mapper may be attached to
    fn compatible_providers(&self) -> &'static [&'static str];

    fn display_category(&self) -> &'static str;

    fn display_type(&self) -> &'static str;

    fn help_text(&self) -> &'static str;

    /// Options shown in the admin UI
    fn config_properties(&self) -> &'static [ConfigProperty];

    /// Runs while a first-login identity is imported, before the user exists.
    fn preprocess_federated_identity(
        &self,
        model: &MapperModel,
        profile: &dyn ProfileSource,
        identity: &mut dyn AttributeTarget,
    ) -> AttributeMutation;

    /// Runs on every later login against the stored user.
    fn update_brokered_user(
        &self,
        model: &MapperModel,
        profile: &dyn ProfileSource,
        user: &mut dyn AttributeTarget,
    ) -> AttributeMutation;

    /// Everything the host needs to register the mapper, in one value.
    fn descriptor(&self) -> MapperDescriptor {
        MapperDescriptor {
            id: self.id(),
            compatible_providers: self.compatible_providers(),
            display_category: self.display_category(),
            display_type: self.display_type(),
            help_text: self.help_text(),
            properties: self.config_properties(),
        }
    }
}

/// Serializable registration record of a mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperDescriptor {
    pub id: &'static str,
    pub compatible_providers: &'static [&'static str],
    pub display_category: &'static str,
    pub display_type: &'static str,
    pub help_text: &'static str,
    pub properties: &'static [ConfigProperty],
}

/// Mapper that stores a reformatted profile date as a user attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateAttributeMapper;

impl DateAttributeMapper {
    pub const PROVIDER_ID: &'static str = "date-attribute-mapper";
    const COMPATIBLE_PROVIDERS: &'static [&'static str] = &[ANY_PROVIDER];
    const DISPLAY_NAME: &'static str = "Date Attribute Mapper";

    pub fn new() -> Self {
        Self
    }

    fn sync(
        &self,
        context: SyncContext,
        model: &MapperModel,
        profile: &dyn ProfileSource,
        target: &mut dyn AttributeTarget,
    ) -> AttributeMutation {
        let source = match model.config.json_field_path() {
            Some(path) => profile.extract_field(path),
            None => {
                warn!("jsonFieldPath is not configured for mapper {}", model.name);
                SourceValue::Absent
            }
        };

        let mutation = AttributeSyncPolicy::new(model).decide(context, &source);
        mutation.apply(target);
        mutation
    }
}

impl IdentityProviderMapper for DateAttributeMapper {
    fn id(&self) -> &'static str {
        Self::PROVIDER_ID
    }

    fn compatible_providers(&self) -> &'static [&'static str] {
        Self::COMPATIBLE_PROVIDERS
    }

    fn display_category(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn display_type(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn help_text(&self) -> &'static str {
        "Transform date from input pattern to output pattern"
    }

    fn config_properties(&self) -> &'static [ConfigProperty] {
        &CONFIG_PROPERTIES
    }

    fn preprocess_federated_identity(
        &self,
        model: &MapperModel,
        profile: &dyn ProfileSource,
        identity: &mut dyn AttributeTarget,
    ) -> AttributeMutation {
        self.sync(SyncContext::FirstLogin, model, profile, identity)
    }

    fn update_brokered_user(
        &self,
        model: &MapperModel,
        profile: &dyn ProfileSource,
        user: &mut dyn AttributeTarget,
    ) -> AttributeMutation {
        self.sync(SyncContext::Update, model, profile, user)
    }
}
