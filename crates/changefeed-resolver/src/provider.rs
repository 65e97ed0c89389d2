use async_trait::async_trait;
use changefeed_config::{ChangeFeedAttribute, DEFAULT_CONNECTION_SETTING, TriggerValueType};
use changefeed_settings::{ConfigurationStore, NameResolver};
use tracing::{error, info, instrument};

use crate::context::ResolutionContext;
use crate::descriptor::{TriggerBindingDescriptor, create_descriptor};
use crate::error::BindingError;

/// A trigger parameter to bind: what was declared on it, and the value
/// shape its type asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRequest {
  pub attribute: ChangeFeedAttribute,
  pub value_type: TriggerValueType,
}

impl BindingRequest {
  pub fn new(attribute: ChangeFeedAttribute, value_type: TriggerValueType) -> Self {
    Self {
      attribute,
      value_type,
    }
  }
}

/// Creates trigger binding descriptors for declared parameters.
#[async_trait]
pub trait TriggerBindingProvider: Send + Sync {
  /// Create the descriptor for one parameter.
  ///
  /// This process:
  /// 1. Resolves connection strings for the monitored and lease accounts
  /// 2. Substitutes placeholders and derives lease defaults
  /// 3. Rejects a lease collection equal to the monitored collection
  async fn try_create(
    &self,
    request: &BindingRequest,
  ) -> Result<TriggerBindingDescriptor, BindingError>;
}

/// Standard provider backed by a host name resolver and configuration store.
pub struct StandardBindingProvider<N: NameResolver, S: ConfigurationStore> {
  name_resolver: N,
  configuration: S,
  default_connection_setting: String,
}

impl<N: NameResolver, S: ConfigurationStore> StandardBindingProvider<N, S> {
  /// Create a provider with the given collaborators.
  pub fn new(name_resolver: N, configuration: S) -> Self {
    Self {
      name_resolver,
      configuration,
      default_connection_setting: DEFAULT_CONNECTION_SETTING.to_string(),
    }
  }

  /// Use a different setting when an attribute names no connection.
  pub fn with_default_connection_setting(mut self, setting: impl Into<String>) -> Self {
    self.default_connection_setting = setting.into();
    self
  }

  fn create(&self, request: &BindingRequest) -> Result<TriggerBindingDescriptor, BindingError> {
    let ctx = ResolutionContext::new(&request.attribute, &self.name_resolver, &self.configuration)
      .with_default_connection_setting(&self.default_connection_setting);
    create_descriptor(&ctx, request.value_type)
  }
}

#[async_trait]
impl<N: NameResolver, S: ConfigurationStore> TriggerBindingProvider
  for StandardBindingProvider<N, S>
{
  #[instrument(
    name = "binding_create",
    skip(self, request),
    fields(
      database = %request.attribute.database_name,
      collection = %request.attribute.collection_name,
    )
  )]
  async fn try_create(
    &self,
    request: &BindingRequest,
  ) -> Result<TriggerBindingDescriptor, BindingError> {
    let result = self.create(request);

    match &result {
      Ok(descriptor) => {
        info!(
          lease_database = %descriptor.lease().database_name,
          lease_collection = %descriptor.lease().collection_name,
          value_type = ?descriptor.value_type(),
          "binding created"
        );
      }
      Err(e) => {
        error!(error = %e, kind = %e.kind(), setting = e.setting(), "binding failed");
      }
    }

    result
  }
}
