use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::foundation::SdkResult;

/// A configuration object to initialize Datadog's features.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfiguration {
    pub client_token: String,
    pub env: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl SdkConfiguration {
    pub fn new(client_token: impl Into<String>, env: impl Into<String>) -> Self {
        Self {
            client_token: client_token.into(),
            env: env.into(),
            application_id: None,
        }
    }

    /// Attaches the RUM application id; without it only Logs and Trace are enabled.
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }
}

/// The entry point to initialize Datadog's features, implemented by the
/// native SDK collaborator.
#[async_trait]
pub trait Sdk: Send + Sync {
    async fn initialize(&self, configuration: SdkConfiguration) -> SdkResult<()>;
}
