use crate::domain::error::ProviderError;
use crate::domain::ports::narrator::{Narrator, OpportunityBrief};

pub struct UnavailableNarrator;

#[async_trait::async_trait]
impl Narrator for UnavailableNarrator {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn narrate(&self, _brief: &OpportunityBrief) -> Result<String, ProviderError> {
        Err(ProviderError::ConfigurationAbsent)
    }
}
