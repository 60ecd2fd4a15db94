use std::sync::Arc;

use crate::domain::entities::evaluation::{Narration, NarrationSource, OpportunityEvaluation};
use crate::domain::error::ProviderError;
use crate::domain::ports::narrator::{Narrator, OpportunityBrief};

pub struct NarrateUseCase {
    narrator: Arc<dyn Narrator>,
}

impl NarrateUseCase {
    pub fn new(narrator: Arc<dyn Narrator>) -> Self {
        Self { narrator }
    }

    /// Ask the narrator for prose. Never fails; problems are reported in the
    /// returned [`Narration`].
    pub async fn execute(&self, evaluation: &OpportunityEvaluation) -> Narration {
        let brief = OpportunityBrief::from(evaluation);
        match self.narrator.narrate(&brief).await {
            Ok(analysis) => Narration {
                analysis,
                source: NarrationSource::Model,
            },
            Err(ProviderError::ConfigurationAbsent) => Narration {
                analysis: "AI analysis not available. Set EMD_HUNTER_LLM_API_KEY to enable it."
                    .into(),
                source: NarrationSource::Unavailable,
            },
            Err(e) => {
                tracing::warn!(narrator = self.narrator.name(), error = %e, "narration failed");
                Narration {
                    analysis: format!("AI analysis error: {e}"),
                    source: NarrationSource::Error,
                }
            }
        }
    }
}
