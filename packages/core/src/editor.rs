// ABOUTME: Campaign form editor state: brief, last result, error and loading flag
// ABOUTME: Submission is split into begin/finish halves so an event loop can run it concurrently

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::brief::{BriefUpdate, PersonaUpdate};
use crate::error::SubmitError;
use crate::response::RecommendationResult;
use crate::types::CampaignBrief;

/// The external service that turns a brief into a plan and previews
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn segment(&self, brief: &CampaignBrief) -> Result<RecommendationResult, SubmitError>;
}

/// What to do with a response when several submits overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Every response is applied as it arrives; the last one to resolve wins
    #[default]
    LastResponseWins,
    /// Responses to requests superseded by a newer submit are dropped
    DiscardSuperseded,
}

/// Identifies one submit so its outcome can be matched on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the brief being edited plus the outcome of the last submit
///
/// `loading`, `error` and `result` are independent: a stale result or error
/// stays visible while a new submit is in flight.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    brief: CampaignBrief,
    result: Option<RecommendationResult>,
    error: Option<String>,
    loading: bool,
    policy: ResponsePolicy,
    generation: u64,
}

impl Editor {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn brief(&self) -> &CampaignBrief {
        &self.brief
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn update(&mut self, change: BriefUpdate) {
        debug!("Updating brief field {}", change.field());
        self.brief = self.brief.update(change);
    }

    pub fn reset_to_default(&mut self) {
        info!("Resetting brief to defaults");
        self.brief = CampaignBrief::default();
    }

    pub fn reset_personas(&mut self) {
        self.brief = self.brief.reset_personas();
    }

    pub fn add_persona(&mut self) {
        self.brief = self.brief.add_persona();
    }

    pub fn remove_persona(&mut self, index: usize) {
        self.brief = self.brief.remove_persona(index);
    }

    pub fn update_persona_field(&mut self, index: usize, change: PersonaUpdate) {
        debug!("Updating persona {} field {}", index, change.field());
        self.brief = self.brief.update_persona_field(index, change);
    }

    /// Start a submit: mark loading, clear the error, snapshot the brief
    ///
    /// Nothing prevents a second call while the first is outstanding.
    pub fn begin_submit(&mut self) -> (SubmitTicket, CampaignBrief) {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        info!("Submitting brief (request #{})", self.generation);
        (
            SubmitTicket {
                generation: self.generation,
            },
            self.brief.clone(),
        )
    }

    /// Apply the outcome of a submit and release the loading flag
    ///
    /// Returns false when the outcome was discarded because a newer submit
    /// superseded it under [`ResponsePolicy::DiscardSuperseded`].
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<RecommendationResult, SubmitError>,
    ) -> bool {
        if self.policy == ResponsePolicy::DiscardSuperseded && ticket.generation != self.generation
        {
            debug!(
                "Discarding response to request #{} (latest is #{})",
                ticket.generation, self.generation
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                info!("Request #{} succeeded", ticket.generation);
                self.result = Some(result);
            }
            Err(err) => {
                warn!("Request #{} failed: {}", ticket.generation, err);
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Run a complete submit against `service`
    pub async fn submit<S>(&mut self, service: &S)
    where
        S: RecommendationService + ?Sized,
    {
        let (ticket, brief) = self.begin_submit();
        let outcome = service.segment(&brief).await;
        self.finish_submit(ticket, outcome);
    }
}
