// ABOUTME: Background submit tasks for the TUI
// ABOUTME: Every started submit reports back exactly once, even when its task dies

use crate::events::AppEvent;
use adstudio_core::{
    CampaignBrief, RecommendationResult, RecommendationService, SubmitError, SubmitTicket,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Message reported when a submit task ends without an outcome
pub const SUBMIT_ABORTED: &str = "submit task ended unexpectedly";

/// Reports a submit outcome to the event loop
///
/// Dropping an unreported guard sends a transport error, so the editor
/// never stays stuck in its loading state.
pub struct CompletionGuard {
    ticket: SubmitTicket,
    sender: UnboundedSender<AppEvent>,
    reported: bool,
}

impl CompletionGuard {
    pub fn new(ticket: SubmitTicket, sender: UnboundedSender<AppEvent>) -> Self {
        Self {
            ticket,
            sender,
            reported: false,
        }
    }

    pub fn report(mut self, outcome: Result<RecommendationResult, SubmitError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<RecommendationResult, SubmitError>) {
        if self.reported {
            return;
        }
        self.reported = true;
        if self
            .sender
            .send(AppEvent::SubmitFinished {
                ticket: self.ticket,
                outcome,
            })
            .is_err()
        {
            debug!(
                "Event loop gone before submit #{} reported",
                self.ticket.generation()
            );
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if !self.reported {
            warn!("Submit #{} ended without an outcome", self.ticket.generation());
            self.send(Err(SubmitError::Transport(SUBMIT_ABORTED.to_string())));
        }
    }
}

/// Run one submit on the runtime and report through `sender`
pub fn spawn_submit(
    service: Arc<dyn RecommendationService>,
    brief: CampaignBrief,
    ticket: SubmitTicket,
    sender: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    let guard = CompletionGuard::new(ticket, sender);
    tokio::spawn(async move {
        let outcome = service.segment(&brief).await;
        guard.report(outcome);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_core::Editor;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::sync::mpsc;

    struct Canned(Result<RecommendationResult, SubmitError>);

    #[async_trait]
    impl RecommendationService for Canned {
        async fn segment(
            &self,
            _brief: &CampaignBrief,
        ) -> Result<RecommendationResult, SubmitError> {
            self.0.clone()
        }
    }

    struct Panicking;

    #[async_trait]
    impl RecommendationService for Panicking {
        async fn segment(
            &self,
            _brief: &CampaignBrief,
        ) -> Result<RecommendationResult, SubmitError> {
            panic!("service blew up")
        }
    }

    #[tokio::test]
    async fn test_spawned_submit_reports_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut editor = Editor::default();
        let (ticket, brief) = editor.begin_submit();
        let result: RecommendationResult =
            serde_json::from_value(json!({"plan": {"ok": true}})).unwrap();

        spawn_submit(Arc::new(Canned(Ok(result.clone()))), brief, ticket, tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(AppEvent::SubmitFinished { ticket: got, outcome }) => {
                assert_eq!(got, ticket);
                assert_eq!(outcome, Ok(result));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_panicking_submit_still_reports() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut editor = Editor::default();
        let (ticket, brief) = editor.begin_submit();

        let handle = spawn_submit(Arc::new(Panicking), brief, ticket, tx);
        assert!(handle.await.is_err());

        match rx.recv().await {
            Some(AppEvent::SubmitFinished { outcome, .. }) => {
                editor.finish_submit(ticket, outcome);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!editor.is_loading());
        assert_eq!(editor.error(), Some(SUBMIT_ABORTED));
    }

    #[test]
    fn test_reported_guard_sends_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut editor = Editor::default();
        let (ticket, _) = editor.begin_submit();

        CompletionGuard::new(ticket, tx).report(Err(SubmitError::Transport("down".into())));

        assert!(matches!(rx.try_recv(), Ok(AppEvent::SubmitFinished { .. })));
        assert!(rx.try_recv().is_err());
    }
}
