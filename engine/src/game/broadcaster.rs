use super::types::{RoundOutcome, SessionSummary, StateUpdate};

/// Outbound seam towards the UI layer. The session pushes; it never waits
/// for the UI to act.
pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_round_over(
        &self,
        outcome: RoundOutcome,
        attempts_left: u32,
    ) -> impl Future<Output = ()> + Send;

    fn broadcast_session_over(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}
