//! Session state: the active selection, the last evaluation, and loading.
//!
//! Each evaluation is split into [`Session::begin`] (validate, build the
//! request, issue a [`RequestToken`]) and [`Session::complete`] (apply the
//! outcome). Only the most recently issued token may change the session, so
//! a slow response for an old selection never overwrites a newer one.
//!
//! ```text
//! begin(A) -> t1      begin(B) -> t2      complete(t2, ok)  -> applied
//!                                         complete(t1, ok)  -> stale, dropped
//! ```

use tracing::{debug, warn};

use crate::client::TrajectoryClient;
use crate::club::ladder_index;
use crate::error::Result;
use crate::scenario::Selection;
use crate::trajectory::{TrajectoryRequest, TrajectoryResult};
use crate::view::ScenarioView;

/// Identifies one [`Session::begin`] call. Later calls get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A request that has been issued but not yet completed.
#[derive(Debug, Clone)]
pub struct PendingEvaluation {
    pub token: RequestToken,
    pub selection: Selection,
    /// Body to post to the trajectory service.
    pub request: TrajectoryRequest,
}

/// A selection together with its service result and view.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub selection: Selection,
    pub result: TrajectoryResult,
    pub view: ScenarioView,
}

/// Client-side state for one golfer.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<Selection>,
    last: Option<Evaluation>,
    latest: Option<RequestToken>,
    next_token: u64,
    loading: bool,
    alert: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection of the most recent accepted [`begin`](Self::begin).
    pub fn active(&self) -> Option<&Selection> {
        self.active.as_ref()
    }

    /// Last successfully applied evaluation. Failures leave it untouched.
    pub fn last(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// True while the latest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message from the latest failed request, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    /// Validate `selection` and issue a request for it.
    ///
    /// Input errors are returned before any state changes; the loading flag
    /// is only raised for a request that will actually be sent.
    pub fn begin(&mut self, selection: Selection) -> Result<PendingEvaluation> {
        let request = selection.request()?;
        ladder_index(selection.standard_club()?)?;

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.latest = Some(token);
        self.active = Some(selection.clone());
        self.loading = true;
        self.alert = None;
        debug!(token = token.0, "evaluation started");

        Ok(PendingEvaluation { token, selection, request })
    }

    /// Apply the outcome of `pending`.
    ///
    /// Returns `Ok(None)` when a newer request has been issued since; the
    /// outcome is dropped and the loading flag stays with the newer request.
    /// Otherwise loading clears and the result (or error) is applied.
    pub fn complete(
        &mut self,
        pending: PendingEvaluation,
        outcome: Result<TrajectoryResult>,
    ) -> Result<Option<&Evaluation>> {
        if self.latest != Some(pending.token) {
            debug!(
                token = pending.token.0,
                latest = self.latest.map(RequestToken::get),
                "discarding stale evaluation"
            );
            return Ok(None);
        }
        self.loading = false;

        let evaluated = outcome.and_then(|result| {
            let view = ScenarioView::build(&pending.selection, &result)?;
            Ok(Evaluation { selection: pending.selection, result, view })
        });
        match evaluated {
            Ok(evaluation) => {
                debug!(token = pending.token.0, club = %evaluation.view.adjusted.club, "evaluation applied");
                Ok(Some(&*self.last.insert(evaluation)))
            }
            Err(e) => {
                warn!(token = pending.token.0, error = %e, "evaluation failed");
                self.alert = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Begin, fetch, and complete in one call.
    ///
    /// Holding `&mut self` across the fetch means no newer request can be
    /// issued meanwhile, so a successful call always yields `Some`.
    pub async fn evaluate(
        &mut self,
        client: &TrajectoryClient,
        selection: Selection,
    ) -> Result<Option<&Evaluation>> {
        let pending = self.begin(selection)?;
        let outcome = client.fetch(&pending.request).await;
        self.complete(pending, outcome)
    }
}
