use std::sync::{RwLock, RwLockWriteGuard};

use crate::data_backend::DishApi;
use crate::data_types::{DishInput, FieldErrors, SubmissionState, SubmitOutcome};

#[derive(Debug, Default)]
struct Tracked {
    latest_ticket: u64,
    state: SubmissionState,
}

/// Sends dishes through a `DishApi` and tracks the latest attempt.
///
/// Every submit takes a ticket. Only the holder of the newest ticket may
/// write a final state, so a slow response from an older attempt can never
/// overwrite a fresher one. Ticket and state share one lock.
pub struct SubmissionClient<A> {
    api: A,
    tracked: RwLock<Tracked>,
}

impl<A: DishApi> SubmissionClient<A> {
    pub fn new(api: A) -> Self {
        SubmissionClient {
            api,
            tracked: RwLock::new(Tracked::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> SubmissionState {
        self.tracked
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .state
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    pub fn success(&self) -> bool {
        self.state().success()
    }

    pub fn id(&self) -> Option<u64> {
        self.state().id()
    }

    pub fn error(&self) -> Option<FieldErrors> {
        self.state().error().cloned()
    }

    fn lock(&self) -> RwLockWriteGuard<'_, Tracked> {
        self.tracked.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Performs one network call for `dish`.
    pub async fn submit(&self, dish: &DishInput) -> SubmitOutcome {
        let ticket = {
            let mut tracked = self.lock();
            tracked.latest_ticket += 1;
            tracked.state = SubmissionState::Pending;
            tracked.latest_ticket
        };
        log::info!("Submitting dish '{}' (#{})", dish.name, ticket);

        let result = self.api.create_dish(dish).await;

        let new_state = match result {
            Ok(created) => SubmissionState::Succeeded { id: created.id },
            Err(e) => {
                log::warn!("Dish submission #{} failed: {}", ticket, e);
                SubmissionState::Failed {
                    field_errors: e.field_errors().cloned(),
                }
            }
        };

        let mut tracked = self.lock();
        if tracked.latest_ticket != ticket {
            log::debug!("Discarding response of superseded submission #{}", ticket);
            return SubmitOutcome::Superseded;
        }
        if let SubmissionState::Succeeded { id } = new_state {
            log::info!("Dish stored with id {}", id);
        }
        tracked.state = new_state.clone();
        SubmitOutcome::Applied(new_state)
    }
}
