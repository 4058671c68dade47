// ── Generic list-and-upsert controller ──
//
// One instance per entity view. Owns the API client and the view handle;
// the form itself belongs to the caller and is passed into `submit`.
//
// Overlapping submits are not coordinated: nothing cancels an in-flight
// write, so a slow update can resolve after a later create and trigger a
// refresh that renders older data last.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use cadastro_api::ApiClient;

use crate::entity::{Entity, FormModel};
use crate::error::CoreError;
use crate::intent::Intent;
use crate::view::EntityView;
use crate::view_model::rows;

// ── ControllerState ──────────────────────────────────────────────

/// Submission state observable by consumers.
///
/// Nothing is pushed to the view while `Submitting`; the submit control
/// stays enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Submitting { in_flight: usize },
}

// ── SubmitOutcome ────────────────────────────────────────────────

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Written, form reset, list refreshed, user notified.
    Saved,
    /// The server refused; its message is in the inline error area and the
    /// form is untouched.
    Rejected { message: String },
    /// Anything else. Logged only: the form and error area are untouched
    /// and the user gets no feedback.
    Failed(CoreError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

// ── EntityController ─────────────────────────────────────────────

/// List-and-upsert controller for one entity type.
///
/// Cheaply cloneable via `Arc`; clones share the view and the state.
pub struct EntityController<E: Entity, V> {
    inner: Arc<ControllerInner<V>>,
    _entity: PhantomData<fn() -> E>,
}

struct ControllerInner<V> {
    client: ApiClient,
    view: Mutex<V>,
    state: watch::Sender<ControllerState>,
}

impl<E: Entity, V> Clone for EntityController<E, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, V: EntityView> EntityController<E, V> {
    pub fn new(client: ApiClient, view: V) -> Self {
        let (state, _) = watch::channel(ControllerState::Idle);
        Self {
            inner: Arc::new(ControllerInner {
                client,
                view: Mutex::new(view),
                state,
            }),
            _entity: PhantomData,
        }
    }

    /// Access the underlying API client.
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    pub fn state(&self) -> ControllerState {
        *self.inner.state.borrow()
    }

    /// Subscribe to submission state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<ControllerState> {
        self.inner.state.subscribe()
    }

    /// Run `f` against the view under its lock.
    pub async fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let mut view = self.inner.view.lock().await;
        f(&mut view)
    }

    // ── Lister ───────────────────────────────────────────────────

    /// Fetch the whole collection and replace the rendered table with it.
    ///
    /// On failure the previous table stays as it was.
    pub async fn list(&self) -> Result<Vec<E>, CoreError> {
        let result = self.inner.client.list::<E>().await;
        self.render(result).await
    }

    /// Like [`list()`](Self::list), restricted by the backend's query filters.
    pub async fn list_filtered(&self, filter: &E::Filter) -> Result<Vec<E>, CoreError> {
        let result = self.inner.client.search::<E>(filter).await;
        self.render(result).await
    }

    async fn render(
        &self,
        result: Result<Vec<E>, cadastro_api::Error>,
    ) -> Result<Vec<E>, CoreError> {
        match result {
            Ok(records) => {
                debug!(
                    resource = %E::KIND,
                    count = records.len(),
                    "rendering collection"
                );
                let rendered = rows(&records);
                self.inner
                    .view
                    .lock()
                    .await
                    .render_rows(E::HEADERS, rendered);
                Ok(records)
            }
            Err(e) => {
                warn!(resource = %E::KIND, error = %e, "failed to fetch collection");
                Err(e.into())
            }
        }
    }

    // ── Upserter ─────────────────────────────────────────────────

    /// Submit the form: create when the identifier input is blank, update
    /// otherwise.
    pub async fn submit(&self, form: &mut E::Form) -> SubmitOutcome {
        self.inner.state.send_modify(|s| {
            *s = match *s {
                ControllerState::Idle => ControllerState::Submitting { in_flight: 1 },
                ControllerState::Submitting { in_flight } => ControllerState::Submitting {
                    in_flight: in_flight + 1,
                },
            };
        });

        let outcome = self.write_and_refresh(form).await;

        self.inner.state.send_modify(|s| {
            *s = match *s {
                ControllerState::Submitting { in_flight } if in_flight > 1 => {
                    ControllerState::Submitting {
                        in_flight: in_flight - 1,
                    }
                }
                _ => ControllerState::Idle,
            };
        });

        outcome
    }

    async fn write_and_refresh(&self, form: &mut E::Form) -> SubmitOutcome {
        let intent = E::intent(form);
        debug!(resource = %E::KIND, verb = intent.verb(), "submitting form");

        let written = match &intent {
            Intent::Create(payload) => self.inner.client.create::<E>(payload).await,
            Intent::Update { payload, .. } => self.inner.client.update::<E>(payload).await,
        };

        match written {
            Ok(()) => {
                info!(resource = %E::KIND, update = intent.is_update(), "record saved");
                self.inner.view.lock().await.clear_error();
                form.reset();
                // A failed refresh is already logged and leaves the old table.
                let _ = self.list().await;
                self.inner.view.lock().await.notify(E::SAVED_MESSAGE);
                SubmitOutcome::Saved
            }
            Err(cadastro_api::Error::Rejected { message, .. }) => {
                debug!(resource = %E::KIND, %message, "server rejected submission");
                self.inner.view.lock().await.show_error(&message);
                SubmitOutcome::Rejected { message }
            }
            Err(e) => {
                warn!(resource = %E::KIND, error = %e, "failed to save record");
                SubmitOutcome::Failed(e.into())
            }
        }
    }
}
