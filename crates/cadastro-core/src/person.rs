// ── Person controller ──
//
// Composes the generic controller with the nested address editor and the
// read-only address overlay. The overlay is a separate read path: opening
// or closing it never touches the edit form.

use tracing::{debug, warn};

use cadastro_api::{ApiClient, Pessoa, PessoaFilter};

use crate::controller::{ControllerState, EntityController, SubmitOutcome};
use crate::error::CoreError;
use crate::model::{EnderecoForm, PessoaForm};
use crate::view::{AddressOverlay, EntityView};
use crate::view_model::address_line;

pub struct PersonController<V> {
    entity: EntityController<Pessoa, V>,
}

impl<V> Clone for PersonController<V> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
        }
    }
}

impl<V: EntityView + AddressOverlay> PersonController<V> {
    pub fn new(client: ApiClient, view: V) -> Self {
        Self {
            entity: EntityController::new(client, view),
        }
    }

    /// The generic list-and-upsert controller underneath.
    pub fn entity(&self) -> &EntityController<Pessoa, V> {
        &self.entity
    }

    pub fn state(&self) -> ControllerState {
        self.entity.state()
    }

    pub async fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        self.entity.with_view(f).await
    }

    pub async fn list(&self) -> Result<Vec<Pessoa>, CoreError> {
        self.entity.list().await
    }

    pub async fn list_filtered(&self, filter: &PessoaFilter) -> Result<Vec<Pessoa>, CoreError> {
        self.entity.list_filtered(filter).await
    }

    /// Submit the person together with every address block currently in
    /// the form, in the order they were added.
    pub async fn submit(&self, form: &mut PessoaForm) -> SubmitOutcome {
        debug!(addresses = form.enderecos.len(), "submitting person");
        self.entity.submit(form).await
    }

    // ── Nested address editor ───────────────────────────────────

    /// Append one empty address block and hand it back for filling in.
    pub fn add_address_slot<'f>(&self, form: &'f mut PessoaForm) -> &'f mut EnderecoForm {
        form.enderecos.push(EnderecoForm::default());
        let slot = form.enderecos.len() - 1;
        &mut form.enderecos[slot]
    }

    // ── Address overlay ─────────────────────────────────────────

    /// Fetch one person and show their stored addresses in the overlay.
    ///
    /// An unknown id opens the overlay with no lines. On failure the
    /// overlay is not opened.
    pub async fn view_addresses(&self, codigo_pessoa: i64) -> Result<Vec<String>, CoreError> {
        let pessoa = match self.entity.client().find::<Pessoa>(codigo_pessoa).await {
            Ok(pessoa) => pessoa,
            Err(e) => {
                warn!(codigo_pessoa, error = %e, "failed to fetch addresses");
                return Err(e.into());
            }
        };

        let lines: Vec<String> = pessoa
            .map(|p| p.enderecos.iter().map(address_line).collect())
            .unwrap_or_default();
        debug!(codigo_pessoa, count = lines.len(), "showing addresses");

        self.entity
            .with_view(|view| view.show_addresses(lines.clone()))
            .await;
        Ok(lines)
    }

    /// Dismiss the address overlay.
    pub async fn close_addresses(&self) {
        self.entity.with_view(AddressOverlay::close_addresses).await;
    }
}
