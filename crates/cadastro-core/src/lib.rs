//! Form controllers and domain model for the registry API.
//!
//! This crate sits between `cadastro-api` and a concrete front end. It owns
//! the fetch → render → submit cycle shared by every entity:
//!
//! - **[`EntityController`]**: one generic controller per entity type.
//!   [`list()`](EntityController::list) renders the whole collection;
//!   [`submit()`](EntityController::submit) turns a form into an
//!   [`Intent`] (create or update), writes it, and refreshes on success.
//!
//! - **[`PersonController`]**: composes an `EntityController<Pessoa, _>`
//!   with the nested address editor and the read-only address overlay.
//!
//! - **View seams** ([`view`]): [`TableView`], [`FormView`] and
//!   [`AddressOverlay`] are implemented by the front end. The controllers
//!   only ever hand them [`RowViewModel`]s and plain strings.
//!
//! - **Domain model** ([`model`]): raw form types, [`Status`], and the
//!   [`Entity`] impls binding each API record to its form and table row.

pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod intent;
pub mod model;
pub mod person;
pub mod view;
pub mod view_model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ApiConfig;
pub use controller::{ControllerState, EntityController, SubmitOutcome};
pub use entity::{Entity, FormModel};
pub use error::CoreError;
pub use intent::Intent;
pub use person::PersonController;
pub use view::{AddressOverlay, EntityView, FormView, TableView};
pub use view_model::{RowViewModel, address_line, rows};

pub use model::{BairroForm, EnderecoForm, MunicipioForm, PessoaForm, Status, UfForm};

// API record types double as the domain records.
pub use cadastro_api::{
    ApiClient, Bairro, BairroFilter, Endereco, Municipio, MunicipioFilter, Pessoa, PessoaFilter,
    ResourceKind, Uf, UfFilter,
};
