// ── Entity binding ──
//
// Ties an API record type to the raw form that edits it and to the table
// row that displays it. `EntityController<E, _>` is generic over this trait;
// nothing else differs between the four controllers.

use std::fmt::Debug;

use cadastro_api::Resource;

use crate::intent::Intent;
use crate::view_model::RowViewModel;

/// Raw form state: every input is kept as the text the user typed.
pub trait FormModel: Debug + Default + Clone + Send + Sync {
    /// Return the form to its empty state after a successful save.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub trait Entity: Resource + Debug + Clone + Sync {
    type Form: FormModel;

    /// Column headers, in the order `row()` fills them.
    const HEADERS: &'static [&'static str];

    /// Message shown after a successful save.
    const SAVED_MESSAGE: &'static str;

    /// Read the form and decide between create and update.
    fn intent(form: &Self::Form) -> Intent<Self::Payload>;

    /// Project a record into a table row.
    fn row(&self) -> RowViewModel;
}
