// ── View seams ──
//
// Implemented by the front end. Controllers hold their view behind a lock
// and call these from the task that completed the request.

use crate::view_model::RowViewModel;

/// The table body listing a collection.
pub trait TableView: Send {
    /// Replace every rendered row with `rows`.
    fn render_rows(&mut self, headers: &[&str], rows: Vec<RowViewModel>);
}

/// The edit form's feedback surfaces.
pub trait FormView: Send {
    /// Show a server rejection in the persistent inline error area.
    fn show_error(&mut self, message: &str);

    /// Empty the inline error area.
    fn clear_error(&mut self);

    /// Tell the user a save went through.
    fn notify(&mut self, message: &str);
}

/// Everything a list-and-upsert page needs.
pub trait EntityView: TableView + FormView {}

impl<T: TableView + FormView> EntityView for T {}

/// Read-only overlay listing a person's stored addresses.
pub trait AddressOverlay: Send {
    fn show_addresses(&mut self, lines: Vec<String>);

    /// Dismiss the overlay. Leaves the edit form alone.
    fn close_addresses(&mut self);
}
