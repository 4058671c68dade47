//! Terminal implementation of the controller view seams.
//!
//! The controllers push rows, errors and notices here while a command runs;
//! the command handler decides afterwards what reaches stdout and stderr.

use cadastro_core::{AddressOverlay, FormView, RowViewModel, TableView};

#[derive(Debug, Default)]
pub struct TerminalView {
    headers: Vec<String>,
    rows: Vec<RowViewModel>,
    error: Option<String>,
    notices: Vec<String>,
    addresses: Option<Vec<String>>,
}

impl TerminalView {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    /// Message in the inline error area, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    pub fn addresses(&self) -> Option<&[String]> {
        self.addresses.as_deref()
    }
}

impl TableView for TerminalView {
    fn render_rows(&mut self, headers: &[&str], rows: Vec<RowViewModel>) {
        self.headers = headers.iter().map(ToString::to_string).collect();
        self.rows = rows;
    }
}

impl FormView for TerminalView {
    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}

impl AddressOverlay for TerminalView {
    fn show_addresses(&mut self, lines: Vec<String>) {
        self.addresses = Some(lines);
    }

    fn close_addresses(&mut self) {
        self.addresses = None;
    }
}
