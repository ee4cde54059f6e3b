//! Drives an `ItemList` from terminal commands.
//!
//! The terminal is blocking, so every request handed out by the list is
//! executed immediately and its result fed straight back.

use items_core::{Confirm, ItemList};
use log::debug;

use crate::command::{Command, HELP};
use crate::render::render;
use crate::transport::Transport;

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<T> {
    list: ItemList,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(list: ItemList, transport: T) -> Self {
        Self { list, transport }
    }

    #[cfg(test)]
    pub fn list(&self) -> &ItemList {
        &self.list
    }

    /// Run the initial load.
    pub fn mount(&mut self) {
        if let Some(request) = self.list.mount() {
            let exchange = self.transport.execute(request);
            self.list.finish_load(exchange);
        }
    }

    pub fn render(&self) -> String {
        render(&self.list.view())
    }

    /// Apply one command. Returns text to print alongside the redrawn page,
    /// if any.
    pub fn apply(&mut self, command: Command, confirm: &mut impl Confirm) -> (Flow, Option<String>) {
        debug!("command {command:?}");
        let note = match command {
            Command::Name(name) => disabled_note(self.list.form_mut().set_name(name)),
            Command::Desc(description) => {
                disabled_note(self.list.form_mut().set_description(description))
            }
            Command::Create => {
                if let Some(request) = self.list.submit_create() {
                    let exchange = self.transport.execute(request);
                    self.list.finish_create(exchange);
                }
                None
            }
            Command::Edit(id) => {
                if self.list.start_edit(id) {
                    None
                } else {
                    Some(format!("cannot edit item {id}"))
                }
            }
            Command::SetName(name) => match self.list.edit_row_mut() {
                Some(row) => disabled_note(row.set_name(name)),
                None => Some(not_editing()),
            },
            Command::SetDesc(description) => match self.list.edit_row_mut() {
                Some(row) => disabled_note(row.set_description(description)),
                None => Some(not_editing()),
            },
            Command::Save => {
                if self.list.editing_id().is_none() {
                    Some(not_editing())
                } else {
                    if let Some(request) = self.list.save_edit() {
                        let exchange = self.transport.execute(request);
                        self.list.finish_edit(exchange);
                    }
                    None
                }
            }
            Command::Cancel => {
                if self.list.cancel_edit() {
                    None
                } else {
                    Some(not_editing())
                }
            }
            Command::Delete(id) => {
                if let Some(request) = self.list.request_delete(id, confirm) {
                    let exchange = self.transport.execute(request);
                    self.list.finish_delete(exchange);
                }
                None
            }
            Command::Show => None,
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return (Flow::Quit, None),
        };
        (Flow::Continue, note)
    }
}

fn disabled_note(accepted: bool) -> Option<String> {
    (!accepted).then(|| "input is disabled while a request is in flight".to_string())
}

fn not_editing() -> String {
    "no item is in edit mode".to_string()
}
