//! The item list container.
//!
//! # Design
//! `ItemList` owns the collection and is its only writer. The create form
//! and the edit row never touch `items`; their `finish` methods return the
//! server-confirmed item, and the list applies it. Every mutating call is
//! two-phase like the client underneath: a method that hands out an
//! `HttpRequest` for the host to run, and a `finish_*` method that takes
//! the host's `Exchange`.
//!
//! Each operation is gated by its own in-flight flag (`loading`, the form's
//! `submitting`, the row's `updating`, `deleting`), so at most one request
//! per component is ever outstanding.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::client::ItemClient;
use crate::create_form::CreateForm;
use crate::edit_row::EditRow;
use crate::http::{Exchange, HttpRequest};
use crate::messages;
use crate::types::{Item, ItemId};
use crate::view::{EditView, FormView, ListBody, ReadyView, Row, View};

/// Answers the "really delete?" question before a DELETE is issued.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug)]
pub struct ItemList {
    client: ItemClient,
    items: Vec<Item>,
    loading: bool,
    load_started: bool,
    error: Option<String>,
    form: CreateForm,
    editing: Option<EditRow>,
    deleting: Option<ItemId>,
}

impl ItemList {
    pub fn new(client: ItemClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: true,
            load_started: false,
            error: None,
            form: CreateForm::new(),
            editing: None,
            deleting: None,
        }
    }

    pub fn client(&self) -> &ItemClient {
        &self.client
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing.as_ref().map(EditRow::item_id)
    }

    pub fn pending_delete(&self) -> Option<ItemId> {
        self.deleting
    }

    pub fn form(&self) -> &CreateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateForm {
        &mut self.form
    }

    pub fn edit_row(&self) -> Option<&EditRow> {
        self.editing.as_ref()
    }

    pub fn edit_row_mut(&mut self) -> Option<&mut EditRow> {
        self.editing.as_mut()
    }

    // ---------------------------------------------------------------------
    // Initial load
    // ---------------------------------------------------------------------

    /// The one full fetch of this mount. Later calls return `None`.
    pub fn mount(&mut self) -> Option<HttpRequest> {
        if self.load_started {
            return None;
        }
        self.load_started = true;
        self.error = None;
        Some(self.client.build_list_items())
    }

    pub fn finish_load(&mut self, exchange: Exchange) {
        if !self.load_started {
            warn!("list result arrived before mount, dropping it");
            return;
        }
        if !self.loading {
            warn!("list result arrived after loading settled, dropping it");
            return;
        }
        match exchange.and_then(|response| self.client.parse_list_items(response)) {
            Ok(items) => {
                info!("loaded {} items", items.len());
                self.items = unique_by_id(items);
                self.error = None;
            }
            Err(e) => {
                warn!("error fetching items from backend: {e}");
                self.items.clear();
                self.error = Some(messages::LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    // ---------------------------------------------------------------------
    // Create
    // ---------------------------------------------------------------------

    pub fn submit_create(&mut self) -> Option<HttpRequest> {
        self.form.submit(&self.client)
    }

    pub fn finish_create(&mut self, exchange: Exchange) {
        if let Some(item) = self.form.finish(&self.client, exchange) {
            self.prepend(item);
        }
    }

    fn prepend(&mut self, item: Item) {
        debug!("prepending created item {}", item.id);
        let before = self.items.len();
        self.items.retain(|existing| existing.id != item.id);
        if self.items.len() != before {
            warn!("created item {} was already listed, replacing it", item.id);
        }
        self.items.insert(0, item);
    }

    // ---------------------------------------------------------------------
    // Edit
    // ---------------------------------------------------------------------

    /// Put `id` into edit mode, seeded from the held copy. Refused while
    /// loading, while an update is in flight, or for an id not listed.
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        if self.loading || self.update_in_flight() || self.deleting == Some(id) {
            return false;
        }
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            debug!("no listed item {id} to edit");
            return false;
        };
        self.editing = Some(EditRow::new(item));
        true
    }

    /// Leave edit mode and drop local edits. No request is made. Refused
    /// while the row's update is in flight.
    pub fn cancel_edit(&mut self) -> bool {
        if self.editing.is_none() || self.update_in_flight() {
            return false;
        }
        self.editing = None;
        true
    }

    pub fn save_edit(&mut self) -> Option<HttpRequest> {
        let row = self.editing.as_mut()?;
        row.save(&self.client)
    }

    pub fn finish_edit(&mut self, exchange: Exchange) {
        let Some(row) = self.editing.as_mut() else {
            warn!("update result arrived with no row in edit mode, dropping it");
            return;
        };
        if let Some(item) = row.finish(&self.client, exchange) {
            self.replace(item);
            self.editing = None;
        }
    }

    fn replace(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                debug!("replacing updated item {}", item.id);
                *slot = item;
            }
            None => warn!("updated item {} is no longer listed", item.id),
        }
    }

    fn update_in_flight(&self) -> bool {
        self.editing.as_ref().is_some_and(EditRow::is_updating)
    }

    // ---------------------------------------------------------------------
    // Delete
    // ---------------------------------------------------------------------

    /// Ask `confirm` about deleting `id` and, if it agrees, hand out the
    /// DELETE. Nothing is removed until `finish_delete` sees a success.
    pub fn request_delete(&mut self, id: ItemId, confirm: &mut impl Confirm) -> Option<HttpRequest> {
        if self.deleting.is_some() {
            debug!("delete already in flight, ignoring delete of {id}");
            return None;
        }
        if self.editing_id() == Some(id) && self.update_in_flight() {
            return None;
        }
        if !self.items.iter().any(|item| item.id == id) {
            debug!("no listed item {id} to delete");
            return None;
        }
        if !confirm.confirm(&messages::confirm_delete(id)) {
            return None;
        }
        self.deleting = Some(id);
        Some(self.client.build_delete_item(id))
    }

    pub fn finish_delete(&mut self, exchange: Exchange) {
        let Some(id) = self.deleting.take() else {
            warn!("delete result arrived with no delete in flight, dropping it");
            return;
        };
        match exchange.and_then(|response| self.client.parse_delete_item(response)) {
            Ok(()) => {
                info!("deleted item {id}");
                self.items.retain(|item| item.id != id);
                if self.editing_id() == Some(id) {
                    self.editing = None;
                }
            }
            Err(e) => {
                warn!("error deleting item {id}: {e}");
                self.error = Some(messages::delete_failed(id));
            }
        }
    }

    // ---------------------------------------------------------------------
    // Render
    // ---------------------------------------------------------------------

    pub fn view(&self) -> View<'_> {
        if self.loading {
            return View::Loading {
                message: messages::LOADING,
            };
        }

        let form = FormView {
            name: self.form.name(),
            description: self.form.description(),
            disabled: self.form.is_submitting(),
            error: self.form.error(),
            submit_label: self.form.submit_label(),
        };

        let body = if self.items.is_empty() && self.error.is_none() {
            ListBody::Empty {
                message: messages::NO_ITEMS,
            }
        } else {
            ListBody::Rows(self.items.iter().map(|item| self.row(item)).collect())
        };

        View::Ready(ReadyView {
            form,
            banner: self.error.as_deref(),
            body,
        })
    }

    fn row<'a>(&'a self, item: &'a Item) -> Row<'a> {
        match &self.editing {
            Some(edit) if edit.item_id() == item.id => Row::Editing(EditView {
                id: item.id,
                name: edit.name(),
                description: edit.description(),
                disabled: edit.is_updating(),
                error: edit.error(),
                save_label: edit.save_label(),
            }),
            _ => Row::ReadOnly {
                item,
                controls_disabled: self.deleting.is_some() || self.update_in_flight(),
            },
        }
    }
}

/// Keep the first element for each id.
fn unique_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            let first = seen.insert(item.id);
            if !first {
                warn!("item {} listed more than once, keeping the first", item.id);
            }
            first
        })
        .collect()
}
