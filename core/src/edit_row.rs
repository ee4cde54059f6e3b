//! Inline editor for one item.

use log::{debug, warn};

use crate::client::ItemClient;
use crate::http::{Exchange, HttpRequest};
use crate::messages;
use crate::types::{Item, ItemId, ItemInput};

/// Editing session for a single item, seeded from the locally held copy.
#[derive(Debug, Clone)]
pub struct EditRow {
    id: ItemId,
    name: String,
    description: String,
    updating: bool,
    error: Option<String>,
    // Fields as sent, so an empty PUT response can still be reconciled.
    pending: Option<ItemInput>,
}

impl EditRow {
    pub fn new(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            updating: false,
            error: None,
            pending: None,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn save_label(&self) -> &'static str {
        if self.updating {
            messages::SAVING_LABEL
        } else {
            messages::SAVE_LABEL
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.updating {
            return false;
        }
        self.name = name.into();
        true
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        if self.updating {
            return false;
        }
        self.description = description.into();
        true
    }

    /// Validate and build the PUT for this item. Same rule as the create
    /// form: both fields are required.
    pub fn save(&mut self, client: &ItemClient) -> Option<HttpRequest> {
        if self.updating {
            debug!("update of item {} already in flight", self.id);
            return None;
        }
        self.error = None;

        let input = ItemInput::new(self.name.clone(), self.description.clone());
        if !input.is_complete() {
            self.error = Some(messages::FIELDS_REQUIRED.to_string());
            return None;
        }

        match client.build_update_item(self.id, &input) {
            Ok(request) => {
                self.updating = true;
                self.pending = Some(input);
                Some(request)
            }
            Err(e) => {
                warn!("error updating item {}: {e}", self.id);
                self.error = Some(messages::UPDATE_FAILED.to_string());
                None
            }
        }
    }

    /// Settle the in-flight update. `Some` carries the item the owner should
    /// reconcile; `None` leaves the row in edit mode with `error` set.
    pub fn finish(&mut self, client: &ItemClient, exchange: Exchange) -> Option<Item> {
        let Some(input) = self.pending.take() else {
            warn!("update result for item {} arrived with no update in flight", self.id);
            return None;
        };
        self.updating = false;

        match exchange.and_then(|response| client.parse_update_item(self.id, &input, response)) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("error updating item {}: {e}", self.id);
                self.error = Some(messages::UPDATE_FAILED.to_string());
                None
            }
        }
    }
}
