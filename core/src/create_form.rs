//! Form for creating a new item.
//!
//! `submit` validates and hands out the POST request; `finish` takes the
//! host's result and returns the confirmed item for the owner to prepend.
//! While a request is in flight the form is disabled: edits and further
//! submits are ignored.

use log::{debug, warn};

use crate::client::ItemClient;
use crate::http::{Exchange, HttpRequest};
use crate::messages;
use crate::types::{Item, ItemInput};

#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    name: String,
    description: String,
    submitting: bool,
    error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            messages::CREATING_LABEL
        } else {
            messages::CREATE_LABEL
        }
    }

    /// Returns `false` when the input is disabled.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.submitting {
            return false;
        }
        self.name = name.into();
        true
    }

    /// Returns `false` when the input is disabled.
    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        if self.submitting {
            return false;
        }
        self.description = description.into();
        true
    }

    /// Validate and build the create request. `None` means nothing goes on
    /// the wire: either a call is already in flight or validation failed
    /// (see `error`).
    pub fn submit(&mut self, client: &ItemClient) -> Option<HttpRequest> {
        if self.submitting {
            debug!("create already in flight, ignoring submit");
            return None;
        }
        self.error = None;

        let input = ItemInput::new(self.name.clone(), self.description.clone());
        if !input.is_complete() {
            self.error = Some(messages::FIELDS_REQUIRED.to_string());
            return None;
        }

        match client.build_create_item(&input) {
            Ok(request) => {
                self.submitting = true;
                Some(request)
            }
            Err(e) => {
                warn!("error creating item: {e}");
                self.error = Some(messages::CREATE_FAILED.to_string());
                None
            }
        }
    }

    /// Settle the in-flight create. On success the fields are cleared and the
    /// server's item is returned; on failure the fields are kept for retry.
    pub fn finish(&mut self, client: &ItemClient, exchange: Exchange) -> Option<Item> {
        if !self.submitting {
            warn!("create result arrived with no create in flight, dropping it");
            return None;
        }
        self.submitting = false;

        match exchange.and_then(|response| client.parse_create_item(response)) {
            Ok(item) => {
                self.name.clear();
                self.description.clear();
                Some(item)
            }
            Err(e) => {
                warn!("error creating item: {e}");
                self.error = Some(messages::CREATE_FAILED.to_string());
                None
            }
        }
    }
}
