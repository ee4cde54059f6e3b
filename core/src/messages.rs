//! User-facing text. Failures map to one fixed string per operation; the
//! underlying `ApiError` only goes to the log.

use crate::types::ItemId;

pub const LOADING: &str = "Loading items...";
pub const NO_ITEMS: &str = "No items found.";
pub const FIELDS_REQUIRED: &str = "Name and Description are required.";

pub const LOAD_FAILED: &str = "Failed to fetch items. Is the backend running?";
pub const CREATE_FAILED: &str = "Failed to create item. Check API status (backend must be running).";
pub const UPDATE_FAILED: &str = "Failed to update item. Check API status (backend must be running).";

pub const CREATE_LABEL: &str = "Create Item";
pub const CREATING_LABEL: &str = "Creating...";
pub const SAVE_LABEL: &str = "Save";
pub const SAVING_LABEL: &str = "Saving...";

pub fn delete_failed(id: ItemId) -> String {
    format!("Failed to delete item {id}.")
}

pub fn confirm_delete(id: ItemId) -> String {
    format!("Are you sure you want to delete item {id}?")
}
