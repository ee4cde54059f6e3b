//! Client core for the items service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO). On top of the stateless
//! `ItemClient` sit the three components of the item page:
//!
//! - [`ItemList`]: owns the collection, runs the initial load, and
//!   reconciles server-confirmed creates, updates and deletes.
//! - [`CreateForm`]: input state for a new item.
//! - [`EditRow`]: input state for the one item in edit mode.
//!
//! # Design
//! - Children report confirmed items by return value; only `ItemList`
//!   writes the collection, and only with data the server returned.
//! - Every network step is a request handed to the host followed by a
//!   `finish_*` call with the host's `Exchange`.
//! - [`ItemList::view`] folds state into a [`View`] tree that any front end
//!   can draw.

pub mod client;
pub mod create_form;
pub mod edit_row;
pub mod error;
pub mod http;
pub mod list;
pub mod messages;
pub mod types;
pub mod view;

pub use client::{ItemClient, ITEMS_PATH};
pub use create_form::CreateForm;
pub use edit_row::EditRow;
pub use error::ApiError;
pub use http::{Exchange, HttpMethod, HttpRequest, HttpResponse};
pub use list::{Confirm, ItemList};
pub use types::{Item, ItemId, ItemInput};
pub use view::{EditView, FormView, ListBody, ReadyView, Row, View};
