//! Render model for the item list.
//!
//! `ItemList::view` folds the container state into this tree; hosts only
//! draw it. The tree borrows from the list, so it is rebuilt after every
//! state change rather than kept around.

use crate::types::{Item, ItemId};

#[derive(Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// First fetch still pending. Nothing else is drawn.
    Loading { message: &'static str },
    Ready(ReadyView<'a>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadyView<'a> {
    pub form: FormView<'a>,
    pub banner: Option<&'a str>,
    pub body: ListBody<'a>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub disabled: bool,
    pub error: Option<&'a str>,
    pub submit_label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ListBody<'a> {
    /// Empty collection and no error.
    Empty { message: &'static str },
    Rows(Vec<Row<'a>>),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a> {
    ReadOnly {
        item: &'a Item,
        /// Edit/delete controls are off while a delete or update is pending.
        controls_disabled: bool,
    },
    Editing(EditView<'a>),
}

impl Row<'_> {
    pub fn id(&self) -> ItemId {
        match self {
            Row::ReadOnly { item, .. } => item.id,
            Row::Editing(edit) => edit.id,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct EditView<'a> {
    pub id: ItemId,
    pub name: &'a str,
    pub description: &'a str,
    pub disabled: bool,
    pub error: Option<&'a str>,
    pub save_label: &'static str,
}

impl<'a> View<'a> {
    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading { .. })
    }

    /// Rows in display order; empty while loading or when nothing is listed.
    pub fn rows(&self) -> &[Row<'a>] {
        match self {
            View::Ready(ReadyView {
                body: ListBody::Rows(rows),
                ..
            }) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn banner(&self) -> Option<&'a str> {
        match self {
            View::Ready(ready) => ready.banner,
            View::Loading { .. } => None,
        }
    }
}
