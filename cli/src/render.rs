//! Plain-text drawing of the core's `View`.

use std::fmt;

use items_core::{EditView, FormView, ListBody, Row, View};

pub fn render(view: &View<'_>) -> String {
    Page(view).to_string()
}

/// A `View` drawn as a full page of text.
struct Page<'v, 'a>(&'v View<'a>);

impl fmt::Display for Page<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            View::Loading { message } => writeln!(f, "{message}"),
            View::Ready(ready) => {
                form(f, &ready.form)?;
                writeln!(f, "\n== Items ==")?;
                if let Some(banner) = ready.banner {
                    writeln!(f, "!! Error: {banner}")?;
                }
                match &ready.body {
                    ListBody::Empty { message } => writeln!(f, "{message}"),
                    ListBody::Rows(rows) => rows.iter().try_for_each(|row| item_row(f, row)),
                }
            }
        }
    }
}

fn form(f: &mut fmt::Formatter<'_>, form: &FormView<'_>) -> fmt::Result {
    writeln!(f, "== Create New Item ==")?;
    writeln!(f, "  name:        {}", form.name)?;
    writeln!(f, "  description: {}", form.description)?;
    writeln!(f, "  [{}]{}", form.submit_label, disabled(form.disabled))?;
    if let Some(error) = form.error {
        writeln!(f, "  ! {error}")?;
    }
    Ok(())
}

fn item_row(f: &mut fmt::Formatter<'_>, row: &Row<'_>) -> fmt::Result {
    match row {
        Row::ReadOnly {
            item,
            controls_disabled,
        } => writeln!(
            f,
            "  #{} {}: {}{}",
            item.id,
            item.name,
            item.description,
            disabled(*controls_disabled)
        ),
        Row::Editing(edit) => editing(f, edit),
    }
}

fn editing(f: &mut fmt::Formatter<'_>, edit: &EditView<'_>) -> fmt::Result {
    writeln!(f, "* #{} (editing)", edit.id)?;
    writeln!(f, "    name:        {}", edit.name)?;
    writeln!(f, "    description: {}", edit.description)?;
    writeln!(f, "    [{}] [Cancel]{}", edit.save_label, disabled(edit.disabled))?;
    if let Some(error) = edit.error {
        writeln!(f, "    ! {error}")?;
    }
    Ok(())
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " (disabled)"
    } else {
        ""
    }
}
