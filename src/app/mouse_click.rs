//! Pointer press handling
//!
//! Every press goes through the same three steps: the pressed suggestion
//! item commits its value, then every typeahead sees the press as a
//! page-wide interaction and closes its popup if the press was outside,
//! then the pressed field or button does its own action.

use super::app_state::App;
use crate::form::FormButton;
use crate::layout::PointerTarget;

pub fn handle_click(app: &mut App, target: PointerTarget) {
    for typeahead in &mut app.typeaheads {
        if let Some(field) = app.form.field_mut(typeahead.field()) {
            typeahead.on_pointer_select(target, field);
        }
    }

    for typeahead in &mut app.typeaheads {
        typeahead.on_outside_interaction(target);
    }

    match target {
        PointerTarget::Field(id) => app.form.set_focus(id),
        PointerTarget::Button(FormButton::Submit) => app.submit(),
        PointerTarget::Button(FormButton::Reset) => app.reset(),
        PointerTarget::Popup(_) | PointerTarget::Item(..) | PointerTarget::Elsewhere => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
