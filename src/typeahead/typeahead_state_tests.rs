//! Tests for the Typeahead controller

use proptest::prelude::*;
use ratatui::crossterm::event::KeyCode;

use super::*;
use crate::form::FormButton;
use crate::test_utils::test_helpers::{key, type_str};

const SYMBOLS: [&str; 4] = ["AAPL", "AMZN", "GOOG", "MSFT"];

fn setup() -> (TextField, Typeahead) {
    let field = TextField::new("Symbol");
    let typeahead = Typeahead::attach(&field, CandidateSet::new(SYMBOLS));
    (field, typeahead)
}

/// Type into the field the way the app does: edit, then raise a query change
fn type_query(field: &mut TextField, typeahead: &mut Typeahead, text: &str) {
    type_str(field, text);
    typeahead.on_query_change(field.value());
}

fn shown(typeahead: &Typeahead) -> Vec<&str> {
    typeahead
        .popup()
        .map(|p| p.items().iter().map(|i| i.value()).collect())
        .unwrap_or_default()
}

fn press(typeahead: &mut Typeahead, field: &mut TextField, code: KeyCode) -> KeyHandling {
    typeahead.on_key_down(&key(code), field)
}

fn assert_ledger_balanced(typeahead: &Typeahead) {
    assert_eq!(
        typeahead.ledger().live(),
        typeahead.is_open() as u64,
        "every popup opened must be closed exactly once"
    );
}

mod query_change_tests {
    use super::*;

    #[test]
    fn test_attach_starts_closed() {
        let (field, typeahead) = setup();
        assert_eq!(typeahead.field(), field.id());
        assert!(!typeahead.is_open());
        assert_eq!(typeahead.cursor(), None);
        assert_eq!(typeahead.ledger(), PopupLedger::default());
    }

    #[test]
    fn test_single_letter_shows_prefix_matches_in_order() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        assert_eq!(shown(&typeahead), vec!["AAPL", "AMZN"]);
        let popup = typeahead.popup().unwrap();
        assert_eq!(popup.items()[0].matched_prefix(), "A");
        assert_eq!(popup.items()[1].matched_prefix(), "A");
        assert_eq!(typeahead.cursor(), None);
    }

    #[test]
    fn test_lowercase_query_matches_uppercase_candidates() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "ms");

        assert_eq!(shown(&typeahead), vec!["MSFT"]);
        assert_eq!(typeahead.popup().unwrap().items()[0].matched_prefix(), "MS");
    }

    #[test]
    fn test_empty_query_leaves_no_popup() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");
        assert!(typeahead.is_open());

        field.input(key(KeyCode::Backspace));
        typeahead.on_query_change(field.value());

        assert!(!typeahead.is_open());
        assert_eq!(typeahead.cursor(), None);
        assert_ledger_balanced(&typeahead);
    }

    #[test]
    fn test_new_query_replaces_popup() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");
        let first = typeahead.popup().unwrap().id();

        type_query(&mut field, &mut typeahead, "M");
        assert_eq!(field.value(), "AM");
        let second = typeahead.popup().unwrap().id();

        assert_ne!(first, second);
        assert_eq!(shown(&typeahead), vec!["AMZN"]);
        assert_eq!(typeahead.ledger(), PopupLedger { opened: 2, closed: 1 });
    }

    #[test]
    fn test_query_without_matches_closes_old_popup() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");
        type_query(&mut field, &mut typeahead, "Z");

        assert_eq!(field.value(), "AZ");
        assert!(!typeahead.is_open());
        assert_ledger_balanced(&typeahead);
    }

    #[test]
    fn test_new_popup_resets_cursor() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");
        press(&mut typeahead, &mut field, KeyCode::Down);
        assert_eq!(typeahead.cursor(), Some(0));

        type_query(&mut field, &mut typeahead, "A");
        assert_eq!(typeahead.cursor(), None);
    }

    #[test]
    fn test_retyping_same_query_gives_same_items() {
        let (_field, mut typeahead) = setup();
        typeahead.on_query_change("a");
        let first: Vec<String> = shown(&typeahead).iter().map(|s| s.to_string()).collect();

        typeahead.on_query_change("a");
        assert_eq!(shown(&typeahead), first);
        assert_ledger_balanced(&typeahead);
    }

    #[test]
    fn test_query_longer_than_every_candidate() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "AAPLX");
        assert!(!typeahead.is_open());
    }
}

mod keyboard_tests {
    use super::*;

    #[test]
    fn test_walkthrough_down_wraps_and_enter_commits() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        press(&mut typeahead, &mut field, KeyCode::Down);
        assert_eq!(
            typeahead.popup().unwrap().highlighted().map(|i| i.value()),
            Some("AAPL")
        );
        press(&mut typeahead, &mut field, KeyCode::Down);
        assert_eq!(
            typeahead.popup().unwrap().highlighted().map(|i| i.value()),
            Some("AMZN")
        );
        press(&mut typeahead, &mut field, KeyCode::Down);
        assert_eq!(
            typeahead.popup().unwrap().highlighted().map(|i| i.value()),
            Some("AAPL")
        );

        press(&mut typeahead, &mut field, KeyCode::Down);
        let handling = press(&mut typeahead, &mut field, KeyCode::Enter);

        assert_eq!(handling, KeyHandling::Consumed);
        assert_eq!(field.value(), "AMZN");
        assert!(!typeahead.is_open());
        assert_ledger_balanced(&typeahead);
    }

    #[test]
    fn test_up_from_unset_highlights_last() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        press(&mut typeahead, &mut field, KeyCode::Up);
        assert_eq!(typeahead.cursor(), Some(1));
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        press(&mut typeahead, &mut field, KeyCode::Down);
        press(&mut typeahead, &mut field, KeyCode::Up);
        assert_eq!(typeahead.cursor(), Some(1));
    }

    #[test]
    fn test_enter_with_cursor_unset_is_noop() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        let handling = press(&mut typeahead, &mut field, KeyCode::Enter);

        assert_eq!(handling, KeyHandling::Consumed);
        assert_eq!(field.value(), "A");
        assert!(typeahead.is_open());
        assert_eq!(typeahead.ledger(), PopupLedger { opened: 1, closed: 0 });
    }

    #[test]
    fn test_enter_without_popup_is_consumed_noop() {
        let (mut field, mut typeahead) = setup();
        type_str(&mut field, "Q");

        let handling = press(&mut typeahead, &mut field, KeyCode::Enter);

        assert_eq!(handling, KeyHandling::Consumed);
        assert_eq!(field.value(), "Q");
        assert_eq!(typeahead.ledger(), PopupLedger::default());
    }

    #[test]
    fn test_navigation_without_popup_is_noop() {
        let (mut field, mut typeahead) = setup();

        assert_eq!(
            press(&mut typeahead, &mut field, KeyCode::Down),
            KeyHandling::Consumed
        );
        assert_eq!(
            press(&mut typeahead, &mut field, KeyCode::Up),
            KeyHandling::Consumed
        );
        assert!(!typeahead.is_open());
        assert_eq!(typeahead.cursor(), None);
    }

    #[test]
    fn test_enter_after_popup_closed_does_not_commit() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");
        press(&mut typeahead, &mut field, KeyCode::Down);
        typeahead.on_outside_interaction(PointerTarget::Elsewhere);

        press(&mut typeahead, &mut field, KeyCode::Enter);
        assert_eq!(field.value(), "A");
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        for code in [KeyCode::Char('x'), KeyCode::Left, KeyCode::Tab, KeyCode::Esc] {
            assert_eq!(press(&mut typeahead, &mut field, code), KeyHandling::Ignored);
        }
        assert!(typeahead.is_open());
        assert_eq!(typeahead.cursor(), None);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "A");

        assert!(!typeahead.select(5, &mut field));
        assert!(typeahead.is_open());
        assert_eq!(field.value(), "A");
    }

    #[test]
    fn test_select_rejects_foreign_field() {
        let (mut field, mut typeahead) = setup();
        let mut other = TextField::new("Other");
        type_query(&mut field, &mut typeahead, "A");

        assert!(!typeahead.select(0, &mut other));
        assert!(other.is_empty());
        assert!(typeahead.is_open());
    }

    #[test]
    fn test_commit_does_not_reopen_popup() {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, "G");
        assert!(typeahead.select(0, &mut field));

        assert_eq!(field.value(), "GOOG");
        assert!(!typeahead.is_open());
    }
}

mod pointer_tests {
    use super::*;

    fn open(text: &str) -> (TextField, Typeahead, PopupId) {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, text);
        let id = typeahead.popup().unwrap().id();
        (field, typeahead, id)
    }

    #[test]
    fn test_press_elsewhere_closes() {
        let (_field, mut typeahead, _) = open("A");
        typeahead.on_outside_interaction(PointerTarget::Elsewhere);
        assert!(!typeahead.is_open());
        assert_ledger_balanced(&typeahead);
    }

    #[test]
    fn test_press_on_button_closes() {
        let (_field, mut typeahead, _) = open("A");
        typeahead.on_outside_interaction(PointerTarget::Button(FormButton::Reset));
        assert!(!typeahead.is_open());
    }

    #[test]
    fn test_press_on_own_field_keeps_popup() {
        let (field, mut typeahead, _) = open("A");
        typeahead.on_outside_interaction(PointerTarget::Field(field.id()));
        assert!(typeahead.is_open());
    }

    #[test]
    fn test_press_on_own_container_keeps_popup() {
        let (_field, mut typeahead, id) = open("A");
        typeahead.on_outside_interaction(PointerTarget::Popup(id));
        assert!(typeahead.is_open());
    }

    #[test]
    fn test_press_on_item_closes_after_item_handler() {
        let (mut field, mut typeahead, id) = open("A");

        let target = PointerTarget::Item(id, 1);
        assert!(typeahead.on_pointer_select(target, &mut field));
        typeahead.on_outside_interaction(target);

        assert_eq!(field.value(), "AMZN");
        assert!(!typeahead.is_open());
        assert_eq!(typeahead.ledger(), PopupLedger { opened: 1, closed: 1 });
    }

    #[test]
    fn test_item_is_not_the_container() {
        let (_field, mut typeahead, id) = open("A");
        // Without the item handler, an item press is still an outside press
        typeahead.on_outside_interaction(PointerTarget::Item(id, 0));
        assert!(!typeahead.is_open());
    }

    #[test]
    fn test_stale_popup_id_is_not_own_container() {
        let (mut field, mut typeahead, stale) = open("A");
        type_query(&mut field, &mut typeahead, "A");

        typeahead.on_outside_interaction(PointerTarget::Popup(stale));
        assert!(!typeahead.is_open());
    }

    #[test]
    fn test_stale_item_is_not_selected() {
        let (mut field, mut typeahead, stale) = open("A");
        type_query(&mut field, &mut typeahead, "A");

        assert!(!typeahead.on_pointer_select(PointerTarget::Item(stale, 0), &mut field));
        assert_eq!(field.value(), "AA");
    }

    #[test]
    fn test_two_controllers_do_not_cross_close() {
        let candidates = CandidateSet::new(SYMBOLS);
        let mut buy = TextField::new("Buy");
        let mut sell = TextField::new("Sell");
        let mut buy_typeahead = Typeahead::attach(&buy, candidates.clone());
        let mut sell_typeahead = Typeahead::attach(&sell, candidates);

        type_query(&mut buy, &mut buy_typeahead, "A");
        type_query(&mut sell, &mut sell_typeahead, "M");
        let sell_popup = sell_typeahead.popup().unwrap().id();

        // A press on the sell popup keeps it and closes the buy popup
        let target = PointerTarget::Popup(sell_popup);
        buy_typeahead.on_outside_interaction(target);
        sell_typeahead.on_outside_interaction(target);
        assert!(!buy_typeahead.is_open());
        assert!(sell_typeahead.is_open());

        // A query change on one field never touches the other popup
        type_query(&mut buy, &mut buy_typeahead, "A");
        buy.clear();
        buy_typeahead.on_query_change(buy.value());
        assert!(sell_typeahead.is_open());

        // Items of another controller are not selectable here
        let foreign = PointerTarget::Item(sell_popup, 0);
        assert!(!buy_typeahead.on_pointer_select(foreign, &mut buy));
        assert!(sell_typeahead.on_pointer_select(foreign, &mut sell));
        assert_eq!(sell.value(), "MSFT");
        assert!(buy.is_empty());
    }

    #[test]
    fn test_press_on_other_field_closes() {
        let (_field, mut typeahead, _) = open("A");
        let other = TextField::new("Quantity");
        typeahead.on_outside_interaction(PointerTarget::Field(other.id()));
        assert!(!typeahead.is_open());
    }
}

#[test]
fn test_detach_closes_popup() {
    let (mut field, mut typeahead) = setup();
    type_query(&mut field, &mut typeahead, "A");

    assert_eq!(typeahead.detach(), field.id());
}

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    Backspace,
    Down,
    Up,
    Enter,
    PressElsewhere,
    PressField,
    PressItem(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(vec!['a', 'A', 'm', 'G', 'o', 'z']).prop_map(Action::Type),
        Just(Action::Backspace),
        Just(Action::Down),
        Just(Action::Up),
        Just(Action::Enter),
        Just(Action::PressElsewhere),
        Just(Action::PressField),
        (0usize..3).prop_map(Action::PressItem),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any interleaving of edits, keys and presses keeps the popup ledger
    // balanced, at most one item highlighted, and the cursor in bounds.
    #[test]
    fn prop_lifecycle_invariants(actions in prop::collection::vec(action(), 0..40)) {
        let (mut field, mut typeahead) = setup();

        for action in actions {
            match action {
                Action::Type(c) => type_query(&mut field, &mut typeahead, &c.to_string()),
                Action::Backspace => {
                    if field.input(key(KeyCode::Backspace)) {
                        typeahead.on_query_change(field.value());
                    }
                }
                Action::Down => { press(&mut typeahead, &mut field, KeyCode::Down); }
                Action::Up => { press(&mut typeahead, &mut field, KeyCode::Up); }
                Action::Enter => { press(&mut typeahead, &mut field, KeyCode::Enter); }
                Action::PressElsewhere => typeahead.on_outside_interaction(PointerTarget::Elsewhere),
                Action::PressField => typeahead.on_outside_interaction(PointerTarget::Field(field.id())),
                Action::PressItem(index) => {
                    if let Some(id) = typeahead.popup().map(SuggestionList::id) {
                        let target = PointerTarget::Item(id, index);
                        typeahead.on_pointer_select(target, &mut field);
                        typeahead.on_outside_interaction(target);
                    }
                }
            }

            prop_assert_eq!(typeahead.ledger().live(), typeahead.is_open() as u64);
            if let Some(popup) = typeahead.popup() {
                prop_assert!(!popup.is_empty());
                let highlighted = (0..popup.len()).filter(|i| popup.is_highlighted(*i)).count();
                prop_assert!(highlighted <= 1);
                if let Some(cursor) = popup.cursor() {
                    prop_assert!(cursor < popup.len());
                }
            }
            if field.is_empty() {
                prop_assert!(!typeahead.is_open());
            }
        }
    }

    #[test]
    fn prop_enter_with_unset_cursor_changes_nothing(query in "[AaMmGg]{1,2}") {
        let (mut field, mut typeahead) = setup();
        type_query(&mut field, &mut typeahead, &query);
        let was_open = typeahead.is_open();
        let ledger = typeahead.ledger();

        press(&mut typeahead, &mut field, KeyCode::Enter);

        prop_assert_eq!(field.value(), query.as_str());
        prop_assert_eq!(typeahead.is_open(), was_open);
        prop_assert_eq!(typeahead.ledger(), ledger);
    }
}
