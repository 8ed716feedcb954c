use intake_core::{update, AppState, Condition, Msg, ProductRecord};

fn edit(state: AppState, msg: Msg) -> AppState {
    let (state, effects) = update(state, msg);
    assert!(effects.is_empty());
    state
}

#[test]
fn each_edit_replaces_only_its_field() {
    intake_logging::initialize_for_tests();
    let state = edit(AppState::new(), Msg::TitleEdited("Lamp".to_string()));
    let state = edit(state, Msg::DescriptionEdited("Desk lamp".to_string()));
    let state = edit(state, Msg::PriceEdited("12.50".to_string()));
    let mut state = edit(state, Msg::ConditionSelected(Condition::OpenBox));

    assert_eq!(
        state.product(),
        &ProductRecord {
            title: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: "12.50".to_string(),
            condition: Condition::OpenBox,
            ..ProductRecord::default()
        }
    );
    assert!(state.consume_dirty());

    let state = edit(state, Msg::TitleEdited("Floor lamp".to_string()));
    assert_eq!(state.product().title, "Floor lamp");
    assert_eq!(state.product().description, "Desk lamp");
    assert_eq!(state.product().price, "12.50");
}

#[test]
fn edits_are_ignored_while_lookup_outstanding() {
    intake_logging::initialize_for_tests();
    let state = edit(AppState::new(), Msg::CodeChanged("123".to_string()));
    let (state, effects) = update(state, Msg::EnterPressed);
    assert_eq!(effects.len(), 1);

    let state = edit(state, Msg::TitleEdited("Late".to_string()));
    let state = edit(state, Msg::ConditionSelected(Condition::Used));

    assert_eq!(state.product(), &ProductRecord::default());
}

#[test]
fn product_found_follows_title() {
    let state = AppState::new();
    assert!(!state.view().product_found);

    let state = edit(state, Msg::TitleEdited("Manual".to_string()));
    assert!(state.view().product_found);
}

#[test]
fn additional_info_requires_brand() {
    let state = AppState::new();
    let form = state.view().form.expect("form visible when idle");
    assert!(form.additional.is_none());
    assert_eq!(form.condition, Condition::New);
}

#[test]
fn placeholder_actions_only_record_a_message() {
    let state = edit(AppState::new(), Msg::TitleEdited("Lamp".to_string()));
    let before = state.product().clone();

    let state = edit(state, Msg::SaveDraftClicked);
    assert_eq!(
        state.scan().last_message,
        "Save as Draft is not connected to a backend"
    );

    let state = edit(state, Msg::ProceedClicked);
    assert_eq!(state.scan().last_message, "Proceed is not connected to a backend");
    assert_eq!(state.product(), &before);
}

#[test]
fn typing_same_code_is_not_a_change() {
    let mut state = edit(AppState::new(), Msg::CodeChanged("77".to_string()));
    assert!(state.consume_dirty());

    let mut state = edit(state, Msg::CodeChanged("77".to_string()));
    assert!(!state.consume_dirty());
    assert_eq!(state.view().code, "77");
}
