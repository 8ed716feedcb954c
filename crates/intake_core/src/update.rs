use crate::{AppState, Effect, LookupError, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CodeChanged(code) => {
            state.set_code(code);
            Vec::new()
        }
        Msg::LookupClicked => state.start_lookup().into_iter().collect(),
        Msg::EnterPressed => {
            if state.scan().code.is_empty() {
                state.set_last_message("Enter key pressed - no code to look up");
                Vec::new()
            } else if state.in_progress() {
                // Same gate as the Lookup action: one outstanding request at a time.
                state.set_last_message("Enter key pressed - lookup already in progress");
                Vec::new()
            } else {
                state.start_lookup().into_iter().collect()
            }
        }
        Msg::LookupCompleted { request_id, result } => {
            if !state.is_pending(request_id) {
                return (state, Vec::new());
            }
            match result {
                Ok(product) => {
                    state.apply_success(product);
                    Vec::new()
                }
                Err(LookupError::NotFound) => vec![state.apply_not_found()],
                Err(LookupError::Failed { message }) => vec![state.apply_failure(&message)],
            }
        }
        Msg::TitleEdited(title) => {
            if !state.in_progress() {
                state.product_mut().title = title;
            }
            Vec::new()
        }
        Msg::DescriptionEdited(description) => {
            if !state.in_progress() {
                state.product_mut().description = description;
            }
            Vec::new()
        }
        Msg::PriceEdited(price) => {
            if !state.in_progress() {
                state.product_mut().price = price;
            }
            Vec::new()
        }
        Msg::ConditionSelected(condition) => {
            if !state.in_progress() {
                state.product_mut().condition = condition;
            }
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
        Msg::SaveDraftClicked => {
            if !state.in_progress() {
                state.set_last_message("Save as Draft is not connected to a backend");
            }
            Vec::new()
        }
        Msg::ProceedClicked => {
            if !state.in_progress() {
                state.set_last_message("Proceed is not connected to a backend");
            }
            Vec::new()
        }
    };

    (state, effects)
}
