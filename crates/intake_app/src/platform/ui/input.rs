//! Maps terminal lines to form messages.
//!
//! A keyboard-wedge scanner types the barcode and then Enter, so a bare line
//! is treated as "type this code, press Enter". Lines starting with `:` are
//! commands.

use intake_core::{Condition, Msg};

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Msgs(Vec<Msg>),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> InputEvent {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        if line.is_empty() {
            // Enter on whatever is already in the field.
            return InputEvent::Msgs(vec![Msg::EnterPressed]);
        }
        return InputEvent::Msgs(vec![Msg::CodeChanged(line.to_string()), Msg::EnterPressed]);
    };

    let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
    let msg = match name.to_ascii_lowercase().as_str() {
        CMD_CODE => Msg::CodeChanged(arg.to_string()),
        CMD_LOOKUP => Msg::LookupClicked,
        CMD_TITLE => Msg::TitleEdited(arg.to_string()),
        CMD_DESCRIPTION | "desc" => Msg::DescriptionEdited(arg.to_string()),
        CMD_PRICE => Msg::PriceEdited(arg.trim().to_string()),
        CMD_CONDITION => match arg.parse::<Condition>() {
            Ok(condition) => Msg::ConditionSelected(condition),
            Err(err) => return InputEvent::Invalid(err.to_string()),
        },
        CMD_DISMISS | "ok" => Msg::AlertDismissed,
        CMD_SAVE => Msg::SaveDraftClicked,
        CMD_PROCEED => Msg::ProceedClicked,
        CMD_HELP | "h" | "?" => return InputEvent::Help,
        CMD_QUIT | "q" | "exit" => return InputEvent::Quit,
        _ => return InputEvent::Invalid(format!("unknown command :{name} (try :help)")),
    };

    InputEvent::Msgs(vec![msg])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_line_types_code_and_presses_enter() {
        assert_eq!(
            parse_line("194346264162\r\n"),
            InputEvent::Msgs(vec![
                Msg::CodeChanged("194346264162".to_string()),
                Msg::EnterPressed,
            ])
        );
    }

    #[test]
    fn empty_line_presses_enter_on_current_code() {
        assert_eq!(parse_line(""), InputEvent::Msgs(vec![Msg::EnterPressed]));
    }

    #[test]
    fn code_command_types_without_lookup() {
        assert_eq!(
            parse_line(":code 0001"),
            InputEvent::Msgs(vec![Msg::CodeChanged("0001".to_string())])
        );
        assert_eq!(
            parse_line(":code"),
            InputEvent::Msgs(vec![Msg::CodeChanged(String::new())])
        );
        assert_eq!(
            parse_line(":lookup"),
            InputEvent::Msgs(vec![Msg::LookupClicked])
        );
    }

    #[test]
    fn field_commands_keep_argument_text() {
        assert_eq!(
            parse_line(":title  Big  Lamp"),
            InputEvent::Msgs(vec![Msg::TitleEdited(" Big  Lamp".to_string())])
        );
        assert_eq!(
            parse_line(":desc Works fine"),
            InputEvent::Msgs(vec![Msg::DescriptionEdited("Works fine".to_string())])
        );
        assert_eq!(
            parse_line(":price 9.99 "),
            InputEvent::Msgs(vec![Msg::PriceEdited("9.99".to_string())])
        );
        assert_eq!(
            parse_line(":condition open-box"),
            InputEvent::Msgs(vec![Msg::ConditionSelected(Condition::OpenBox)])
        );
    }

    #[test]
    fn bad_condition_and_unknown_command_are_invalid() {
        assert!(matches!(
            parse_line(":condition mint"),
            InputEvent::Invalid(reason) if reason.contains("mint")
        ));
        assert!(matches!(
            parse_line(":frobnicate"),
            InputEvent::Invalid(reason) if reason.contains(":frobnicate")
        ));
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_line(":help"), InputEvent::Help);
        assert_eq!(parse_line(":Q"), InputEvent::Quit);
        assert_eq!(parse_line(":save"), InputEvent::Msgs(vec![Msg::SaveDraftClicked]));
        assert_eq!(parse_line(":proceed"), InputEvent::Msgs(vec![Msg::ProceedClicked]));
        assert_eq!(parse_line(":dismiss"), InputEvent::Msgs(vec![Msg::AlertDismissed]));
    }
}
