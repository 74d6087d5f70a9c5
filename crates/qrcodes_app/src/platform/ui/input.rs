use qrcodes_core::{Msg, PageViewModel};

use super::constants::{KEY_CREATE, KEY_QUIT, KEY_REFRESH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Dispatch(Msg),
    Quit,
}

/// Maps one line typed by the user onto a command, given what is on screen.
/// Row numbers are 1-based and refer to the rendered list.
pub fn parse_input(line: &str, view: &PageViewModel) -> Option<InputCommand> {
    let input = line.trim();
    if input.eq_ignore_ascii_case(KEY_CREATE) {
        return Some(InputCommand::Dispatch(Msg::CreateClicked));
    }
    if input.eq_ignore_ascii_case(KEY_REFRESH) {
        return Some(InputCommand::Dispatch(Msg::RefreshRequested));
    }
    if input.eq_ignore_ascii_case(KEY_QUIT) {
        return Some(InputCommand::Quit);
    }

    let row: usize = input.parse().ok()?;
    let code = view.body.items().get(row.checked_sub(1)?)?;
    Some(InputCommand::Dispatch(Msg::RowSelected { id: code.id }))
}
