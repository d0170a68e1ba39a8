use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, DemoAction, FlowAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Generate,
    StopDemo,
}

impl Command {
    fn action(self) -> Action {
        match self {
            Command::Generate => FlowAction::Generate.into(),
            Command::StopDemo => DemoAction::Stop.into(),
        }
    }
}

struct Shortcut {
    key: Key,
    command: Command,
}

impl Shortcut {
    const fn plain(key: Key, command: Command) -> Self {
        Self { key, command }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::plain(Key::Enter, Command::Generate),
    Shortcut::plain(Key::Escape, Command::StopDemo),
];

fn triggered(i: &InputState) -> Option<Command> {
    SHORTCUTS
        .iter()
        .find(|shortcut| i.key_pressed(shortcut.key) && i.modifiers.is_none())
        .map(|shortcut| shortcut.command)
}

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if let Some(command) = triggered(i) {
        action_queue.request(command.action());
    }
}
