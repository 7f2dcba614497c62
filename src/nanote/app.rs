use crate::api::NanoteApi;
use crate::mode::ModeController;
use crate::palette::{Command, CommandRegistry};
use crate::store::NoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A UI session: the note orchestrator plus editor mode, theme and the command
/// table bound to them.
pub struct App<S: NoteStore> {
    pub api: NanoteApi<S>,
    pub modes: ModeController,
    pub theme: Theme,
    commands: CommandRegistry<App<S>>,
}

impl<S: NoteStore> App<S> {
    pub fn new(api: NanoteApi<S>) -> Self {
        Self {
            api,
            modes: ModeController::new(),
            theme: Theme::default(),
            commands: default_commands(),
        }
    }

    pub fn commands(&self) -> &CommandRegistry<App<S>> {
        &self.commands
    }

    /// Runs the command bound to a captured shortcut token.
    pub fn handle_shortcut(&mut self, shortcut: &str) -> bool {
        let commands = std::mem::take(&mut self.commands);
        let handled = commands.dispatch(shortcut, self);
        self.commands = commands;
        handled
    }

    /// Escape: back to normal mode whatever the current mode.
    pub fn cancel(&mut self) {
        self.modes.cancel();
    }

    /// Status bar line: mode badge and the active note's title.
    pub fn status_line(&self) -> String {
        let title = self
            .api
            .active_note()
            .map(|note| note.display_title())
            .unwrap_or("Untitled");
        format!("{} {}", self.modes.status_message(), title)
    }
}

/// The built-in command table, in palette order.
pub fn default_commands<S: NoteStore>() -> CommandRegistry<App<S>> {
    let mut registry = CommandRegistry::new();
    registry
        .register(Command {
            id: "new-note",
            name: "New Note",
            shortcut: "n",
            description: "Create a new note",
            action: |app: &mut App<S>| {
                app.api.create_note(None);
            },
        })
        .register(Command {
            id: "archive-note",
            name: "Archive Note",
            shortcut: "dd",
            description: "Archive the current note",
            action: |app: &mut App<S>| {
                app.api.archive_active();
            },
        })
        .register(Command {
            id: "save-note",
            name: "Save Note",
            shortcut: ":w",
            description: "Save the current note",
            action: |app: &mut App<S>| app.api.save(),
        })
        .register(Command {
            id: "insert-mode",
            name: "Insert Mode",
            shortcut: "i",
            description: "Enter insert mode",
            action: |app: &mut App<S>| {
                app.modes.enter_insert();
            },
        })
        .register(Command {
            id: "normal-mode",
            name: "Normal Mode",
            shortcut: "Esc",
            description: "Enter normal mode",
            action: |app: &mut App<S>| {
                app.modes.enter_normal();
            },
        })
        .register(Command {
            id: "visual-mode",
            name: "Visual Mode",
            shortcut: "v",
            description: "Enter visual mode",
            action: |app: &mut App<S>| {
                app.modes.enter_visual();
            },
        })
        .register(Command {
            id: "toggle-theme",
            name: "Toggle Theme",
            shortcut: ":theme",
            description: "Toggle between light and dark theme",
            action: |app: &mut App<S>| app.theme = app.theme.toggle(),
        });
    registry
}
