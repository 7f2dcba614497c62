//! # Command Registry
//!
//! Named actions bound to shortcut tokens (`"n"`, `"dd"`, `":w"`). The palette widget
//! lists and filters them; keyboard capture hands tokens to [`CommandRegistry::dispatch`].
//!
//! The registry is generic over the target its actions run against, so it has no
//! knowledge of notes or modes itself. See [`crate::app`] for the default table.

pub struct Command<T> {
    pub id: &'static str,
    pub name: &'static str,
    pub shortcut: &'static str,
    pub description: &'static str,
    pub action: fn(&mut T),
}

impl<T> Clone for Command<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            shortcut: self.shortcut,
            description: self.description,
            action: self.action,
        }
    }
}

impl<T> std::fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("shortcut", &self.shortcut)
            .finish()
    }
}

impl<T> Command<T> {
    fn matches(&self, needle: &str) -> bool {
        [self.name, self.description, self.shortcut, self.id]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub struct CommandRegistry<T> {
    commands: Vec<Command<T>>,
}

impl<T> Default for CommandRegistry<T> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<T> CommandRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command. Registration order is dispatch and listing order.
    pub fn register(&mut self, command: Command<T>) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[Command<T>] {
        &self.commands
    }

    pub fn find(&self, shortcut: &str) -> Option<&Command<T>> {
        self.commands.iter().find(|cmd| cmd.shortcut == shortcut)
    }

    /// Runs the first command bound to `shortcut`. Returns whether one matched.
    pub fn dispatch(&self, shortcut: &str, target: &mut T) -> bool {
        match self.find(shortcut) {
            Some(command) => {
                log::debug!("Dispatching {} for {:?}", command.id, shortcut);
                (command.action)(target);
                true
            }
            None => false,
        }
    }

    /// Commands whose name, description, shortcut or id contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&Command<T>> {
        let needle = query.trim().to_lowercase();
        self.commands
            .iter()
            .filter(|cmd| needle.is_empty() || cmd.matches(&needle))
            .collect()
    }
}
