use std::collections::HashMap;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Command table keyed by lowercase name; iteration follows registration order.
#[derive(Default)]
pub struct CommandRegistry {
    entries: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        if self.entries.insert(entry.name, entry.clone()).is_none() {
            self.order.push(entry.name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.entries.get(name).map(|entry| entry.handler)
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> {
        self.order
            .iter()
            .filter_map(move |name| self.entries.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}
