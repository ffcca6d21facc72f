use std::collections::BTreeSet;

use super::context::CommandContext;
use super::registry::CommandRegistry;

/// Handles command parsing and execution
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    /// Create a new command dispatcher with every filesystem command registered
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
        }
    }

    /// Execute a full command line. Errors are rendered into the returned text.
    pub fn execute(&self, command_line: &str, context: &mut CommandContext) -> String {
        let command_line = command_line.trim();
        if command_line.is_empty() {
            return String::new();
        }

        let (cmd_name, args) = self.parse_command(command_line);
        if cmd_name == "help" {
            return self.help(args.trim());
        }

        log::trace!("Dispatching '{}' with args '{}'", cmd_name, args);
        self.registry
            .execute_command(cmd_name, args, context)
            .unwrap_or_else(|error| {
                log::debug!("Command '{}' failed: {:?}", cmd_name, error);
                format!("{}\n", error)
            })
    }

    /// Parse a command line into command name and arguments
    fn parse_command<'a>(&self, command_line: &'a str) -> (&'a str, &'a str) {
        let mut parts = command_line.splitn(2, ' ');
        let cmd_name = parts.next().unwrap_or("");
        let args = parts.next().unwrap_or("");
        (cmd_name, args)
    }

    fn help(&self, topic: &str) -> String {
        if !topic.is_empty() {
            return match self.registry.get_command_help(topic) {
                Some(help) => format!("{}\n", help),
                None => format!("Error: Unknown command '{}'\n", topic),
            };
        }

        // Aliases share their command's help line
        let lines: BTreeSet<String> = self
            .list_commands()
            .iter()
            .filter_map(|name| self.registry.get_command_help(name))
            .collect();

        let mut output = String::from("Available commands:\n");
        for line in lines {
            output.push_str(&format!("  {}\n", line));
        }
        output.push_str("  exit\n");
        output
    }

    /// Check if a command exists in the registry
    pub fn has_command(&self, command_name: &str) -> bool {
        self.registry.has_command(command_name)
    }

    /// Get all available commands
    pub fn list_commands(&self) -> Vec<String> {
        self.registry.get_command_names()
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let dispatcher = CommandDispatcher::new();
        assert_eq!(dispatcher.parse_command("touch /a hello world"), ("touch", "/a hello world"));
        assert_eq!(dispatcher.parse_command("pwd"), ("pwd", ""));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let dispatcher = CommandDispatcher::new();
        let mut context = CommandContext::default();
        assert_eq!(dispatcher.execute("format C:", &mut context), "Error: Unknown command 'format'\n");
        assert_eq!(dispatcher.execute("   ", &mut context), "");
        assert!(!dispatcher.has_command("format"));
        assert!(dispatcher.has_command("ln"));
    }

    #[test]
    fn test_help_lists_commands() {
        let dispatcher = CommandDispatcher::new();
        let mut context = CommandContext::default();
        let output = dispatcher.execute("help", &mut context);
        assert!(output.contains("createSymlink TARGET LINK_NAME"));
        assert!(output.contains("grep"));

        let output = dispatcher.execute("help mv", &mut context);
        assert_eq!(output, "mv SOURCE DESTINATION\n");
    }
}
