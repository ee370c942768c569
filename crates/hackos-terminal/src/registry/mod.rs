//! Command registry
//!
//! Maps what the user typed onto canned output. Two kinds of entry exist:
//! literal fragments keyed by the exact input line, and templates keyed by
//! the first token that receive the remaining tokens as arguments.
//!
//! Lookup order is literal first, so `nmap` alone and `nmap 10.0.0.1` can
//! resolve to different entries.

mod literals;
mod templates;

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::output::Fragment;

/// Generator for a templated command
pub type TemplateFn = Box<dyn Fn(&CommandContext) -> Fragment>;

/// A registered command
pub enum CommandEntry {
    /// Fixed output, appended verbatim
    Literal(Fragment),
    /// Output built from the command arguments
    Template(TemplateFn),
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandEntry::Literal(fragment) => f.debug_tuple("Literal").field(&fragment.len()).finish(),
            CommandEntry::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Arguments and environment handed to a template
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// The command token
    pub command: String,
    /// Remaining whitespace-separated tokens
    pub args: Vec<String>,
    /// Local time at dispatch
    pub now: DateTime<FixedOffset>,
}

impl CommandContext {
    pub fn new(command: impl Into<String>, args: Vec<String>, now: DateTime<FixedOffset>) -> Self {
        Self { command: command.into(), args, now }
    }

    /// Positional argument `index`, or `default` when missing
    pub fn arg<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.args.get(index).map(String::as_str).unwrap_or(default)
    }

    /// Check if `flag` appears anywhere in the arguments
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Token following the first occurrence of `flag`, or `default`
    ///
    /// A flag given as the last token has no value and also yields `default`.
    pub fn flag_value<'a>(&'a self, flag: &str, default: &'a str) -> &'a str {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Epoch milliseconds of [`CommandContext::now`]
    #[inline]
    pub fn now_ms(&self) -> i64 {
        self.now.timestamp_millis()
    }
}

/// Outcome of resolving an input line
pub enum Resolution<'a> {
    Literal(&'a Fragment),
    Template {
        handler: &'a TemplateFn,
        command: &'a str,
        args: Vec<String>,
    },
}

impl Resolution<'_> {
    /// Produce the output for this resolution
    pub fn render(&self, now: DateTime<FixedOffset>) -> Fragment {
        match self {
            Resolution::Literal(fragment) => (*fragment).clone(),
            Resolution::Template { handler, command, args } => {
                handler(&CommandContext::new(*command, args.clone(), now))
            }
        }
    }
}

/// Lookup table from input to output
#[derive(Default)]
pub struct CommandRegistry {
    literals: HashMap<String, Fragment>,
    templates: HashMap<String, TemplateFn>,
    vocabulary: Vec<String>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("literals", &self.literals.len())
            .field("templates", &self.templates.len())
            .field("vocabulary", &self.vocabulary.len())
            .finish()
    }
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock registry: canned tool output, templated tools and the
    /// completion vocabulary
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        literals::install(&mut registry);
        templates::install(&mut registry);
        registry.set_vocabulary(COMPLETION_VOCABULARY.iter().copied());
        registry
    }

    /// Register an entry under `key`
    ///
    /// Literals are keyed by the whole input line, templates by the command
    /// token. Re-registering a key replaces the previous entry.
    pub fn register(&mut self, key: impl Into<String>, entry: CommandEntry) {
        let key = key.into();
        match entry {
            CommandEntry::Literal(fragment) => {
                self.literals.insert(key, fragment);
            }
            CommandEntry::Template(handler) => {
                self.templates.insert(key, handler);
            }
        }
    }

    /// Register a literal from compact markup (see [`Fragment::parse`])
    pub fn literal(&mut self, key: impl Into<String>, markup: &str) {
        self.register(key, CommandEntry::Literal(Fragment::parse(markup)));
    }

    /// Register a template
    pub fn template<F>(&mut self, command: impl Into<String>, handler: F)
    where
        F: Fn(&CommandContext) -> Fragment + 'static,
    {
        self.register(command, CommandEntry::Template(Box::new(handler)));
    }

    /// Replace the tab-completion vocabulary
    pub fn set_vocabulary<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        self.vocabulary = words.into_iter().map(str::to_string).collect();
    }

    /// Tab-completion vocabulary, in display order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    /// Resolve an already-trimmed input line
    pub fn resolve(&self, line: &str) -> Option<Resolution<'_>> {
        if let Some(fragment) = self.literals.get(line) {
            return Some(Resolution::Literal(fragment));
        }

        let mut tokens = line.split_whitespace();
        let command = tokens.next()?;
        let (key, handler) = self.templates.get_key_value(command)?;
        Some(Resolution::Template {
            handler,
            command: key.as_str(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Check if anything is registered for `line`
    pub fn contains(&self, line: &str) -> bool {
        self.resolve(line).is_some()
    }
}

/// Names offered by tab completion
pub const COMPLETION_VOCABULARY: &[&str] = &[
    "nmap", "hydra", "john", "hashcat", "sqlmap", "nikto", "dirb", "gobuster",
    "msfconsole", "msfvenom", "searchsploit", "burpsuite", "aircrack-ng",
    "wireshark", "metasploit", "ettercap", "recon-ng", "theharvester",
    "ls", "cd", "pwd", "whoami", "ps", "top", "netstat", "ifconfig",
    "ping", "ssh", "scp", "wget", "curl", "nano", "vim", "cat", "grep",
    "find", "chmod", "chown", "sudo", "apt", "dpkg", "systemctl",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineStyle;
    use crate::time::local_time;

    fn now() -> DateTime<FixedOffset> {
        local_time(1_705_347_757_000.0, 0)
    }

    #[test]
    fn test_literal_before_template() {
        let mut reg = CommandRegistry::new();
        reg.literal("scan", "literal");
        reg.template("scan", |ctx| Fragment::new().plain(format!("target {}", ctx.arg(0, "none"))));

        let out = reg.resolve("scan").unwrap().render(now());
        assert_eq!(out.lines()[0].text, "literal");

        let out = reg.resolve("scan 10.0.0.1").unwrap().render(now());
        assert_eq!(out.lines()[0].text, "target 10.0.0.1");
    }

    #[test]
    fn test_unknown_command() {
        let reg = CommandRegistry::builtin();
        assert!(reg.resolve("foobar123").is_none());
        assert!(reg.resolve("").is_none());
    }

    #[test]
    fn test_literal_requires_exact_line() {
        let mut reg = CommandRegistry::new();
        reg.literal("uname -a", "Linux kali");
        assert!(reg.contains("uname -a"));
        assert!(!reg.contains("uname  -a"));
    }

    #[test]
    fn test_flag_helpers() {
        let ctx = CommandContext::new(
            "gobuster",
            vec!["dir".into(), "-u".into(), "http://x".into(), "-w".into()],
            now(),
        );
        assert!(ctx.has_flag("-u"));
        assert_eq!(ctx.flag_value("-u", "default"), "http://x");
        assert_eq!(ctx.flag_value("-w", "common.txt"), "common.txt");
        assert_eq!(ctx.flag_value("-x", "none"), "none");
        assert_eq!(ctx.arg(0, "?"), "dir");
        assert_eq!(ctx.arg(9, "?"), "?");
    }

    #[test]
    fn test_builtin_has_tools() {
        let reg = CommandRegistry::builtin();
        for cmd in ["nmap 10.0.0.1", "hydra host ftp", "date", "penetration-test"] {
            assert!(reg.contains(cmd), "{cmd} should resolve");
        }
        assert_eq!(reg.vocabulary().count(), 42);
    }

    #[test]
    fn test_date_template_prints_local_time() {
        let reg = CommandRegistry::builtin();
        let out = reg.resolve("date").unwrap().render(now());
        assert_eq!(out.lines()[0].style, LineStyle::Success);
        assert!(out.lines()[0].text.starts_with("Mon Jan 15 2024 19:42:37"));
    }
}
