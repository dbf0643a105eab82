/// Configuration file path
pub const CONFIG_PATH: &str = "~/.config/ffilter/config.yaml";
/// Path to the default log file
pub const LOG_PATH: &str = "~/.config/ffilter/log/ffilter.log";
/// Path to the action log file
pub const ACTION_LOG_PATH: &str = "~/.config/ffilter/log/action_logger.log";
/// Pattern of every log line
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}";
/// setsid. Installed in most distros
pub const SETSID: &str = "setsid";
/// Program used to open files when nothing is configured.
pub const DEFAULT_OPENER: &str = "xdg-open";
/// Files and directories which are never enumerated unless configured otherwise.
pub const DEFAULT_EXCLUDED: [&str; 3] = [".git", "node_modules", "target"];
/// Placeholder of the pattern prompt.
pub const PATTERN_PLACEHOLDER: &str = "Enter filename to search (regular expressions supported)";
/// Example displayed below the pattern prompt.
pub const PATTERN_EXAMPLE: &str = "Example: \\.js$ to search for JavaScript files";
/// Typed alone on a line, it cancels the pattern prompt.
pub const PROMPT_CANCEL: &str = "\x1b";
/// Message displayed when the filter is emptied.
pub const FILTER_CLEARED: &str = "Filter cleared";
/// Message displayed after a single path has been copied.
pub const PATH_COPIED: &str = "Path copied to clipboard";
/// Status line of the first display, before any filter is set.
pub const READY: &str = "Ready";
/// Help displayed in the session.
pub const HELP_FIRST_SENTENCE: &str = " ffilter: filter workspace files with a regular expression. ";
/// Prompt displayed before reading a command.
pub const COMMAND_PROMPT: &str = "ffilter> ";
/// Prompt displayed before reading a pattern.
pub const PATTERN_PROMPT: &str = "pattern> ";
