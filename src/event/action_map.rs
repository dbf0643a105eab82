use std::str::FromStr;

use anyhow::{anyhow, Result};
use strum::EnumIter;
use strum_macros::{Display, EnumString};

use crate::app::Status;
use crate::common::parse_indexes;
use crate::event::EventAction;

/// Every command the user can type, by its keyword.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ActionMap {
    Filter,
    Clear,
    List,
    Toggle,
    All,
    #[strum(to_string = "none")]
    Unselect,
    Copy,
    CopyAll,
    Open,
    Refresh,
    Help,
    Quit,
}

impl ActionMap {
    /// Arguments expected after the keyword.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Filter => "[regex]",
            Self::Toggle => "<index>...",
            Self::Copy | Self::Open => "<index>",
            _ => "",
        }
    }

    /// One line description used in the help.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Filter => "set the filter. Without regex, ask for it",
            Self::Clear => "clear the filter",
            Self::List => "display the matching files",
            Self::Toggle => "select or unselect matches",
            Self::All => "select every match",
            Self::Unselect => "unselect everything",
            Self::Copy => "copy the relative path of a match",
            Self::CopyAll => "copy the relative paths of the selected matches",
            Self::Open => "open a match with the configured opener",
            Self::Refresh => "list the files again with the current filter",
            Self::Help => "display this help",
            Self::Quit => "quit",
        }
    }
}

/// A parsed command line: a keyword and its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Filter(Option<String>),
    Clear,
    List,
    Toggle(Vec<usize>),
    SelectAll,
    Unselect,
    Copy(usize),
    CopyAll,
    Open(usize),
    Refresh,
    Help,
    Quit,
}

impl Action {
    /// Parse a typed line like `toggle 1 3` or `filter \.rs$`.
    /// The argument of `filter` is the rest of the line, spaces included.
    ///
    /// # Errors
    ///
    /// Fails if the keyword is unknown or if its arguments are invalid.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let action_map = ActionMap::from_str(&keyword.to_lowercase())
            .map_err(|_| anyhow!("unknown command {keyword}. Type help"))?;
        let args: Vec<&str> = rest.split_whitespace().collect();
        Ok(match action_map {
            ActionMap::Filter if rest.is_empty() => Self::Filter(None),
            ActionMap::Filter => Self::Filter(Some(rest.to_owned())),
            ActionMap::Clear => Self::Clear,
            ActionMap::List => Self::List,
            ActionMap::Toggle if args.is_empty() => {
                return Err(anyhow!("toggle {usage}", usage = action_map.usage()))
            }
            ActionMap::Toggle => Self::Toggle(parse_indexes(&args)?),
            ActionMap::All => Self::SelectAll,
            ActionMap::Unselect => Self::Unselect,
            ActionMap::Copy => Self::Copy(single_index(action_map, &args)?),
            ActionMap::CopyAll => Self::CopyAll,
            ActionMap::Open => Self::Open(single_index(action_map, &args)?),
            ActionMap::Refresh => Self::Refresh,
            ActionMap::Help => Self::Help,
            ActionMap::Quit => Self::Quit,
        })
    }

    /// Execute the action, mutating the status.
    pub fn matcher(self, status: &mut Status) -> Result<()> {
        match self {
            Self::Filter(Some(pattern)) => EventAction::filter(status, &pattern),
            Self::Filter(None) => EventAction::prompt_pattern(status),
            Self::Clear => EventAction::clear(status),
            Self::List => EventAction::list(status),
            Self::Toggle(indexes) => EventAction::toggle(status, &indexes),
            Self::SelectAll => EventAction::select_all(status),
            Self::Unselect => EventAction::unselect(status),
            Self::Copy(index) => EventAction::copy_one(status, index),
            Self::CopyAll => EventAction::copy_selected(status),
            Self::Open(index) => EventAction::open(status, index),
            Self::Refresh => EventAction::refresh(status),
            Self::Help => EventAction::help(status),
            Self::Quit => EventAction::quit(status),
        }
    }
}

fn single_index(action_map: ActionMap, args: &[&str]) -> Result<usize> {
    match parse_indexes(args)?.as_slice() {
        [index] => Ok(*index),
        _ => Err(anyhow!(
            "{action_map} {usage}",
            usage = action_map.usage()
        )),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn filter_keeps_the_rest_of_the_line() {
        assert_eq!(
            Action::parse("filter my file\\.txt$").unwrap(),
            Action::Filter(Some("my file\\.txt$".to_owned()))
        );
        assert_eq!(Action::parse("filter").unwrap(), Action::Filter(None));
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(Action::parse("CopyAll").unwrap(), Action::CopyAll);
        assert_eq!(Action::parse("  quit").unwrap(), Action::Quit);
        assert_eq!(Action::parse("none").unwrap(), Action::Unselect);
    }

    #[test]
    fn indexes_are_parsed() {
        assert_eq!(
            Action::parse("toggle 2 0").unwrap(),
            Action::Toggle(vec![2, 0])
        );
        assert_eq!(Action::parse("copy 4").unwrap(), Action::Copy(4));
        assert_eq!(Action::parse("open 1").unwrap(), Action::Open(1));
    }

    #[test]
    fn bad_arguments_are_refused() {
        assert!(Action::parse("toggle").is_err());
        assert!(Action::parse("copy").is_err());
        assert!(Action::parse("copy 1 2").is_err());
        assert!(Action::parse("open x").is_err());
        assert!(Action::parse("launch").is_err());
    }

    #[test]
    fn every_keyword_has_a_description() {
        for action_map in ActionMap::iter() {
            assert!(!action_map.description().is_empty());
            assert!(Action::parse(&format!("{action_map} 0")).is_ok());
        }
    }
}
