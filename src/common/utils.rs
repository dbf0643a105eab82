use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Displayable version of a relative path, always using `/` as separator.
/// `.` components are dropped, so `./src/main.rs` becomes `src/main.rs`.
pub fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some(Cow::Borrowed("..")),
            Component::RootDir | Component::Prefix(_) => Some(Cow::Borrowed("")),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// True if `program` (its first word) is an existing path or an executable
/// name found in one of the `$PATH` folders.
pub fn is_in_path(program: &str) -> bool {
    let Some(program) = program.split_whitespace().next() else {
        return false;
    };
    if Path::new(program).exists() {
        return true;
    }
    std::env::var_os("PATH").is_some_and(|folders| {
        std::env::split_paths(&folders).any(|folder| folder.join(program).exists())
    })
}

/// Expand a leading `~` to `$HOME`: `~/.config` becomes `/home/user/.config`.
/// `~otheruser/...` and paths without a tilde are returned unchanged,
/// as is everything when `$HOME` is unset or empty.
/// Adapted from <https://gitlab.com/ijackson/rust-shellexpand/-/blob/main/src/funcs.rs?ref_type=heads#L673>
pub fn tilde(input: &str) -> Cow<'_, str> {
    let Some(rest) = input.strip_prefix('~') else {
        return Cow::Borrowed(input);
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return Cow::Borrowed(input);
    }
    match std::env::var_os("HOME").filter(|home| !home.is_empty()) {
        Some(home) => Cow::Owned(format!("{}{rest}", PathBuf::from(home).display())),
        None => Cow::Borrowed(input),
    }
}

/// Parse a list of space separated indexes like `1 4 7`.
/// Anything which isn't a positive integer is reported.
pub fn parse_indexes(args: &[&str]) -> Result<Vec<usize>> {
    args.iter()
        .map(|arg| {
            arg.parse::<usize>()
                .with_context(|| format!("{arg} isn't a valid index"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_path_drops_current_dir() {
        assert_eq!(slash_path(Path::new("./src/main.rs")), "src/main.rs");
        assert_eq!(slash_path(Path::new("README.md")), "README.md");
        assert_eq!(slash_path(Path::new("a/../b")), "a/../b");
    }

    #[test]
    fn tilde_leaves_other_users_alone() {
        assert_eq!(tilde("~bob/file"), "~bob/file");
        assert_eq!(tilde("/etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn existing_paths_are_in_path() {
        assert!(is_in_path("/"));
        assert!(!is_in_path("   "));
        assert!(!is_in_path("/no/such/ffilter/program"));
    }

    #[test]
    fn indexes_are_parsed_in_order() {
        assert_eq!(parse_indexes(&["3", "1"]).unwrap(), vec![3, 1]);
        assert!(parse_indexes(&["x"]).is_err());
    }
}
