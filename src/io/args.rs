use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about)]
/// ffilter : filter the files of a workspace with a regular expression{n} {n}Config file: ~/.config/ffilter/config.yaml{n}
pub struct Args {
    /// Workspace root
    #[arg(short, long, default_value_t = String::from("."))]
    pub path: String,

    /// Print the files matching this regular expression and quit
    #[arg(short, long)]
    pub regex: Option<String>,

    /// Ask for the pattern, print the matching files and quit
    #[arg(long, default_value_t = false, conflicts_with = "regex")]
    pub ask: bool,

    /// With --regex or --ask, copy the relative paths of every match to the clipboard
    #[arg(long, default_value_t = false)]
    pub copy: bool,

    /// Enumerate hidden files too
    #[arg(short = 'A', long, default_value_t = false)]
    pub all: bool,

    /// Enable logging
    #[arg(short = 'l', long, default_value_t = false)]
    pub log: bool,

    /// Config file
    #[arg(short, long, default_value_t = String::from(crate::common::CONFIG_PATH))]
    pub config: String,
}

impl Args {
    /// True if ffilter should print the matches and quit instead of starting a session.
    pub fn is_one_shot(&self) -> bool {
        self.regex.is_some() || self.ask
    }
}
