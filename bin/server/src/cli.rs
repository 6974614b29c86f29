use crate::constants::DEFAULT_WEBUI_DIR;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command line overrides; persistent settings live in the config file
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Config file path, `None` meaning beside the executable
    pub config: Option<PathBuf>,
    /// Root of the static web UI
    pub webui_dir: PathBuf,
    /// Keep the clipboard in process memory instead of the OS clipboard
    pub headless: bool,
}

impl CliArgs {
    pub fn parse() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        CliArgs {
            config: matches.get_one::<PathBuf>("config").cloned(),
            webui_dir: matches
                .get_one::<PathBuf>("webui-dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WEBUI_DIR)),
            headless: matches.get_flag("headless"),
        }
    }
}

fn command() -> Command {
    Command::new("lemon-push")
        .about("Share clipboard text and files with the companion app over the local network")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: lemon_push.conf beside the executable)"),
        )
        .arg(
            Arg::new("webui-dir")
                .long("webui-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory served under /webui/ (default: ./webui)"),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .action(ArgAction::SetTrue)
                .help("Use an in-memory clipboard instead of the system clipboard"),
        )
}
