use super::*;

#[derive(Parser)]
#[command(author, version, about = "Operator console for an API-key scanning service")]
pub(super) struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "http://127.0.0.1:8000",
        help = "Base URL of the panel backend"
    )]
    pub(super) panel_url: String,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Manage scanner connection settings")]
    Config(ConfigArgs),
    #[command(about = "Fetch and manage discovered key assets")]
    Keys(KeysArgs),
    #[command(about = "Manage the recurring job schedule")]
    Schedule(ScheduleArgs),
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Show current connection settings")]
    Show,
    #[command(about = "Save connection settings")]
    Save(SaveConfigArgs),
    #[command(about = "Probe scanner connectivity and auth")]
    Test,
}

#[derive(Parser)]
pub(super) struct SaveConfigArgs {
    #[arg(long)]
    pub(super) base_url: String,
    #[arg(long)]
    pub(super) api_key: String,
    #[arg(long, help = "Request timeout in seconds (default 15)")]
    pub(super) timeout: Option<String>,
    #[arg(long, help = "Default fetch size (default 50)")]
    pub(super) default_limit: Option<String>,
}

#[derive(Parser)]
pub(super) struct KeysArgs {
    #[command(subcommand)]
    pub(super) command: KeysCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum KeysCommands {
    #[command(about = "Fetch key assets and render them")]
    Fetch(FetchArgs),
    #[command(about = "Delete invalid keys on the scanner")]
    DeleteInvalid(DeleteInvalidArgs),
}

#[derive(Parser)]
pub(super) struct FetchArgs {
    #[arg(long)]
    pub(super) limit: Option<u32>,
    #[arg(long = "type", value_name = "KEY_TYPE", help = "Asset class, e.g. valid or paid")]
    pub(super) key_type: Option<String>,
    #[arg(long, help = "Print keys one per line instead of a table")]
    pub(super) export: bool,
}

#[derive(Parser)]
pub(super) struct DeleteInvalidArgs {
    #[arg(long)]
    pub(super) limit: Option<u32>,
}

#[derive(Parser)]
pub(super) struct ScheduleArgs {
    #[command(subcommand)]
    pub(super) command: ScheduleCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ScheduleCommands {
    #[command(about = "Show the schedule document")]
    Show,
    #[command(about = "Update and save the schedule document")]
    Save(SaveScheduleArgs),
    #[command(about = "Run one job immediately")]
    Run(RunArgs),
}

#[derive(Parser)]
pub(super) struct SaveScheduleArgs {
    #[arg(long)]
    pub(super) reverify_enabled: Option<bool>,
    #[arg(long)]
    pub(super) reverify_time: Option<String>,
    #[arg(long)]
    pub(super) reverify_count: Option<String>,
    #[arg(long, help = "Comma-separated status filter; empty means all")]
    pub(super) reverify_statuses: Option<String>,
    #[arg(long)]
    pub(super) sync_enabled: Option<bool>,
    #[arg(long)]
    pub(super) sync_time: Option<String>,
    #[arg(long)]
    pub(super) sync_limit: Option<String>,
    #[arg(long)]
    pub(super) sync_type: Option<String>,
    #[arg(long)]
    pub(super) delete_enabled: Option<bool>,
    #[arg(long)]
    pub(super) delete_time: Option<String>,
    #[arg(long)]
    pub(super) delete_limit: Option<String>,
}

#[derive(Parser)]
pub(super) struct RunArgs {
    #[command(subcommand)]
    pub(super) job: RunJob,
}

#[derive(clap::Subcommand)]
pub(super) enum RunJob {
    #[command(about = "Re-verify keys now")]
    Reverify {
        #[arg(long)]
        count: Option<u32>,
        #[arg(long, help = "Comma-separated status filter; empty means all")]
        statuses: Option<String>,
    },
    #[command(about = "Sync keys from the scanner now")]
    Sync {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long = "type", value_name = "KEY_TYPE")]
        key_type: Option<String>,
    },
    #[command(about = "Delete invalid keys now")]
    Delete {
        #[arg(long)]
        limit: Option<u32>,
    },
}
