use super::schedule_cmd::apply_overrides;
use super::*;
use scanpanel_core::model::ScheduleConfig;

#[test]
fn fetch_args_parse() {
    let cli = Cli::try_parse_from([
        "scanpanel",
        "keys",
        "fetch",
        "--limit",
        "25",
        "--type",
        "paid",
        "--export",
    ])
    .unwrap();
    match cli.command {
        Commands::Keys(args) => match args.command {
            KeysCommands::Fetch(args) => {
                assert_eq!(args.limit, Some(25));
                assert_eq!(args.key_type.as_deref(), Some("paid"));
                assert!(args.export);
            }
            _ => panic!("expected fetch command"),
        },
        _ => panic!("expected keys command"),
    }
}

#[test]
fn panel_url_defaults_and_overrides() {
    let cli = Cli::try_parse_from(["scanpanel", "config", "show"]).unwrap();
    assert_eq!(cli.panel_url, "http://127.0.0.1:8000");

    let cli = Cli::try_parse_from([
        "scanpanel",
        "--panel-url",
        "https://panel.local",
        "config",
        "show",
    ])
    .unwrap();
    assert_eq!(cli.panel_url, "https://panel.local");
}

#[test]
fn config_save_requires_credentials() {
    assert!(Cli::try_parse_from(["scanpanel", "config", "save"]).is_err());
    let cli = Cli::try_parse_from([
        "scanpanel",
        "config",
        "save",
        "--base-url",
        "https://scanner.local",
        "--api-key",
        "secret",
    ])
    .unwrap();
    match cli.command {
        Commands::Config(args) => match args.command {
            ConfigCommands::Save(args) => {
                assert_eq!(args.base_url, "https://scanner.local");
                assert!(args.timeout.is_none());
            }
            _ => panic!("expected save command"),
        },
        _ => panic!("expected config command"),
    }
}

#[test]
fn schedule_run_subcommands_parse() {
    let cli = Cli::try_parse_from([
        "scanpanel",
        "schedule",
        "run",
        "reverify",
        "--count",
        "10",
        "--statuses",
        "pending,rate_limited",
    ])
    .unwrap();
    match cli.command {
        Commands::Schedule(args) => match args.command {
            ScheduleCommands::Run(args) => match args.job {
                RunJob::Reverify { count, statuses } => {
                    assert_eq!(count, Some(10));
                    assert_eq!(statuses.as_deref(), Some("pending,rate_limited"));
                }
                _ => panic!("expected reverify job"),
            },
            _ => panic!("expected run command"),
        },
        _ => panic!("expected schedule command"),
    }
}

#[test]
fn apply_overrides_touches_only_given_fields() {
    let mut schedule = ScheduleConfig::default();
    let args = SaveScheduleArgs {
        reverify_enabled: Some(true),
        reverify_time: None,
        reverify_count: Some("75".to_string()),
        reverify_statuses: Some("pending, rate_limited".to_string()),
        sync_enabled: None,
        sync_time: Some(" 05:15 ".to_string()),
        sync_limit: None,
        sync_type: None,
        delete_enabled: None,
        delete_time: None,
        delete_limit: None,
    };
    apply_overrides(&mut schedule, &args);
    assert!(schedule.reverify_enabled);
    assert_eq!(schedule.reverify_time, "02:30");
    assert_eq!(schedule.reverify_count, 75);
    assert_eq!(
        schedule.reverify_statuses,
        vec!["pending".to_string(), "rate_limited".to_string()]
    );
    assert_eq!(schedule.sync_time, "05:15");
    assert!(!schedule.sync_enabled);
    assert_eq!(schedule.delete_limit, 50);
}

#[test]
fn apply_overrides_coerces_bad_numbers_to_defaults() {
    let mut schedule = ScheduleConfig::default();
    schedule.sync_limit = 200;
    let args = SaveScheduleArgs {
        reverify_enabled: None,
        reverify_time: None,
        reverify_count: None,
        reverify_statuses: None,
        sync_enabled: None,
        sync_time: None,
        sync_limit: Some("not-a-number".to_string()),
        sync_type: None,
        delete_enabled: None,
        delete_time: None,
        delete_limit: None,
    };
    apply_overrides(&mut schedule, &args);
    assert_eq!(schedule.sync_limit, 100);
}

#[test]
fn clearing_statuses_yields_empty_filter() {
    let mut schedule = ScheduleConfig::default();
    schedule.reverify_statuses = vec!["pending".to_string()];
    let args = SaveScheduleArgs {
        reverify_enabled: None,
        reverify_time: None,
        reverify_count: None,
        reverify_statuses: Some(String::new()),
        sync_enabled: None,
        sync_time: None,
        sync_limit: None,
        sync_type: None,
        delete_enabled: None,
        delete_time: None,
        delete_limit: None,
    };
    apply_overrides(&mut schedule, &args);
    assert!(schedule.reverify_statuses.is_empty());
}
