use super::*;
use scanpanel_core::model::ScheduleConfig;

pub(super) fn handle_schedule(client: &ScannerClient, args: ScheduleArgs) -> anyhow::Result<()> {
    match args.command {
        ScheduleCommands::Show => handle_show(client),
        ScheduleCommands::Save(args) => handle_save(client, args),
        ScheduleCommands::Run(args) => handle_run(client, args.job),
    }
}

fn handle_show(client: &ScannerClient) -> anyhow::Result<()> {
    let schedule = client.load_schedule().context("load schedule")?;
    println!("{}", render::schedule_summary(&schedule));
    Ok(())
}

/// Load the current document, apply the given overrides, save the whole
/// document back. The wire never sees a partial update.
fn handle_save(client: &ScannerClient, args: SaveScheduleArgs) -> anyhow::Result<()> {
    let mut schedule = client.load_schedule().context("load schedule")?;
    apply_overrides(&mut schedule, &args);
    schedule.validate()?;
    client.save_schedule(&schedule).context("save schedule")?;
    notify("schedule saved", NotifyTone::Success);
    Ok(())
}

pub(super) fn apply_overrides(schedule: &mut ScheduleConfig, args: &SaveScheduleArgs) {
    if let Some(enabled) = args.reverify_enabled {
        schedule.reverify_enabled = enabled;
    }
    if let Some(time) = &args.reverify_time {
        schedule.reverify_time = time.trim().to_string();
    }
    if let Some(count) = &args.reverify_count {
        schedule.reverify_count = number_or(Some(count.as_str()), defaults::REVERIFY_COUNT);
    }
    if let Some(statuses) = &args.reverify_statuses {
        schedule.reverify_statuses = parse_statuses(statuses);
    }
    if let Some(enabled) = args.sync_enabled {
        schedule.sync_enabled = enabled;
    }
    if let Some(time) = &args.sync_time {
        schedule.sync_time = time.trim().to_string();
    }
    if let Some(limit) = &args.sync_limit {
        schedule.sync_limit = number_or(Some(limit.as_str()), defaults::SYNC_LIMIT);
    }
    if let Some(key_type) = &args.sync_type {
        schedule.sync_type = key_type.trim().to_string();
    }
    if let Some(enabled) = args.delete_enabled {
        schedule.delete_enabled = enabled;
    }
    if let Some(time) = &args.delete_time {
        schedule.delete_time = time.trim().to_string();
    }
    if let Some(limit) = &args.delete_limit {
        schedule.delete_limit = number_or(Some(limit.as_str()), defaults::DELETE_LIMIT);
    }
}

fn handle_run(client: &ScannerClient, job: RunJob) -> anyhow::Result<()> {
    let schedule = client.load_schedule().context("load schedule")?;
    match job {
        RunJob::Reverify { count, statuses } => {
            let count = count.unwrap_or(schedule.reverify_count);
            let statuses = statuses
                .as_deref()
                .map(parse_statuses)
                .unwrap_or(schedule.reverify_statuses);
            let outcome = client
                .trigger_reverify(count, &statuses)
                .context("trigger reverify")?;
            notify(
                &format!("reverify triggered: checked={}", outcome.checked_or(count)),
                NotifyTone::Success,
            );
        }
        RunJob::Sync { limit, key_type } => {
            let limit = limit.unwrap_or(schedule.sync_limit);
            let key_type = key_type.unwrap_or(schedule.sync_type);
            let outcome = client
                .trigger_sync(limit, &key_type)
                .context("trigger sync")?;
            notify(
                &format!("synced {} keys", outcome.count()),
                NotifyTone::Success,
            );
        }
        RunJob::Delete { limit } => {
            let limit = limit.unwrap_or(schedule.delete_limit);
            let outcome = client.trigger_delete(limit).context("trigger delete")?;
            notify(
                &format!("deleted {} invalid keys", outcome.deleted),
                NotifyTone::Success,
            );
        }
    }
    Ok(())
}
