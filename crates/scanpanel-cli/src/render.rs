use scanpanel_core::model::{KeyAsset, ScannerConfig, ScheduleConfig};
use scanpanel_core::status::classify;
use scanpanel_core::timefmt::{MISSING_TIMESTAMP, format_timestamp};

/// Fixed-width table of fetched assets, one row per record in fetch
/// order. The status cell carries the raw label plus its tone.
pub fn asset_table(items: &[KeyAsset]) -> String {
    if items.is_empty() {
        return "no key assets".to_string();
    }

    let header = ["KEY", "TYPE", "STATUS", "LAST VERIFIED", "SOURCE"];
    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|item| {
            [
                item.key.clone(),
                item.key_type.clone(),
                status_cell(&item.recheck_status),
                format_timestamp(item.last_verified_at.as_deref()),
                item.url.clone().unwrap_or_else(|| MISSING_TIMESTAMP.to_string()),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: [&str; 5]| -> String {
        let mut line = String::new();
        for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
            if index > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            if index < cells.len() - 1 {
                line.push_str(&" ".repeat(width - cell.chars().count()));
            }
        }
        line
    };

    let mut lines = vec![render_row(header)];
    for row in &rows {
        lines.push(render_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    lines.join("\n")
}

fn status_cell(raw: &str) -> String {
    let label = if raw.is_empty() { "unknown" } else { raw };
    format!("{label} [{}]", classify(raw).label())
}

pub fn config_summary(config: &ScannerConfig) -> String {
    let masked = config
        .api_key_masked
        .as_deref()
        .filter(|masked| !masked.is_empty())
        .unwrap_or("not set");
    format!(
        "base_url: {}\napi_key: {}\ntimeout: {}s\ndefault_limit: {}",
        if config.base_url.is_empty() { "not set" } else { &config.base_url },
        masked,
        config.timeout,
        config.default_limit
    )
}

pub fn schedule_summary(schedule: &ScheduleConfig) -> String {
    let statuses = if schedule.reverify_statuses.is_empty() {
        "all".to_string()
    } else {
        schedule.reverify_statuses.join(",")
    };
    [
        format!(
            "reverify: {} at {} count={} statuses={}",
            enabled_label(schedule.reverify_enabled),
            schedule.reverify_time,
            schedule.reverify_count,
            statuses
        ),
        format!(
            "sync:     {} at {} limit={} type={}",
            enabled_label(schedule.sync_enabled),
            schedule.sync_time,
            schedule.sync_limit,
            schedule.sync_type
        ),
        format!(
            "delete:   {} at {} limit={}",
            enabled_label(schedule.delete_enabled),
            schedule.delete_time,
            schedule.delete_limit
        ),
    ]
    .join("\n")
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "on " } else { "off" }
}
