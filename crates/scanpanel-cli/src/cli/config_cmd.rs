use super::*;

pub(super) fn handle_config(client: &ScannerClient, args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Show => handle_show(client),
        ConfigCommands::Save(args) => handle_save(client, args),
        ConfigCommands::Test => handle_test(client),
    }
}

fn handle_show(client: &ScannerClient) -> anyhow::Result<()> {
    let config = client.load_config().context("load scanner config")?;
    println!("{}", render::config_summary(&config));
    Ok(())
}

fn handle_save(client: &ScannerClient, args: SaveConfigArgs) -> anyhow::Result<()> {
    let mut form = ConfigForm {
        base_url: args.base_url,
        api_key: args.api_key,
        timeout: number_or(args.timeout.as_deref(), defaults::TIMEOUT_SECONDS),
        default_limit: number_or(args.default_limit.as_deref(), defaults::FETCH_LIMIT),
    };
    client
        .save_config(&form.update_payload())
        .context("save scanner config")?;
    form.mark_saved();
    notify("scanner config saved", NotifyTone::Success);
    Ok(())
}

/// A probe that reaches the panel but reports bad connectivity or auth
/// is a result, not a failure; only transport or HTTP errors bubble up.
fn handle_test(client: &ScannerClient) -> anyhow::Result<()> {
    let report = client.ping().context("probe scanner")?;
    match report.failure_message() {
        Some(message) => notify(&message, NotifyTone::Error),
        None => notify("connectivity ok / api key valid", NotifyTone::Success),
    }
    println!("connectivity: {}\nauth: {}", report.connectivity, report.auth);
    Ok(())
}
