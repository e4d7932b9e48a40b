use super::*;

pub(super) fn handle_keys(client: &ScannerClient, args: KeysArgs) -> anyhow::Result<()> {
    match args.command {
        KeysCommands::Fetch(args) => handle_fetch(client, args),
        KeysCommands::DeleteInvalid(args) => handle_delete_invalid(client, args),
    }
}

fn handle_fetch(client: &ScannerClient, args: FetchArgs) -> anyhow::Result<()> {
    let mut session = PanelSession::new();
    match client.load_config() {
        Ok(config) => session.apply_default_limit(config.default_limit),
        Err(err) => warn!(error = %err, "scanner config unavailable, using built-in defaults"),
    }

    let limit = session.effective_limit(args.limit);
    let key_type = args.key_type.as_deref().unwrap_or(defaults::SYNC_KEY_TYPE);
    let page = client
        .fetch_assets(limit, key_type)
        .context("fetch key assets")?;
    session.cache.replace_all(page.items);

    if args.export {
        println!("{}", session.cache.export_joined());
    } else {
        println!("{}", render::asset_table(session.cache.items()));
    }
    notify(
        &format!("fetched {} key assets", session.cache.count()),
        NotifyTone::Success,
    );
    Ok(())
}

fn handle_delete_invalid(client: &ScannerClient, args: DeleteInvalidArgs) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(defaults::DELETE_LIMIT);
    let outcome = client
        .delete_invalid(limit)
        .context("delete invalid keys")?;
    notify(
        &format!(
            "deleted {} / {} invalid keys; run `keys fetch` to refresh",
            outcome.deleted,
            outcome.requested_or(limit)
        ),
        NotifyTone::Success,
    );
    Ok(())
}
