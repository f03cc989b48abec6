// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finora::cli;
use finora::commands;
use finora::config::Settings;
use finora::dashboard::Dashboard;
use finora::store::SheetClient;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("finora=warn"))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut settings = Settings::load()?;
    if let Some(url) = matches.get_one::<String>("source-url") {
        settings.source_url = url.clone();
    }

    if let Some(("config", _)) = matches.subcommand() {
        return commands::settings::handle(&settings);
    }

    let source = SheetClient::new(settings.require_source_url()?)?;
    let mut dash = Dashboard::new(source, settings.cache_ttl());

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&mut dash, sub)?,
        Some(("months", _)) => commands::summary::handle_months(&mut dash)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut dash, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut dash, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&dash)?,
        Some(("ask", sub)) => {
            let router = commands::chat::router_from_settings(&settings)?;
            commands::chat::ask(&mut dash, &router, sub)?
        }
        Some(("chat", _)) => commands::chat::handle_chat(&mut dash, &settings)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
