use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use tabhop::activate::Activator;
use tabhop::channel::CommandChannel;
use tabhop::config::Settings;
use tabhop::model::Tab;
use tabhop::raise::platform_raiser;
use tabhop::tabs::TabSource;
use tabhop::tui::{PickerBackend, PickerExit, PickerOptions};

use crate::cli_commands::Commands;
use crate::cli_commands::tabs::{ListArgs, PickArgs};

pub(crate) async fn handle_command(
    settings: &Settings,
    socket: PathBuf,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Activate(args) => {
            let activator = activator(settings, socket)?;
            activator.activate(args.tab).await?;
        }
        Commands::Switch(args) => {
            let activator = activator(settings, socket)?;
            activator.switch(args.tab, args.open_browser).await?;
        }
        Commands::Pick(args) => pick(settings, socket, args).await?,
        Commands::List(args) => list(socket, args).await?,
    }
    Ok(())
}

fn connect(socket: PathBuf) -> Result<CommandChannel> {
    CommandChannel::connect(socket).context("connect to browser")
}

fn activator(settings: &Settings, socket: PathBuf) -> Result<Activator> {
    let raiser = Arc::from(platform_raiser(settings));
    Ok(Activator::new(connect(socket)?, raiser))
}

async fn pick(settings: &Settings, socket: PathBuf, args: PickArgs) -> Result<()> {
    let backend = if args.demo {
        PickerBackend {
            source: TabSource::Fixture,
            activator: None,
        }
    } else {
        let channel = connect(socket)?;
        PickerBackend {
            source: TabSource::Live(channel.clone()),
            activator: Some(Activator::new(channel, Arc::from(platform_raiser(settings)))),
        }
    };

    let opts = PickerOptions {
        loop_mode: args.loop_mode,
    };
    match tabhop::tui::run(opts, backend).await? {
        PickerExit::Activated(tab) => tracing::info!(tab = %tab.tab_ref(), "picker done"),
        PickerExit::Cancelled => tracing::debug!("picker cancelled"),
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedTab<'a> {
    #[serde(flatten)]
    tab: &'a Tab,
    last_accessed_at: Option<String>,
}

async fn list(socket: PathBuf, args: ListArgs) -> Result<()> {
    let source = if args.demo {
        TabSource::Fixture
    } else {
        TabSource::Live(connect(socket)?)
    };
    let tabs = source.fetch().await?;

    if args.json {
        let rows: Vec<ListedTab<'_>> = tabs
            .iter()
            .map(|tab| ListedTab {
                tab,
                last_accessed_at: format_accessed(tab.last_accessed),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize tabs json")?
        );
        return Ok(());
    }

    for tab in &tabs {
        let marker = if tab.active { "*" } else { " " };
        println!(
            "{} {:<12} {}  {}",
            marker,
            tab.tab_ref().to_string(),
            tab.title,
            tab.domain
        );
    }
    Ok(())
}

/// RFC 3339 rendering of an epoch-millis timestamp.
fn format_accessed(millis: u64) -> Option<String> {
    let nanos = i128::from(millis) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .format(&Rfc3339)
        .ok()
}
