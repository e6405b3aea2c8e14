use clap::Subcommand;

pub(crate) mod tabs;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Focus a tab and raise its browser window
    Activate(tabs::ActivateArgs),

    /// Switch to a tab without looking up its window
    Switch(tabs::SwitchArgs),

    /// Search open tabs interactively
    #[command(visible_alias = "p")]
    Pick(tabs::PickArgs),

    /// Print open tabs, most recently used first
    #[command(visible_alias = "ls")]
    List(tabs::ListArgs),
}
