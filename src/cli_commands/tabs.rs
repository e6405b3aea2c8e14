use clap::Args;

use tabhop::model::TabRef;

#[derive(Args)]
pub(crate) struct ActivateArgs {
    /// Tab to focus, as windowId:tabId
    #[arg(value_name = "WINDOW_ID:TAB_ID")]
    pub(crate) tab: TabRef,
}

#[derive(Args)]
pub(crate) struct SwitchArgs {
    /// Tab to switch to, as windowId:tabId
    #[arg(value_name = "WINDOW_ID:TAB_ID")]
    pub(crate) tab: TabRef,
    /// Bring the browser application to the front afterwards
    #[arg(short = 'o', long)]
    pub(crate) open_browser: bool,
}

#[derive(Args)]
pub(crate) struct PickArgs {
    /// Stay open after activating a tab
    #[arg(short = 'l', long = "loop")]
    pub(crate) loop_mode: bool,
    /// Use built-in sample tabs instead of the browser
    #[arg(short = 'd', long)]
    pub(crate) demo: bool,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Use built-in sample tabs instead of the browser
    #[arg(long)]
    pub(crate) demo: bool,
}
