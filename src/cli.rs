use clap::Parser;

#[derive(Parser)]
#[command(name = "vidscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(help_template = "NAME:
   {name} - Terminal client for an unlisted-video search API

USAGE:
   vidscout [keyword] [global options]

VERSION:
   {version}

DESCRIPTION:
   {name} searches a remote video API and renders the results as cards in
   your terminal.

   Controls:
     • Fill in keyword / channel id / category and press Enter
     • Use ↑/↓ to move between form fields and results
     • Press o to open a result in the browser, y to copy its link
     • Press s for settings, q to quit

GLOBAL OPTIONS:
{options}
")]
pub struct Cli {
    /// Keyword to search for on startup
    pub keyword: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Override the API bearer token from the config file
    #[arg(long = "token")]
    pub token: Option<String>,
}
