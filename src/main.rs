use anyhow::Result;
use clap::{App as ClapApp, Arg};
use sacco_signup::app::App;
use sacco_signup::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("wallet-url")
                .short("w")
                .long("wallet-url")
                .value_name("URL")
                .help("Base URL of the wallet service")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(wallet_url) = matches.value_of("wallet-url") {
        config.wallet_url = wallet_url.to_string();
        config.validate()?;
    }

    App::start(config).await
}
