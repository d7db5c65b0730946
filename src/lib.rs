pub mod access_control;
pub mod config;
pub mod notice;
pub mod observability;
pub mod routes;
pub mod screen;

pub use config::Config;
pub use notice::{Notice, NoticeLevel};
pub use screen::{JoinOutcome, TicketsScreen};

use iconic_client::HttpClient;
use iconic_membership::{Fee, Wallet};
use iconic_shared::StaticAuth;

/// Screen wired to the HTTP backend and the configured session
pub fn create_screen<W: Wallet>(
    config: &Config,
    wallet: W,
) -> anyhow::Result<TicketsScreen<HttpClient, W, StaticAuth>> {
    let api = HttpClient::new(&config.api.base_url, config.api.timeout())?;
    let auth = match config.session.to_session() {
        Some(session) => StaticAuth::new(session),
        None => StaticAuth::anonymous(),
    };

    Ok(TicketsScreen::new(api, wallet, auth)
        .with_fee(Fee::from_mist(config.membership.fee_mist))
        .with_network_name(&config.membership.network_name))
}
