use iconic::Config;
use iconic_membership::{PresignedWallet, UpgradeOutcome};
use iconic_shared::TransactionId;

pub async fn upgrade(config: Config, transaction_id: Option<String>) -> anyhow::Result<()> {
    let wallet = PresignedWallet::new(transaction_id.map(TransactionId::from));
    let mut screen = iconic::create_screen(&config, wallet)?;

    let outcome = screen.upgrade().await;
    if outcome == UpgradeOutcome::WalletConnectRequested {
        println!(
            "Pay the {} ICONIC fee on {} from your wallet.",
            screen.fee(),
            screen.network_name()
        );
    }

    super::print_notices(screen.take_notices());

    Ok(())
}
