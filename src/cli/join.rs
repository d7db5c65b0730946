use iconic::{Config, JoinOutcome};
use iconic_membership::PresignedWallet;
use iconic_shared::{EventId, ViewTab};

pub async fn join(config: Config, event_id: EventId) -> anyhow::Result<()> {
    let mut screen = iconic::create_screen(&config, PresignedWallet::default())?;
    screen.select_tab(ViewTab::Events).await;

    match screen.request_join(&event_id).await {
        JoinOutcome::UpgradePrompted(id) => println!(
            "Event {id} is exclusive to ICONIC members. Pay {} on {} and run `iconic upgrade --tx-id <TX>`.",
            screen.fee(),
            screen.network_name()
        ),
        JoinOutcome::AlreadyJoined(id) => println!("You are already registered for event {id}."),
        JoinOutcome::UnknownEvent(id) => {
            println!("Event {id} is not among your recommended events.")
        }
        JoinOutcome::Joined(_) | JoinOutcome::Failed(..) => {}
    }

    super::print_notices(screen.take_notices());

    Ok(())
}
