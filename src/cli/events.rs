use iconic::Config;
use iconic_membership::PresignedWallet;
use iconic_shared::ViewTab;

pub async fn list(config: Config, tab: ViewTab) -> anyhow::Result<()> {
    let mut screen = iconic::create_screen(&config, PresignedWallet::default())?;
    screen.select_tab(tab).await;

    if let Some(message) = screen.empty_message() {
        println!("{message}");
        return Ok(());
    }

    println!("{}", tab.label());
    for event in screen.events() {
        let decision = screen
            .decision(&event.id)
            .map(|d| d.to_string())
            .unwrap_or_default();
        let exclusive = if event.is_exclusive { "ICONIC" } else { "" };

        println!(
            "{:>10}  {:<14}  {:<6}  {}",
            event.id,
            decision,
            exclusive,
            event.title().unwrap_or("(untitled)")
        );
    }

    Ok(())
}
