//! Tickets screen controller
//!
//! Owns everything the tickets page keeps between user actions: the active
//! tab, the displayed events, the upgrade prompt and the upgrade workflow.
//! Collaborators come in through the constructor.

use iconic_catalog::{EventBoard, FetchTicket, fetch_events};
use iconic_membership::{Fee, UpgradeOutcome, UpgradeState, UpgradeWorkflow, WaitingFlag, Wallet};
use iconic_shared::{AuthContext, Event, EventId, NewParticipation, TicketingApi, ViewTab};

use crate::access_control::{JoinDecision, decide};
use crate::notice::Notice;

/// Result of a join click or of the join command itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined(EventId),
    Failed(EventId, String),
    UpgradePrompted(EventId),
    AlreadyJoined(EventId),
    UnknownEvent(EventId),
}

pub struct TicketsScreen<A, W, U> {
    api: A,
    wallet: W,
    auth: U,
    board: EventBoard,
    upgrade: UpgradeWorkflow,
    selected_event: Option<EventId>,
    network_name: String,
    notices: Vec<Notice>,
}

impl<A, W, U> TicketsScreen<A, W, U>
where
    A: TicketingApi,
    W: Wallet,
    U: AuthContext,
{
    pub fn new(api: A, wallet: W, auth: U) -> Self {
        Self {
            api,
            wallet,
            auth,
            board: EventBoard::new(),
            upgrade: UpgradeWorkflow::new(Fee::ICONIC),
            selected_event: None,
            network_name: "Sui Testnet".to_owned(),
            notices: Vec::new(),
        }
    }

    pub fn with_fee(mut self, fee: Fee) -> Self {
        self.upgrade = UpgradeWorkflow::new(fee);
        self
    }

    pub fn with_network_name(mut self, network_name: impl Into<String>) -> Self {
        self.network_name = network_name.into();
        self
    }

    pub fn tab(&self) -> ViewTab {
        self.board.tab()
    }

    pub fn events(&self) -> &[Event] {
        self.board.events()
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.board.get(id)
    }

    pub fn is_loading(&self) -> bool {
        self.board.is_loading()
    }

    pub fn is_iconic(&self) -> bool {
        self.auth.is_iconic()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.is_connected()
    }

    pub fn is_waiting(&self) -> bool {
        self.upgrade.is_waiting()
    }

    pub fn waiting_flag(&self) -> WaitingFlag {
        self.upgrade.waiting_flag()
    }

    pub fn upgrade_state(&self) -> UpgradeState {
        self.upgrade.state()
    }

    pub fn fee(&self) -> Fee {
        self.upgrade.fee()
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// Event whose join click opened the upgrade prompt, if the prompt is open
    pub fn selected_event(&self) -> Option<&EventId> {
        self.selected_event.as_ref()
    }

    /// Message for an empty, settled collection
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.is_loading() || !self.events().is_empty() {
            return None;
        }

        Some(self.tab().empty_message())
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.notices.push(notice);
        }
    }

    /// Switches to `tab` and supersedes any fetch still in flight
    pub fn begin_fetch(&mut self, tab: ViewTab) -> FetchTicket {
        let ticket = self.board.begin(tab);
        tracing::debug!(%tab, generation = ticket.generation, "Event fetch started");
        ticket
    }

    /// Runs the read for `ticket` without touching screen state
    pub async fn fetch(&self, ticket: FetchTicket) -> Vec<Event> {
        let token = self.auth.token();
        fetch_events(&self.api, ticket.tab, token.as_deref()).await
    }

    /// Applies a fetch result unless a newer tab selection superseded it
    pub fn complete_fetch(&mut self, ticket: FetchTicket, events: Vec<Event>) -> bool {
        self.board.complete(ticket, events)
    }

    pub async fn select_tab(&mut self, tab: ViewTab) -> bool {
        let ticket = self.begin_fetch(tab);
        let events = self.fetch(ticket).await;
        self.complete_fetch(ticket, events)
    }

    pub async fn refresh(&mut self) -> bool {
        self.select_tab(self.tab()).await
    }

    pub fn decision(&self, id: &EventId) -> Option<JoinDecision> {
        let is_iconic = self.is_iconic();
        self.event(id).map(|event| decide(event, is_iconic))
    }

    /// Join click: joins, opens the upgrade prompt, or does nothing
    pub async fn request_join(&mut self, id: &EventId) -> JoinOutcome {
        match self.decision(id) {
            Some(JoinDecision::Join) => self.join(id).await,
            Some(JoinDecision::Upgrade) => {
                self.open_upgrade_prompt(id.clone());
                JoinOutcome::UpgradePrompted(id.clone())
            }
            Some(JoinDecision::AlreadyJoined) => JoinOutcome::AlreadyJoined(id.clone()),
            None => {
                tracing::debug!(event_id = %id, "Join requested for an event not on screen");
                JoinOutcome::UnknownEvent(id.clone())
            }
        }
    }

    /// Registers a confirmed participation, then marks the event locally
    pub async fn join(&mut self, id: &EventId) -> JoinOutcome {
        let token = self.auth.token();
        let participation = NewParticipation::confirmed(id.clone());

        let outcome = match self
            .api
            .create_participation(&participation, token.as_deref())
            .await
        {
            Ok(()) => {
                self.board.apply_join(id);
                tracing::info!(event_id = %id, "Joined event");
                JoinOutcome::Joined(id.clone())
            }
            Err(err) => {
                tracing::warn!(event_id = %id, error = %err, "Join failed");
                JoinOutcome::Failed(id.clone(), err.to_string())
            }
        };

        self.notify(Notice::for_join(&outcome));
        outcome
    }

    pub fn open_upgrade_prompt(&mut self, id: EventId) {
        self.selected_event = Some(id);
    }

    pub fn close_upgrade_prompt(&mut self) {
        self.selected_event = None;
    }

    /// One round of the become-ICONIC flow
    pub async fn upgrade(&mut self) -> UpgradeOutcome {
        let session = self.auth.session();
        let outcome = self
            .upgrade
            .run(&self.api, &self.wallet, session.as_ref())
            .await;

        if outcome.is_upgraded() {
            self.auth.mark_iconic();
            self.close_upgrade_prompt();
        }

        self.notices.push(Notice::for_upgrade(&outcome));
        outcome
    }
}
