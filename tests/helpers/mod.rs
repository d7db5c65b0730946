//! In-memory collaborators for screen tests
//!
//! Each fake records what it was asked to do so tests can assert on the
//! exact calls made by the screen.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use iconic::TicketsScreen;
use iconic_membership::{Fee, WaitingFlag, Wallet, WalletError};
use iconic_shared::{
    Error, NewParticipation, RawEvent, Result, Session, StaticAuth, TicketingApi, TransactionId,
    ViewTab,
};

fn status_error(code: u16) -> Error {
    match code {
        401 => Error::Unauthenticated,
        403 => Error::Forbidden,
        code => Error::Status(code),
    }
}

/// Ticketing backend answering from memory
#[derive(Default)]
pub struct FakeApi {
    pub recommended: Mutex<Vec<RawEvent>>,
    pub participating: Mutex<Vec<RawEvent>>,
    pub fail_reads: AtomicBool,
    /// `None` answers 2xx, `Some(code)` fails with that status
    pub join_status: Mutex<Option<u16>>,
    pub upgrade_status: Mutex<Option<u16>>,
    pub reads: Mutex<Vec<(ViewTab, Option<String>)>>,
    pub joins: Mutex<Vec<(NewParticipation, Option<String>)>>,
    pub upgrades: Mutex<Vec<(String, String, TransactionId)>>,
    /// Samples of the screen's `waiting` flag taken during confirmation
    pub watched: Mutex<Option<WaitingFlag>>,
    pub waiting_seen: Mutex<Vec<bool>>,
}

impl FakeApi {
    pub fn with_events(recommended: Vec<RawEvent>, participating: Vec<RawEvent>) -> Arc<Self> {
        Arc::new(Self {
            recommended: Mutex::new(recommended),
            participating: Mutex::new(participating),
            ..Default::default()
        })
    }

    pub fn fail_joins_with(&self, code: u16) {
        *self.join_status.lock().unwrap() = Some(code);
    }

    pub fn answer_upgrades_with(&self, code: u16) {
        *self.upgrade_status.lock().unwrap() = Some(code);
    }
}

#[async_trait]
impl TicketingApi for FakeApi {
    async fn list_events(&self, tab: ViewTab, token: Option<&str>) -> Result<Vec<RawEvent>> {
        self.reads
            .lock()
            .unwrap()
            .push((tab, token.map(str::to_owned)));

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Transport("connection refused".to_owned()));
        }

        Ok(match tab {
            ViewTab::Events => self.recommended.lock().unwrap().clone(),
            ViewTab::MyTickets => self.participating.lock().unwrap().clone(),
        })
    }

    async fn create_participation(
        &self,
        participation: &NewParticipation,
        token: Option<&str>,
    ) -> Result<()> {
        self.joins
            .lock()
            .unwrap()
            .push((participation.clone(), token.map(str::to_owned)));

        match *self.join_status.lock().unwrap() {
            Some(code) => Err(status_error(code)),
            None => Ok(()),
        }
    }

    async fn upgrade_to_iconic(
        &self,
        user_id: &str,
        token: &str,
        transaction_id: &TransactionId,
    ) -> Result<()> {
        self.upgrades.lock().unwrap().push((
            user_id.to_owned(),
            token.to_owned(),
            transaction_id.clone(),
        ));
        if let Some(flag) = &*self.watched.lock().unwrap() {
            self.waiting_seen.lock().unwrap().push(flag.get());
        }

        match *self.upgrade_status.lock().unwrap() {
            Some(code) if !(200..300).contains(&code) => Err(status_error(code)),
            _ => Ok(()),
        }
    }
}

/// Wallet that connects on request and pays with a fixed transaction id
pub struct FakeWallet {
    pub connected: AtomicBool,
    pub reject_payments: AtomicBool,
    pub connects: AtomicUsize,
    pub payments: Mutex<Vec<Fee>>,
    pub watched: Mutex<Option<WaitingFlag>>,
    pub waiting_seen: Mutex<Vec<bool>>,
}

impl FakeWallet {
    pub fn new(connected: bool) -> Arc<Self> {
        Arc::new(Self {
            connected: AtomicBool::new(connected),
            reject_payments: AtomicBool::new(false),
            connects: AtomicUsize::new(0),
            payments: Mutex::new(Vec::new()),
            watched: Mutex::new(None),
            waiting_seen: Mutex::new(Vec::new()),
        })
    }

    pub fn payment_count(&self) -> usize {
        self.payments.lock().unwrap().len()
    }
}

#[async_trait]
impl Wallet for FakeWallet {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self) -> std::result::Result<(), WalletError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn pay_fee(&self, amount: Fee) -> std::result::Result<TransactionId, WalletError> {
        self.payments.lock().unwrap().push(amount);
        if let Some(flag) = &*self.watched.lock().unwrap() {
            self.waiting_seen.lock().unwrap().push(flag.get());
        }

        if self.reject_payments.load(Ordering::SeqCst) {
            return Err(WalletError::Rejected);
        }

        Ok(TransactionId::from("0xfee"))
    }
}

pub fn session(is_iconic: bool) -> Session {
    Session {
        user_id: "user-1".to_owned(),
        token: "token-1".to_owned(),
        is_iconic,
    }
}

pub type Screen = TicketsScreen<Arc<FakeApi>, Arc<FakeWallet>, Arc<StaticAuth>>;

pub struct TestScreen {
    pub screen: Screen,
    pub api: Arc<FakeApi>,
    pub wallet: Arc<FakeWallet>,
    pub auth: Arc<StaticAuth>,
}

pub fn screen(api: Arc<FakeApi>, wallet: Arc<FakeWallet>, session: Option<Session>) -> TestScreen {
    let auth = Arc::new(match session {
        Some(session) => StaticAuth::new(session),
        None => StaticAuth::anonymous(),
    });
    let screen = TicketsScreen::new(api.clone(), wallet.clone(), auth.clone());

    TestScreen {
        screen,
        api,
        wallet,
        auth,
    }
}
