use std::time::Duration;

use async_trait::async_trait;
use iconic_shared::{
    Error, NewParticipation, RawEvent, Result, TicketingApi, TransactionId, ViewTab,
};
use reqwest::{RequestBuilder, Response, StatusCode, header};
use url::Url;

pub const TRANSACTION_ID_HEADER: &str = "X-Transaction-Id";

/// REST resource holding the collection shown under `tab`.
pub fn events_path(tab: ViewTab) -> &'static str {
    match tab {
        ViewTab::Events => "api/events/recommended",
        ViewTab::MyTickets => "api/events/participating",
    }
}

/// `reqwest` client for the ticketing backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| Error::Transport(e.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Transport(e.to_string()))
    }

    fn iconic_url(&self, user_id: &str) -> Result<Url> {
        let mut url = self.url("api/users/iconic")?;
        url.path_segments_mut()
            .map_err(|_| Error::Transport(format!("cannot build a path on {}", self.base_url)))?
            .push(user_id);

        Ok(url)
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::debug!(url = %response.url(), %status, "Request rejected");

    Err(match status {
        StatusCode::FORBIDDEN => Error::Forbidden,
        StatusCode::UNAUTHORIZED => Error::Unauthenticated,
        _ => Error::Status(status.as_u16()),
    })
}

#[async_trait]
impl TicketingApi for HttpClient {
    #[tracing::instrument(skip(self, token))]
    async fn list_events(&self, tab: ViewTab, token: Option<&str>) -> Result<Vec<RawEvent>> {
        let url = self.url(events_path(tab))?;
        let response = authorize(self.http.get(url), token)
            .send()
            .await
            .map_err(transport)?;

        let body = check(response)?.bytes().await.map_err(transport)?;

        Ok(serde_json::from_slice(&body)?)
    }

    #[tracing::instrument(skip(self, token), fields(event_id = %participation.event_id))]
    async fn create_participation(
        &self,
        participation: &NewParticipation,
        token: Option<&str>,
    ) -> Result<()> {
        let url = self.url("api/event-participations")?;
        let response = authorize(self.http.post(url), token)
            .json(participation)
            .send()
            .await
            .map_err(transport)?;

        check(response)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, token))]
    async fn upgrade_to_iconic(
        &self,
        user_id: &str,
        token: &str,
        transaction_id: &TransactionId,
    ) -> Result<()> {
        let url = self.iconic_url(user_id)?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .header(TRANSACTION_ID_HEADER, transaction_id.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .map_err(transport)?;

        check(response)?;

        Ok(())
    }
}
