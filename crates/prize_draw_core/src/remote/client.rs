use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use tracing::debug;

use crate::contract::{
    CreatedEntry, EntryId, EntryOutcome, NewEntry, PrizeRow, PrizeService, Rank, ServiceError,
};

use super::config::RemoteConfig;
use super::parser::{
    parse_created_entry, parse_draw_result, parse_error, parse_inventory, parse_outcome,
};
use super::response::{CreateEntryBody, DrawPrizeArgs};

const PRIZES_TABLE: &str = "prizes";
const ENTRIES_TABLE: &str = "entries";
const DRAW_PROCEDURE: &str = "rpc/draw_prize";

/// [`PrizeService`] over the hosted REST endpoint.
#[derive(Debug, Clone)]
pub struct RestPrizeService {
    client: Client,
    config: RemoteConfig,
}

impl RestPrizeService {
    pub fn new(config: RemoteConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    pub(super) fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ServiceError> {
        let mut url = self
            .config
            .endpoint(path)
            .map_err(|error| ServiceError::Transport(error.to_string()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let api_key = self.config.api_key();
        self.client
            .request(method, url)
            .header("apikey", api_key)
            .bearer_auth(api_key)
    }

    fn send(&self, request: RequestBuilder) -> Result<String, ServiceError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "service response");
        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &body));
        }
        Ok(body)
    }
}

impl PrizeService for RestPrizeService {
    fn list_inventory(&self) -> Result<Vec<PrizeRow>, ServiceError> {
        let url = self.url(PRIZES_TABLE, &[("select", "rank,remaining")])?;
        let body = self.send(self.request(Method::GET, url))?;
        parse_inventory(&body)
    }

    fn create_entry(&self, entry: &NewEntry) -> Result<CreatedEntry, ServiceError> {
        let url = self.url(ENTRIES_TABLE, &[("select", "id")])?;
        let request = self
            .request(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(&CreateEntryBody::from(entry));
        let body = self.send(request)?;
        parse_created_entry(&body)
    }

    fn fetch_outcome(&self, entry_id: &EntryId) -> Result<EntryOutcome, ServiceError> {
        let filter = format!("eq.{entry_id}");
        let url = self.url(
            ENTRIES_TABLE,
            &[("select", "prize_rank"), ("id", filter.as_str())],
        )?;
        let body = self.send(self.request(Method::GET, url))?;
        parse_outcome(&body, entry_id)
    }

    fn draw_prize(&self, entry_id: &EntryId) -> Result<Option<Rank>, ServiceError> {
        let url = self.url(DRAW_PROCEDURE, &[])?;
        let request = self
            .request(Method::POST, url)
            .json(&DrawPrizeArgs { entry_id });
        let body = self.send(request)?;
        parse_draw_result(&body)
    }
}
