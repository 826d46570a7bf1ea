use std::{rc::Rc, time::Duration};

use json::JsonValue;
use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderValue, InvalidHeaderValue},
    StatusCode,
};
use thiserror::Error;

use crate::{
    model::{
        ids::{MatchId, Puuid, SummonerId},
        summoner::{PlayerHandle, TierEntry},
        tier::{Division, Tier},
    },
    service::report::{Reporter, Severity},
};

use super::{
    parsing::{
        league::{parse_apex_league, parse_division_entries},
        summoner::{parse_match_ids, parse_player_handle},
        ParsingError,
    },
    LadderApi,
};

const TOKEN_HEADER: &str = "x-riot-token";
const QUEUE: &str = "RANKED_SOLO_5x5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the league, summoner and match endpoints.
///
/// League and summoner lookups go to the platform host (e.g. `kr`), match lookups to the
/// regional host (e.g. `asia`). Failures are reported and turned into empty results by the
/// [`LadderApi`] implementation; [`LadderClient::request`] exposes them as errors.
pub struct LadderClient {
    client: Client,
    platform_url: String,
    regional_url: String,
    reporter: Rc<dyn Reporter>,
}

impl LadderClient {
    pub fn new(
        api_key: &str,
        platform_url: &str,
        regional_url: &str,
        reporter: Rc<dyn Reporter>,
    ) -> Result<Self, ClientInitError> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(api_key.trim())?;
        token.set_sensitive(true);
        headers.insert(TOKEN_HEADER, token);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            platform_url: platform_url.trim_end_matches('/').to_string(),
            regional_url: regional_url.trim_end_matches('/').to_string(),
            reporter,
        })
    }

    pub fn request(&self, request_type: LadderRequest) -> Result<JsonValue, RequestError> {
        let url = self.url(&request_type);
        tracing::debug!(%url, "GET");

        let mut builder = self.client.get(&url);
        if let LadderRequest::MatchIds(_, count) = request_type {
            builder = builder.query(&[("count", count)]);
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::InvalidResponse(request_type.to_string(), status));
        }

        let text = response.text()?;
        Ok(json::parse(text.as_str())?)
    }

    fn url(&self, request_type: &LadderRequest) -> String {
        match request_type {
            LadderRequest::ApexLeague(tier) => {
                format!(
                    "{}/lol/league/v4/{}leagues/by-queue/{}",
                    self.platform_url,
                    tier.as_str().to_ascii_lowercase(),
                    QUEUE
                )
            }
            LadderRequest::DivisionEntries(tier, division) => {
                format!("{}/lol/league/v4/entries/{}/{}/{}", self.platform_url, QUEUE, tier, division)
            }
            LadderRequest::Summoner(id) => format!("{}/lol/summoner/v4/summoners/{}", self.platform_url, id),
            LadderRequest::MatchIds(puuid, _) => {
                format!("{}/lol/match/v5/matches/by-puuid/{}/ids", self.regional_url, puuid)
            }
            LadderRequest::MatchDetail(id) => format!("{}/lol/match/v5/matches/{}", self.regional_url, id),
        }
    }

    fn fetch_division(&self, tier: Tier, division: Division) -> Result<Vec<TierEntry>, FetchError> {
        let json = self.request(LadderRequest::DivisionEntries(tier, division))?;
        Ok(parse_division_entries(&json, tier, division)?)
    }

    fn fetch_apex(&self, tier: Tier) -> Result<Vec<TierEntry>, FetchError> {
        let json = self.request(LadderRequest::ApexLeague(tier))?;
        Ok(parse_apex_league(&json, tier)?)
    }
}

impl LadderApi for LadderClient {
    fn fetch_tier_entries(&self, tier: Tier) -> Vec<TierEntry> {
        if tier.is_apex() {
            return self.fetch_apex(tier).unwrap_or_else(|err| {
                self.reporter
                    .report(Severity::Warning, &format!("Failed to load {} league: {}", tier, err));
                Vec::new()
            });
        }

        let mut entries = Vec::new();
        for division in Division::ALL {
            match self.fetch_division(tier, division) {
                Ok(division_entries) => entries.extend(division_entries),
                Err(err) => self.reporter.report(
                    Severity::Warning,
                    &format!("Skipping {} {}: {}", tier, division, err),
                ),
            }
        }
        entries
    }

    fn resolve_player(&self, summoner_id: &SummonerId) -> Option<PlayerHandle> {
        let result = self
            .request(LadderRequest::Summoner(summoner_id))
            .map_err(FetchError::from)
            .and_then(|json| Ok(parse_player_handle(&json, summoner_id)?));

        match result {
            Ok(handle) => Some(handle),
            Err(err) => {
                self.reporter
                    .report(Severity::Warning, &format!("Summoner {} not resolved: {}", summoner_id, err));
                None
            }
        }
    }

    fn fetch_match_ids(&self, puuid: &Puuid, count: u8) -> Option<Vec<MatchId>> {
        let result = self
            .request(LadderRequest::MatchIds(puuid, count))
            .map_err(FetchError::from)
            .and_then(|json| Ok(parse_match_ids(&json)?));

        match result {
            Ok(ids) => Some(ids),
            Err(err) => {
                self.reporter
                    .report(Severity::Warning, &format!("Match list for {} unavailable: {}", puuid, err));
                None
            }
        }
    }

    fn fetch_match_detail(&self, match_id: &MatchId) -> Option<JsonValue> {
        match self.request(LadderRequest::MatchDetail(match_id)) {
            Ok(json) => Some(json),
            Err(err) => {
                self.reporter
                    .report(Severity::Warning, &format!("Match {} unavailable: {}", match_id, err));
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LadderRequest<'a> {
    ApexLeague(Tier),
    DivisionEntries(Tier, Division),
    Summoner(&'a SummonerId),
    MatchIds(&'a Puuid, u8),
    MatchDetail(&'a MatchId),
}

impl std::fmt::Display for LadderRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LadderRequest::ApexLeague(tier) => write!(f, "{} league", tier),
            LadderRequest::DivisionEntries(tier, division) => write!(f, "{} {} entries", tier, division),
            LadderRequest::Summoner(id) => write!(f, "summoner {}", id),
            LadderRequest::MatchIds(puuid, count) => write!(f, "{} match ids of {}", count, puuid),
            LadderRequest::MatchDetail(id) => write!(f, "match {}", id),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
    #[error("Failed to create HTTP client: {0}")]
    HttpClientCreation(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("The server returned {1} for {0}")]
    InvalidResponse(String, StatusCode),
    #[error("Failed to parse JSON response: {0}")]
    JsonParseError(#[from] json::Error),
}

/// Request or payload failure inside one ladder call.
#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("unexpected payload: {0}")]
    Parsing(#[from] ParsingError),
}
