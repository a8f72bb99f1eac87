//! Fixtures shared by unit tests

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::player::{LeagueTeam, Player};
use crate::domain::repositories::{PlayerPage, PlayerSource, SourceError};
use crate::domain::team::TeamDraft;

pub fn player(id: u64) -> Player {
    Player {
        id,
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        position: Some("G".to_string()),
        height: Some("6-5".to_string()),
        weight: Some("210".to_string()),
        jersey_number: Some(id.to_string()),
        college: Some("State".to_string()),
        country: Some("USA".to_string()),
        team: LeagueTeam {
            id: 1,
            full_name: "Atlanta Hawks".to_string(),
            city: Some("Atlanta".to_string()),
            conference: Some("East".to_string()),
        },
    }
}

pub fn page(ids: RangeInclusive<u64>) -> PlayerPage {
    PlayerPage {
        data: ids.map(player).collect(),
    }
}

pub fn draft(name: &str, player_count: u32, players: Vec<Player>) -> TeamDraft {
    TeamDraft {
        name: name.to_string(),
        player_count,
        region: "East".to_string(),
        country: "USA".to_string(),
        players,
    }
}

/// Source that replays a fixed list of responses, then empty pages
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<PlayerPage, SourceError>>>,
    cursors: Mutex<Vec<u64>>,
    pub calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<PlayerPage, SourceError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            cursors: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn cursors(&self) -> Vec<u64> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayerSource for ScriptedSource {
    async fn fetch_page(&self, cursor: u64, _per_page: u32) -> Result<PlayerPage, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.cursors.lock().unwrap().push(cursor);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PlayerPage::default()))
    }
}

/// Source whose responses wait until [`GatedSource::open`] is called
pub struct GatedSource {
    gate: Notify,
    page: PlayerPage,
    pub calls: AtomicUsize,
}

impl GatedSource {
    pub fn new(page: PlayerPage) -> Self {
        Self {
            gate: Notify::new(),
            page,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn open(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl PlayerSource for GatedSource {
    async fn fetch_page(&self, _cursor: u64, _per_page: u32) -> Result<PlayerPage, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.page.clone())
    }
}

/// Source that records the highest number of overlapping requests and
/// always answers with a full page keyed by the cursor
#[derive(Default)]
pub struct CountingSource {
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    cursors: Mutex<Vec<u64>>,
}

impl CountingSource {
    pub fn cursors(&self) -> Vec<u64> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayerSource for CountingSource {
    async fn fetch_page(&self, cursor: u64, per_page: u32) -> Result<PlayerPage, SourceError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.cursors.lock().unwrap().push(cursor);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(page(cursor + 1..=cursor + u64::from(per_page)))
    }
}
