//! Cookie-keyed browser sessions.
//!
//! Each browser carries a `quiz.sid` cookie holding a v4 UUID. The session
//! layer resolves (or creates) the session before the handler runs and
//! exposes it to handlers through the [`Session`] extractor. Session data
//! lives in memory and expires after a configurable idle period.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, TimeDelta, Utc};
use quiz_play::domain::random_play::RandomPlayState;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "quiz.sid";

/// Category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// An action completed.
    Success,
    /// An action failed.
    Error,
}

impl FlashKind {
    /// CSS class name used when rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message shown once, on the next page rendered for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Message category.
    pub kind: FlashKind,
    /// Message text.
    pub message: String,
}

/// Per-session state.
#[derive(Debug, Default)]
pub struct SessionData {
    /// Progress of the current random play-through.
    pub random_play: RandomPlayState,
    /// Pending flash messages, oldest first.
    pub flashes: Vec<Flash>,
}

#[derive(Debug)]
struct Entry {
    data: SessionData,
    last_seen: DateTime<Utc>,
}

/// In-memory session store shared by all requests.
#[derive(Debug, Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: TimeDelta,
}

impl SessionStore {
    /// Creates an empty store whose sessions expire after `ttl` without a
    /// request.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    // Every critical section leaves the map consistent; poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves the session presented by the client, or starts a new one.
    /// Returns the session id and whether it was just created. Expired
    /// sessions are pruned first.
    pub fn resolve(&self, presented: Option<Uuid>, now: DateTime<Utc>) -> (Uuid, bool) {
        let mut entries = self.lock();
        let ttl = self.ttl;
        entries.retain(|_, entry| now - entry.last_seen < ttl);

        if let Some(id) = presented {
            if let Some(entry) = entries.get_mut(&id) {
                entry.last_seen = now;
                return (id, false);
            }
        }

        let id = Uuid::new_v4();
        entries.insert(
            id,
            Entry {
                data: SessionData::default(),
                last_seen: now,
            },
        );
        debug!(session_id = %id, live = entries.len(), "started session");
        (id, true)
    }

    /// Runs `f` against the data of session `id`, recreating it empty (seen
    /// at `now`) if it was pruned in the meantime.
    pub fn with<R>(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut SessionData) -> R,
    ) -> R {
        let mut entries = self.lock();
        let entry = entries.entry(id).or_insert_with(|| Entry {
            data: SessionData::default(),
            last_seen: now,
        });
        f(&mut entry.data)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Handle to the current request's session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    /// Request time, read once from the application clock.
    now: DateTime<Utc>,
    store: SessionStore,
}

impl Session {
    /// The session id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queues a flash message for the next rendered page.
    pub fn flash(&self, kind: FlashKind, message: impl Into<String>) {
        let message = message.into();
        self.store.with(self.id, self.now, |data| {
            data.flashes.push(Flash { kind, message });
        });
    }

    /// Removes and returns all pending flash messages.
    #[must_use]
    pub fn take_flashes(&self) -> Vec<Flash> {
        self.store
            .with(self.id, self.now, |data| std::mem::take(&mut data.flashes))
    }

    /// A copy of the random play progress.
    #[must_use]
    pub fn random_play(&self) -> RandomPlayState {
        self.store
            .with(self.id, self.now, |data| data.random_play.clone())
    }

    /// Stores new random play progress.
    pub fn set_random_play(&self, progress: RandomPlayState) {
        self.store
            .with(self.id, self.now, |data| data.random_play = progress);
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "session layer not installed"))
    }
}

/// Extracts the session id from the `Cookie` headers, if present and well
/// formed.
#[must_use]
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Middleware that attaches a [`Session`] to the request and sets the
/// cookie on responses that started a new session.
pub async fn session_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = session_id_from_headers(request.headers());
    let now = state.clock.now();
    let (id, is_new) = state.sessions.resolve(presented, now);
    request.extensions_mut().insert(Session {
        id,
        now,
        store: state.sessions.clone(),
    });

    let mut response = next.run(request).await;

    if is_new {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, minute, 0).unwrap()
    }

    #[test]
    fn test_resolve_without_cookie_creates_session() {
        let store = SessionStore::new(TimeDelta::minutes(30));

        let (_, is_new) = store.resolve(None, at(0));

        assert!(is_new);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_known_session_reuses_it() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));

        let (again, is_new) = store.resolve(Some(id), at(10));

        assert_eq!(again, id);
        assert!(!is_new);
    }

    #[test]
    fn test_resolve_unknown_session_issues_a_new_id() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let forged = Uuid::new_v4();

        let (id, is_new) = store.resolve(Some(forged), at(0));

        assert_ne!(id, forged);
        assert!(is_new);
    }

    #[test]
    fn test_idle_sessions_expire() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));

        let (replacement, is_new) = store.resolve(Some(id), at(45));

        assert!(is_new);
        assert_ne!(replacement, id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_recreated_session_expires_on_request_time() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));
        let _ = store.resolve(None, at(45));

        // Pruned at 10:45; a handler still holding the id recreates it.
        store.with(id, at(45), |data| data.random_play.record(3, true));

        let (kept, is_new) = store.resolve(Some(id), at(50));
        assert_eq!(kept, id);
        assert!(!is_new);
        let (_, is_new) = store.resolve(Some(id), at(50) + TimeDelta::minutes(31));
        assert!(is_new);
    }

    #[test]
    fn test_flashes_are_taken_once() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));
        let session = Session {
            id,
            now: at(0),
            store,
        };

        session.flash(FlashKind::Success, "Quiz created successfully.");
        session.flash(FlashKind::Error, "second");

        let flashes = session.take_flashes();
        assert_eq!(flashes.len(), 2);
        assert_eq!(flashes[0].kind, FlashKind::Success);
        assert!(session.take_flashes().is_empty());
    }

    #[test]
    fn test_random_play_progress_round_trips_through_session() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));
        let session = Session {
            id,
            now: at(0),
            store,
        };
        let mut progress = session.random_play();
        progress.record(5, true);

        session.set_random_play(progress);

        assert_eq!(session.random_play().answered(), [5]);
    }

    #[test]
    fn test_concurrent_progress_writes_keep_the_last_one() {
        let store = SessionStore::new(TimeDelta::minutes(30));
        let (id, _) = store.resolve(None, at(0));
        let first_tab = Session {
            id,
            now: at(0),
            store: store.clone(),
        };
        let second_tab = first_tab.clone();
        let mut left = first_tab.random_play();
        let mut right = second_tab.random_play();
        left.record(1, true);
        right.record(2, true);

        first_tab.set_random_play(left);
        second_tab.set_random_play(right);

        assert_eq!(first_tab.random_play().answered(), [2]);
    }

    #[test]
    fn test_session_id_is_read_from_cookie_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; other=1")).unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_malformed_session_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("quiz.sid=not-a-uuid"));

        assert_eq!(session_id_from_headers(&headers), None);
    }
}
