//! Single binary web server: JSON API for fixture generation and live tie-breakers.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, TIE_BREAKER_TTL_HOURS.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use sports_tournament_web::{
    advance_walkovers, advance_winner, generate_group_stage_fixtures, generate_knockout_fixtures,
    generate_round_robin_fixtures, parse_teams_csv, record_shootout_point, shuffle_teams, Fixture,
    FixtureId, Group, Side, Team, TieBreakerState,
};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-session entry: tie-breaker state + last activity time (for auto-cleanup).
struct TieBreakerEntry {
    state: TieBreakerState,
    last_activity: Instant,
}

/// In-memory tie-breaker sessions by id. Each one is driven by a single scoring client.
type AppState = Data<RwLock<HashMap<Uuid, TieBreakerEntry>>>;

/// Server settings from the environment.
struct ServerConfig {
    host: String,
    port: u16,
    /// Tie-breakers not touched for this long are removed.
    tie_breaker_ttl: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let ttl_hours = std::env::var("TIE_BREAKER_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or_else(default_ttl_hours);
        Self {
            host,
            port,
            tie_breaker_ttl: Duration::from_secs(ttl_hours.saturating_mul(3600)),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_ttl_hours() -> u64 {
    6
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct TieBreakerResponse<'a> {
    id: Uuid,
    state: &'a TieBreakerState,
}

#[derive(Deserialize)]
struct TeamsBody {
    teams: Vec<Team>,
}

#[derive(Deserialize)]
struct GroupsBody {
    groups: Vec<Group>,
}

#[derive(Deserialize)]
struct KnockoutBody {
    teams: Vec<Team>,
    /// Shuffle the teams before seeding the bracket.
    #[serde(default)]
    shuffle: bool,
    /// Move bye teams straight into round 2.
    #[serde(default)]
    advance_byes: bool,
}

#[derive(Deserialize)]
struct AdvanceBody {
    fixtures: Vec<Fixture>,
    fixture_id: FixtureId,
    winner_id: String,
}

#[derive(Deserialize)]
struct CreateTieBreakerBody {
    #[serde(default)]
    first_raider: Side,
}

#[derive(Deserialize)]
struct RaidBody {
    points: u8,
}

/// Path segment: tie-breaker id (e.g. /api/tie-breakers/{id})
#[derive(Deserialize)]
struct TieBreakerPath {
    id: Uuid,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tie-breaker" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "sports-tournament-web",
    })
}

/// Import teams from a CSV body (header row with `name` and optional `id`).
#[post("/api/teams/import")]
async fn api_import_teams(body: String) -> HttpResponse {
    match parse_teams_csv(body.as_bytes()) {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => bad_request(e),
    }
}

/// Round-robin league fixtures for one list of teams.
#[post("/api/fixtures/round-robin")]
async fn api_round_robin(body: Json<TeamsBody>) -> HttpResponse {
    match generate_round_robin_fixtures(&body.teams) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    }
}

/// Group stage: one round robin per group.
#[post("/api/fixtures/groups")]
async fn api_group_stage(body: Json<GroupsBody>) -> HttpResponse {
    match generate_group_stage_fixtures(&body.groups) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    }
}

/// Knockout bracket, optionally shuffled and with byes auto-advanced.
#[post("/api/fixtures/knockout")]
async fn api_knockout(body: Json<KnockoutBody>) -> HttpResponse {
    let KnockoutBody {
        mut teams,
        shuffle,
        advance_byes,
    } = body.into_inner();
    if shuffle {
        shuffle_teams(&mut teams);
    }
    let mut fixtures = match generate_knockout_fixtures(&teams) {
        Ok(f) => f,
        Err(e) => return bad_request(e),
    };
    if advance_byes {
        if let Err(e) = advance_walkovers(&mut fixtures) {
            return bad_request(e);
        }
    }
    HttpResponse::Ok().json(fixtures)
}

/// Record a knockout winner: returns the fixtures with the next fixture's slot filled.
#[post("/api/fixtures/advance")]
async fn api_advance_winner(body: Json<AdvanceBody>) -> HttpResponse {
    let AdvanceBody {
        mut fixtures,
        fixture_id,
        winner_id,
    } = body.into_inner();
    match advance_winner(&mut fixtures, fixture_id, &winner_id) {
        Ok(()) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    }
}

/// Start a tie-breaker (returns it with id; the scoring client keeps the id).
#[post("/api/tie-breakers")]
async fn api_create_tie_breaker(
    state: AppState,
    body: Option<Json<CreateTieBreakerBody>>,
) -> HttpResponse {
    let first_raider = body.map(|b| b.first_raider).unwrap_or_default();
    let tie_breaker = TieBreakerState::new(first_raider);
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(TieBreakerEntry {
        state: tie_breaker,
        last_activity: Instant::now(),
    });
    log::info!("Started tie-breaker {} ({:?} raids first)", id, first_raider);
    HttpResponse::Ok().json(TieBreakerResponse {
        id,
        state: &entry.state,
    })
}

/// Get a tie-breaker by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tie-breakers/{id}")]
async fn api_get_tie_breaker(state: AppState, path: Path<TieBreakerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(TieBreakerResponse {
                id: path.id,
                state: &entry.state,
            })
        }
        None => not_found(),
    }
}

/// Record one raid (shootout or golden raid) for the current raider.
#[post("/api/tie-breakers/{id}/raids")]
async fn api_record_raid(
    state: AppState,
    path: Path<TieBreakerPath>,
    body: Json<RaidBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match record_shootout_point(&mut entry.state, body.points) {
        Ok(()) => {
            if let Some(winner) = entry.state.winner() {
                log::info!("Tie-breaker {} complete: side {:?} wins", path.id, winner);
            }
            HttpResponse::Ok().json(TieBreakerResponse {
                id: path.id,
                state: &entry.state,
            })
        }
        Err(e) => bad_request(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<Uuid, TieBreakerEntry>::new()));

    // Background task: every 30 minutes, remove tie-breakers idle past the TTL
    let state_cleanup = state.clone();
    let ttl = config.tie_breaker_ttl;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} idle tie-breaker(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_import_teams)
            .service(api_round_robin)
            .service(api_group_stage)
            .service(api_knockout)
            .service(api_advance_winner)
            .service(api_create_tie_breaker)
            .service(api_get_tie_breaker)
            .service(api_record_raid)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
