//! Single binary web server: JSON API over the tournament session.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT. Log level via RUST_LOG.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use football_tournament_web::config::ServerConfig;
use football_tournament_web::{
    DateId, ErrorKind, MatchId, MatchResult, MemoryStore, Session, TournamentConfig,
    TournamentError, TournamentId,
};
use serde::Deserialize;

/// Shared session over the in-memory store.
type AppState = Data<Session<MemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
}

#[derive(Deserialize)]
struct AddDateBody {
    name: String,
    teams: Vec<String>,
    #[serde(default)]
    config: TournamentConfig,
}

#[derive(Deserialize)]
struct AddMatchBody {
    team1: String,
    team2: String,
}

/// Scores are signed so that negative input reaches validation instead of failing to parse.
#[derive(Deserialize)]
struct SetResultBody {
    /// Derived from the score line when omitted.
    result: Option<MatchResult>,
    team1_score: i64,
    team2_score: i64,
}

#[derive(Deserialize)]
struct TiebreakerBody {
    teams: Vec<String>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and date id
#[derive(Deserialize)]
struct TournamentDatePath {
    id: TournamentId,
    date_id: DateId,
}

/// Path segments: tournament id and match id
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::Invariant | ErrorKind::Store => {
            log::error!("Request failed: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn respond<T: serde::Serialize>(result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// Tournament history, newest first.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    respond(state.list_tournaments())
}

/// Create a new tournament (no dates, no teams yet).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    respond(state.create_tournament(&body.name))
}

/// Get a tournament with all its dates (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.load_tournament(path.id))
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.delete_tournament(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// Add a date (matchday) with its teams and scoring config.
#[post("/api/tournaments/{id}/dates")]
async fn api_add_date(state: AppState, path: Path<TournamentPath>, body: Json<AddDateBody>) -> HttpResponse {
    respond(state.add_date(path.id, &body.name, &body.teams, body.config))
}

/// Generate the date's fixture, or replay its last block when every match is played.
#[post("/api/tournaments/{id}/dates/{date_id}/matches/generate")]
async fn api_generate_matches(state: AppState, path: Path<TournamentDatePath>) -> HttpResponse {
    respond(state.generate_matches(path.id, path.date_id))
}

/// Add a single match by hand.
#[post("/api/tournaments/{id}/dates/{date_id}/matches")]
async fn api_add_match(
    state: AppState,
    path: Path<TournamentDatePath>,
    body: Json<AddMatchBody>,
) -> HttpResponse {
    respond(state.add_match(path.id, path.date_id, &body.team1, &body.team2))
}

/// Close a date (all matches must be completed).
#[post("/api/tournaments/{id}/dates/{date_id}/close")]
async fn api_close_date(state: AppState, path: Path<TournamentDatePath>) -> HttpResponse {
    respond(state.close_date(path.id, path.date_id))
}

#[get("/api/tournaments/{id}/dates/{date_id}/standings")]
async fn api_date_standings(state: AppState, path: Path<TournamentDatePath>) -> HttpResponse {
    respond(state.date_standings(path.id, path.date_id))
}

/// Enter or correct a match result; responds with the recomputed tournament.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_set_match_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<SetResultBody>,
) -> HttpResponse {
    let result = body
        .result
        .unwrap_or_else(|| MatchResult::from_scores(body.team1_score, body.team2_score));
    respond(state.apply_result(
        path.id,
        path.match_id,
        result,
        body.team1_score,
        body.team2_score,
    ))
}

/// Decide the winner (or ask for a tiebreaker).
#[post("/api/tournaments/{id}/finalize")]
async fn api_finalize(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.finalize_tournament(path.id))
}

#[post("/api/tournaments/{id}/tiebreaker")]
async fn api_create_tiebreaker(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TiebreakerBody>,
) -> HttpResponse {
    respond(state.create_tiebreaker(path.id, &body.teams))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(Session::new(MemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_add_date)
            .service(api_generate_matches)
            .service(api_add_match)
            .service(api_close_date)
            .service(api_date_standings)
            .service(api_set_match_result)
            .service(api_finalize)
            .service(api_create_tiebreaker)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
