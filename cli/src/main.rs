use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use roster::{ClubInfo, Credentials, NewPlayer, Player, PositionUpdate, Role};
use serde_json::Value;


const SESSION_COOKIE: &str = "session_token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; run `login` and set LINEUP_SESSION_TOKEN")]
    MissingSessionToken,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server answered HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("response carried no session cookie")]
    NoSessionCookie,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lineup-cli", about = "Lineup board API client")]
struct Cli {
    #[arg(long, env = "LINEUP_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "LINEUP_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    session_token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `/healthz`.
    Ping,
    /// Show the club name and categories.
    Club,
    /// Sign in and print the session token.
    Login {
        #[arg(long, env = "LINEUP_COACH_EMAIL")]
        email: String,
        #[arg(long, env = "LINEUP_COACH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current session.
    Logout,
    Players(PlayersCommand),
}

#[derive(Args, Debug)]
struct PlayersCommand {
    #[command(subcommand)]
    command: PlayersSubcommand,
}

#[derive(Subcommand, Debug)]
enum PlayersSubcommand {
    /// List the players of a category (club default when omitted).
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Add a player on the centre spot.
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        number: String,
        #[arg(long, default_value = "outfield", value_parser = parse_role)]
        role: Role,
    },
    /// Move a token, in percent of the pitch from its centre.
    Move {
        id: i64,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: normalize_base_url(&cli.base_url)?, session_token: cli.session_token };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Club => run_club(&ctx).await,
        Command::Login { email, password } => run_login(&ctx, Credentials { email, password }).await,
        Command::Logout => run_logout(&ctx).await,
        Command::Players(players) => run_players(&ctx, players).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let response = http_client(None)?.get(format!("{}/healthz", cli.base_url)).send().await?;
    check_status(response).await?;
    println!("ok");
    Ok(())
}

async fn run_club(cli: &CliContext) -> Result<(), CliError> {
    let response = http_client(None)?.get(format!("{}/api/club", cli.base_url)).send().await?;
    let club: ClubInfo = check_status(response).await?.json().await?;
    println!("{}", club.name);
    for category in &club.categories {
        let marker = if *category == club.default_category { "*" } else { " " };
        println!("{marker} {category}");
    }
    Ok(())
}

async fn run_login(cli: &CliContext, credentials: Credentials) -> Result<(), CliError> {
    let response = http_client(None)?
        .post(format!("{}/api/auth/sign-in", cli.base_url))
        .json(&credentials)
        .send()
        .await?;
    let response = check_status(response).await?;
    let token = session_token_from_headers(response.headers()).ok_or(CliError::NoSessionCookie)?;
    let coach: Value = response.json().await?;
    eprintln!("signed in as {}", coach.get("email").and_then(Value::as_str).unwrap_or("coach"));
    println!("{token}");
    Ok(())
}

async fn run_logout(cli: &CliContext) -> Result<(), CliError> {
    let token = cli.session_token.as_deref().ok_or(CliError::MissingSessionToken)?;
    let response = http_client(Some(token))?.post(format!("{}/api/auth/sign-out", cli.base_url)).send().await?;
    check_status(response).await?;
    eprintln!("signed out");
    Ok(())
}

async fn run_players(cli: &CliContext, players: PlayersCommand) -> Result<(), CliError> {
    match players.command {
        PlayersSubcommand::List { category, json } => {
            let mut request = http_client(None)?.get(format!("{}/api/players", cli.base_url));
            if let Some(category) = &category {
                request = request.query(&[("category", category)]);
            }
            let response = check_status(request.send().await?).await?;
            let rows: Vec<Player> = response.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for player in &rows {
                    println!("{}", format_player_line(player));
                }
            }
            Ok(())
        }
        PlayersSubcommand::Add { category, last_name, first_name, number, role } => {
            let body = NewPlayer { last_name, first_name, number, role, category };
            let response = authed(cli)?.post(format!("{}/api/players", cli.base_url)).json(&body).send().await?;
            let created: Player = check_status(response).await?.json().await?;
            println!("{}", format_player_line(&created));
            Ok(())
        }
        PlayersSubcommand::Move { id, x, y } => {
            let response = authed(cli)?
                .patch(format!("{}/api/players/{id}/position", cli.base_url))
                .json(&PositionUpdate { x, y })
                .send()
                .await?;
            let moved: Player = check_status(response).await?.json().await?;
            println!("{}", format_player_line(&moved));
            Ok(())
        }
        PlayersSubcommand::Delete { id } => {
            let response = authed(cli)?.delete(format!("{}/api/players/{id}", cli.base_url)).send().await?;
            check_status(response).await?;
            eprintln!("deleted player {id}");
            Ok(())
        }
    }
}

fn authed(cli: &CliContext) -> Result<reqwest::Client, CliError> {
    let token = cli.session_token.as_deref().ok_or(CliError::MissingSessionToken)?;
    http_client(Some(token))
}

fn http_client(session_token: Option<&str>) -> Result<reqwest::Client, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = session_token {
        headers.insert(COOKIE, HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}"))?);
    }
    Ok(reqwest::Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?)
}

/// Pass 2xx responses through; turn anything else into `CliError::Status`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CliError::Status { status: status.as_u16(), message: error_message(&body) })
}

/// Extract `error` from a JSON error body, else return the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(ToOwned::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(CliError::InvalidBaseUrl(raw.to_owned())),
    }
}

fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?.trim();
            let (name, value) = pair.split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_owned())
        })
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("unknown role {raw:?}; expected goalkeeper or outfield"))
}

fn format_player_line(player: &Player) -> String {
    let number = if player.number.is_empty() { "-" } else { player.number.as_str() };
    format!(
        "{:>5}  #{:<3} {:<24} {:<8} x={:>6.1} y={:>6.1}",
        player.id,
        number,
        player.label(),
        player.role.label(),
        player.x,
        player.y
    )
}
