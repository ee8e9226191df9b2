mod config;

use actix_cors::Cors;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ushiro_core::{Humanizer, Levels};
use config::ServerConfig;

/// Body returned by the readiness probe.
const STATUS_MESSAGE: &str = "Ushiro-Brain is awake! 🧠";

/// Body of a `POST /humanize` request.
///
/// Both levels default to 0.5 when omitted.
#[derive(Serialize, Deserialize)]
struct HumanizeRequest {
	text: String,
	#[serde(flatten)]
	levels: Levels,
}

#[derive(Serialize, Deserialize)]
struct HumanizeResponse {
	result: String,
}

#[derive(Serialize, Deserialize)]
struct StatusResponse {
	status: String,
}

/// HTTP GET endpoint `/`
///
/// Readiness probe, always answers with the status message.
#[get("/")]
async fn get_status() -> impl Responder {
	HttpResponse::Ok().json(StatusResponse { status: STATUS_MESSAGE.to_owned() })
}

/// HTTP POST endpoint `/humanize`
///
/// Rewrites the submitted text. Malformed bodies are rejected by the JSON
/// extractor with a 400; past that point the handler cannot fail.
#[post("/humanize")]
async fn post_humanize(data: web::Data<Humanizer>, request: web::Json<HumanizeRequest>) -> impl Responder {
	let result = data.humanize(&request.text, &request.levels);
	HttpResponse::Ok().json(HumanizeResponse { result })
}

/// Installs the tracing subscriber, filtered by `USHIRO_LOG` (default `info`).
///
/// Also captures `log` records, which is where actix's request logger writes.
fn init_logging() {
	let filter = EnvFilter::try_from_env("USHIRO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_target(false))
		.with(filter)
		.try_init();
}

fn cors(config: &ServerConfig) -> Cors {
	if config.allows_any_origin() {
		return Cors::permissive();
	}
	config
		.allowed_origins
		.iter()
		.fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
		.allow_any_method()
		.allow_any_header()
		.supports_credentials()
}

/// Main entry point for the server.
///
/// Loads the configuration, builds the humanizer once and serves it to
/// every worker through `web::Data`. The humanizer is immutable so no lock
/// is needed around it.
///
/// # Notes
/// - Binds to `host:port` from the configuration (127.0.0.1:5000 by default).
/// - A broken user dictionary does not stop the server; requests are then
///   echoed back unchanged.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	init_logging();

	let config = ServerConfig::load().map_err(|e| {
		error!("Invalid configuration: {e}");
		std::io::Error::other(e.to_string())
	})?;

	let humanizer = config.build_humanizer().map_err(|e| {
		error!("Failed to build rule tables: {e}");
		std::io::Error::other(e.to_string())
	})?;
	let humanizer = web::Data::new(humanizer);

	info!("Listening on {}:{}", config.host, config.port);
	let bind = (config.host.clone(), config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors(&config))
			.app_data(humanizer.clone())
			.service(get_status)
			.service(post_humanize)
	})
		.bind(bind)?
		.run()
		.await
}
