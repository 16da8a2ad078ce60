use std::sync::OnceLock;

use car_match_api::{observability::init_tracing, AppConfig, MatchHandler};
use reqwest::Client;
use vercel_runtime::{run, Body, Error, Request, Response};

static HTTP: OnceLock<Client> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing("car-match", "info");
    let _ = HTTP.set(Client::builder().build()?);
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let http = HTTP.get().cloned().ok_or("HTTP client not initialized")?;
    let matcher = MatchHandler::new(AppConfig::from_env(), http);
    let resp = matcher.handle(req.method().as_str(), req.body()).await;
    Ok(resp.into_response()?)
}
