//! AWS Lambda host for the redirect handler.
//!
//! Works behind a Lambda function URL or an API Gateway HTTP API. Request
//! handling lives in [`url_redirector::lambda`].
//!
//! # Environment Variables
//!
//! Same as the HTTP server (see `url_redirector::config`). `LISTEN` is ignored.

use std::sync::Arc;

use lambda_http::{Error, Request, run, service_fn};
use url_redirector::application::services::RedirectService;
use url_redirector::lambda::function_handler;
use url_redirector::{config, server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format, false);
    config.print_summary();

    let service: Arc<RedirectService> = server::build_redirect_service(&config).await;

    run(service_fn(move |event: Request| {
        let service = service.clone();
        async move { function_handler(&service, event).await }
    }))
    .await
}
