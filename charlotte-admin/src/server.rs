use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::config::build_config;
use crate::infrastructure::service_provider::ServiceProvider;
use crate::infrastructure::telemetry::initialize_telemetry;

pub fn run() {
    match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(async_run()),
        Err(e) => eprintln!("{}: {}", "Cannot build tokio runtime".red(), e),
    }
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build service provider".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(service_provider.config().telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    }

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host().clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _| api::ApiError::new(400, err.to_string()).into());

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(json_config)
            .app_data(web::Data::from(sp.clone()))
            .service(api::ticket_feedback::submit)
            .service(api::ticket_feedback::exists)
            .service(api::ticket_feedback::entries)
            .service(api::ticket::create)
            .service(api::ticket::list)
            .service(api::ticket::get)
            .service(api::ticket::history)
            .service(api::report::create)
            .service(api::report::list)
            .service(api::report::get)
            .service(api::report::close)
            .service(api::department::create)
            .service(api::department::update)
            .service(api::department::delete)
            .service(api::department::list)
            // `tree` is registered ahead of `get` so the literal segment
            // wins over the `{id}` match.
            .service(api::department::tree)
            .service(api::department::get)
            .service(api::banner::create)
            .service(api::banner::update)
            .service(api::banner::delete)
            .service(api::banner::list)
            .service(api::banner::active)
            .service(api::favorite::add)
            .service(api::favorite::list)
            .service(api::favorite::remove)
            .service(api::notification::send)
            .service(api::notification::get)
    })
    .bind((host.bind_address().as_str(), *host.bind_port()));

    match server {
        Ok(server) => {
            info!("Web server listening on {}:{}", host.bind_address(), host.bind_port());
            if let Err(e) = server.run().await {
                error!("Web server exited: {e}");
            }
        }
        Err(e) => error!(
            "Cannot bind {}:{}: {e}",
            host.bind_address(),
            host.bind_port()
        ),
    }
}
