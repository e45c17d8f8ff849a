use actix_files::Files;
use actix_web::{App, HttpServer, middleware};
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "./dist";

/// Port from `PORT`, falling back to the default on absence or parse failure
fn port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn dist_dir_from_env() -> String {
    env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let port = port_from_env();
    let dist_dir = dist_dir_from_env();

    log::info!("Serving {dist_dir} on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
