//! Static host for the student registration frontend.
//!
//! The Trunk bundle is embedded at compile time (see `build.rs`) and served
//! from memory. Unknown paths fall back to `index.html` so client-side
//! navigation survives a reload. Student data lives in the external REST
//! backend; this process never talks to it.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const HOST: &str = "127.0.0.1";
const PORT: u16 = 8080;

/// Serves a file of `dir`, or its `index.html` for unknown paths.
fn embedded_response(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                warn!("no embedded bundle to serve {}", file_path);
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let url = format!("http://{}:{}", HOST, PORT);

    {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open a browser: {}", e);
            }
        });
    }

    info!("Serving the student registration app at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((HOST, PORT))?
        .run()
        .await
}
