#![deny(missing_docs)]

//! # Serve Command
//!
//! Hosts a generated document over HTTP: an interactive documentation page
//! at the mount path and the raw JSON at `<mount>/openapi.json`.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer, Responder, Scope};
use schemadoc_core::AppResult;
use serde_json::Value;

use crate::generate::{build_document, load_options};

/// Arguments for the serve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Spec file, or directory of specs, to merge and serve.
    #[clap(short, long)]
    pub input: PathBuf,

    /// Mount path of the documentation page.
    #[clap(long, default_value = "/api-docs")]
    pub mount: String,

    /// Address to bind.
    #[clap(long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Serve Swagger 2.0 instead of OpenAPI 3.
    #[clap(long)]
    pub swagger2: bool,

    /// Generator options file.
    #[clap(long, env = "SCHEMADOC_CONFIG")]
    pub config: Option<PathBuf>,
}

struct DocsState {
    document: Arc<Value>,
    spec_url: String,
}

/// Normalizes a mount path to `/segment` form; `/` maps to the root scope.
fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// The documentation routes for `document` under `mount`.
pub fn docs_scope(mount: &str, document: Arc<Value>) -> Scope {
    let mount = normalize_mount(mount);
    let state = DocsState {
        document,
        spec_url: format!("{}/openapi.json", mount),
    };

    web::scope(&mount)
        .app_data(web::Data::new(state))
        .route("", web::get().to(docs_page))
        .route("/", web::get().to(docs_page))
        .route("/openapi.json", web::get().to(raw_document))
}

async fn raw_document(state: web::Data<DocsState>) -> impl Responder {
    HttpResponse::Ok().json(state.document.as_ref())
}

async fn docs_page(state: web::Data<DocsState>) -> impl Responder {
    let title = state
        .document
        .pointer("/info/title")
        .and_then(Value::as_str)
        .unwrap_or("API");

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(title, &state.spec_url))
}

fn render_page(title: &str, spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{spec_url}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##,
        title = escape_html(title),
        spec_url = spec_url
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Executes the serve command. Blocks until the server stops.
pub fn execute(args: &ServeArgs) -> AppResult<()> {
    let options = load_options(args.config.as_deref(), None, None)?;
    let document = Arc::new(build_document(&args.input, options, args.swagger2)?);
    let mount = args.mount.clone();

    println!(
        "Serving documentation at http://{}{}",
        args.bind,
        normalize_mount(&mount)
    );

    let bind = args.bind.clone();
    actix_rt::System::new().block_on(async move {
        HttpServer::new(move || App::new().service(docs_scope(&mount, Arc::clone(&document))))
            .bind(bind)?
            .run()
            .await
    })?;

    Ok(())
}
