#![deny(missing_docs)]

//! # Serve Command
//!
//! Hosts the generated document over HTTP with actix-web. The document is
//! generated again for every request.

use crate::error::CliResult;
use crate::generate::OnCollision;
use crate::manifest;
use actix_web::{dev::Server, App, HttpServer};
use avro_openapi_core::{generate_document_with, DocumentHandler, GeneratorOptions};
use log::info;
use std::net::TcpListener;
use std::path::PathBuf;

/// Arguments for the serve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Path to the manifest (YAML or JSON) listing routes and the template.
    #[clap(long, env = "AVRO_OPENAPI_MANIFEST")]
    pub manifest: PathBuf,

    /// Address to listen on.
    #[clap(long, default_value = "127.0.0.1:8080", env = "AVRO_OPENAPI_BIND")]
    pub bind: String,

    /// Route serving the document.
    #[clap(long, default_value = "/swagger.json", env = "AVRO_OPENAPI_PATH")]
    pub path: String,

    /// Handling of different records sharing a short name.
    #[clap(long, value_enum, default_value_t, env = "AVRO_OPENAPI_ON_COLLISION")]
    pub on_collision: OnCollision,
}

/// Builds the server on an already bound listener.
pub fn build_server(
    listener: TcpListener,
    handler: DocumentHandler,
    path: String,
) -> std::io::Result<Server> {
    Ok(HttpServer::new(move || App::new().service(handler.clone().resource(&path)))
        .listen(listener)?
        .run())
}

/// Executes the serve command, blocking until the server stops.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ServeArgs) -> CliResult<()> {
    let loaded = manifest::load(&args.manifest)?;
    let options: GeneratorOptions = args.on_collision.into();

    // Refuse to start with a manifest that can never produce a document.
    generate_document_with(&loaded.template, &loaded.routes, options)?;

    let handler = DocumentHandler::new(loaded.template, loaded.routes).with_options(options);
    let listener = TcpListener::bind(&args.bind)?;
    info!("Serving document at http://{}{}", args.bind, args.path);

    let server = build_server(listener, handler, args.path.clone())?;
    actix_web::rt::System::new().block_on(server)?;
    Ok(())
}
