#![deny(missing_docs)]

//! # HTTP Handler
//!
//! Wraps the document assembler in an actix-web handler. Every request
//! generates the document from scratch and answers with it as JSON; a failed
//! generation answers with the error instead and never with a partial document.

use crate::error::{AppError, AppResult};
use crate::oas::{generate_document_with, GeneratorOptions, RouteMap};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Resource, ResponseError};
use log::{debug, error};
use serde_json::Value;
use std::future::{ready, Ready};
use std::sync::Arc;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Template and routes shared by every request.
#[derive(Debug, Clone)]
pub struct DocumentHandler {
    template: Arc<Value>,
    routes: Arc<RouteMap>,
    options: GeneratorOptions,
}

impl DocumentHandler {
    /// Creates a handler with default options.
    pub fn new(template: Value, routes: RouteMap) -> Self {
        Self {
            template: Arc::new(template),
            routes: Arc::new(routes),
            options: GeneratorOptions::default(),
        }
    }

    /// Sets the generation options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generates the document and wraps it in a `200` JSON response.
    pub fn respond(&self) -> AppResult<HttpResponse> {
        let document = generate_document_with(&self.template, &self.routes, self.options)
            .inspect_err(|e| error!("Document generation failed: {}", e))?;
        Ok(HttpResponse::Ok().json(document))
    }

    /// Turns the handler into an actix-web request handler.
    pub fn into_handler(
        self,
    ) -> impl Fn(HttpRequest) -> Ready<AppResult<HttpResponse>> + Clone + Send + 'static {
        move |req: HttpRequest| {
            debug!("Serving document for {}", req.path());
            ready(self.respond())
        }
    }

    /// Mounts the handler as `GET <path>`.
    pub fn resource(self, path: &str) -> Resource {
        web::resource(path).route(web::get().to(self.into_handler()))
    }
}

/// Returns a request handler that serves the document generated from
/// `template` and `routes`.
///
/// # Arguments
///
/// * `template` - A JSON object (or `null`) merged over the generated document.
/// * `routes` - Route name to parsed schema.
pub fn generate_v2(
    template: Value,
    routes: RouteMap,
) -> impl Fn(HttpRequest) -> Ready<AppResult<HttpResponse>> + Clone + Send + 'static {
    DocumentHandler::new(template, routes).into_handler()
}
