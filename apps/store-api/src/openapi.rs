//! OpenAPI documentation configuration

use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mens Aesthetic Store API",
        version = "0.1.0",
        description = "Catalog and checkout backend for the Mens Aesthetic store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::api::root::root,
        crate::api::diagnostics::diagnostics,
        crate::api::health::ready,
    ),
    components(schemas(
        crate::api::root::RootMessage,
        crate::api::diagnostics::DiagnosticsReport,
    )),
    modifiers(&DomainDocs),
    tags(
        (name = "Service", description = "Service status and diagnostics")
    )
)]
pub struct ApiDoc;

/// Folds the domain documents in; their paths are already absolute.
struct DomainDocs;

impl Modify for DomainDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::ApiDoc::openapi());
        openapi.merge(domain_orders::ApiDoc::openapi());
    }
}
