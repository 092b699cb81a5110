use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use axum::Router;
use zonesweep_dns::{
    handlers::{DnsApiDoc, DnsAppState},
    CloudflareCredentials, CloudflareProvider, DnsProvider,
};
use zonesweep_static_files::{FileApiDoc, FileService};

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0:8080", env = "ZONESWEEP_ADDRESS")]
    pub address: String,

    /// Directory containing the built frontend
    #[arg(long, default_value = "./build", env = "ZONESWEEP_STATIC_DIR")]
    pub static_dir: PathBuf,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let credentials = CloudflareCredentials::from_env()?;
        let provider: Arc<dyn DnsProvider> = Arc::new(CloudflareProvider::new(credentials));

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(run(provider, self.address, self.static_dir))
    }
}

async fn run(
    provider: Arc<dyn DnsProvider>,
    address: String,
    static_dir: PathBuf,
) -> anyhow::Result<()> {
    let dns_state = Arc::new(DnsAppState { provider });
    let file_service = Arc::new(FileService::new(static_dir));

    // The frontend is served from a different origin during development,
    // so all API routes answer preflight requests permissively
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest(
            "/api",
            zonesweep_dns::handlers::configure_routes().with_state(dns_state),
        )
        .merge(swagger_router())
        .merge(zonesweep_static_files::configure_routes(file_service))
        .layer(cors);

    let listener = TcpListener::bind(&address).await?;
    info!("Zonesweep server listening on {}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

fn swagger_router() -> Router {
    let mut api_doc = DnsApiDoc::openapi();
    api_doc.merge(FileApiDoc::openapi());
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
}
