use std::process::ExitCode;
use std::time::Duration;

use ptlist_core::{ErrorResponse, PtListResponse, compute_series_from_strings};
use salvo::conn::TcpListener;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Listener, Request, Response, Router, Server, handler};
use tracing::{debug, info, warn};

use crate::cli::ServeArgs;
use crate::config::ServerConfig;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub fn run_serve(args: ServeArgs) -> CliResult<ExitCode> {
    let config = ServerConfig::load(&args.env_file, args.port.as_deref())
        .map_err(|e| CliError::input(format!("{:#}", e)))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(serve(config))?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn routes() -> Router {
    Router::with_path("ptlist").get(get_ptlist)
}

async fn serve(config: ServerConfig) -> CliResult<()> {
    let bind_addr = config.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone())
        .try_bind()
        .await
        .map_err(|e| CliError::runtime(format!("Failed to bind {}: {}", bind_addr, e)))?;

    let server = Server::new(acceptor);
    let handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, draining connections");
        handle.stop_graceful(Some(SHUTDOWN_GRACE));
    });

    info!("Server listening on {bind_addr}");
    server.serve(routes()).await;
    info!("Server stopped");

    Ok(())
}

/// `GET /ptlist?period=&tz=&t1=&t2=`
///
/// Responds with `{"timestamps":[...]}` on success.
/// Missing parameters are treated as empty strings and fail validation.
#[handler]
async fn get_ptlist(req: &mut Request, res: &mut Response) {
    let period = req.query::<String>("period").unwrap_or_default();
    let tz = req.query::<String>("tz").unwrap_or_default();
    let t1 = req.query::<String>("t1").unwrap_or_default();
    let t2 = req.query::<String>("t2").unwrap_or_default();
    debug!(%period, %tz, %t1, %t2, "ptlist request");

    match compute_series_from_strings(&period, &tz, &t1, &t2, None) {
        Ok(result) => {
            res.status_code(StatusCode::OK);
            res.render(Json(PtListResponse::from(result)));
        }
        Err(err) => {
            warn!(error = %err, code = err.code(), %period, %tz, %t1, %t2, "ptlist request failed");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::from(&err)));
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match (signal(SignalKind::terminate()), signal(SignalKind::quit())) {
            (Ok(mut term), Ok(mut quit)) => {
                tokio::select! {
                    _ = term.recv() => {},
                    _ = quit.recv() => {},
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
