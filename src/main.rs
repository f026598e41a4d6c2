use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use mp3_bridge::application::services::ConversionService;
use mp3_bridge::infrastructure::audio::{FfmpegTranscoder, check_ffmpeg_binary};
use mp3_bridge::infrastructure::observability::{TracingConfig, init_tracing};
use mp3_bridge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    );
    init_tracing(&tracing_config, settings.server.port);

    let transcoder = Arc::new(FfmpegTranscoder::new(
        settings.transcoder.ffmpeg_path.clone(),
        settings.transcoder.timeout(),
    ));

    match check_ffmpeg_binary(transcoder.binary()).await {
        Ok(version) => tracing::info!(version = %version, "ffmpeg available"),
        Err(e) => tracing::warn!(
            error = %e,
            binary = %transcoder.binary().display(),
            "ffmpeg not usable; conversions will fail until it is installed"
        ),
    }

    let mut conversion_service = ConversionService::new(Arc::clone(&transcoder));
    if let Some(temp_dir) = &settings.transcoder.temp_dir {
        tokio::fs::create_dir_all(temp_dir)
            .await
            .with_context(|| format!("Failed to create temp dir {}", temp_dir.display()))?;
        conversion_service = conversion_service.with_temp_root(temp_dir.clone());
    }

    let state = AppState {
        conversion_service: Arc::new(conversion_service),
        expose_transcoder_errors: settings.transcoder.expose_errors,
        max_body_bytes: settings.server.max_body_bytes,
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
