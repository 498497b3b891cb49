use anyhow::Result;
use codercat_server::application::{
    notifications::NotificationSettings,
    ports::{MailSenderPort, TemplateRendererPort},
    services::ApplicationServices,
};
use codercat_server::config::AppConfig;
use codercat_server::domain::{post::PostRepository, subscriber::SubscriberRepository};
use codercat_server::infrastructure::{
    database,
    mail::{NoopMailSender, SmtpMailSender, SmtpSettings},
    repositories::{MongoPostRepository, MongoSubscriberRepository},
    templates::AskamaTemplateRenderer,
};
use codercat_server::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let database = database::connect(config.mongo_uri(), config.database_name()).await?;
    tracing::info!(database = %config.database_name(), "connected to MongoDB");

    let post_repo: Arc<dyn PostRepository> = Arc::new(MongoPostRepository::new(
        &database,
        config.posts_collection(),
    ));
    let subscriber_repo: Arc<dyn SubscriberRepository> = Arc::new(
        MongoSubscriberRepository::new(&database, config.subscribers_collection()),
    );

    let renderer: Arc<TemplateRendererPort> = Arc::new(AskamaTemplateRenderer);
    let mailer = build_mailer(&config)?;

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        subscriber_repo,
        renderer,
        mailer,
        NotificationSettings {
            base_url: config.base_url().to_string(),
            send_timeout: config.notification_timeout(),
        },
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_mailer(config: &AppConfig) -> Result<Arc<MailSenderPort>> {
    if config.smtp_email().is_empty() {
        tracing::warn!("SMTP_EMAIL not set, new post announcements will be dropped");
        return Ok(Arc::new(NoopMailSender));
    }

    let sender = SmtpMailSender::new(&SmtpSettings {
        host: config.smtp_host().to_string(),
        port: config.smtp_port(),
        from: config.smtp_email().to_string(),
        password: config.smtp_password().to_string(),
    })?;
    Ok(Arc::new(sender))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,mongodb=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
