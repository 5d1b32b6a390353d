use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use contatto_server::{build_sqlite_url, connect_pool, routes, run_migrations, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger per i tracing::error emessi dagli handler
    tracing_subscriber::fmt::init();

    // Costruisci l'URL del database SQLite
    let db_url = build_sqlite_url().context("build sqlite DATABASE_URL")?;
    println!("Using DATABASE_URL = {}", db_url);
    // Connetti al database
    let pool = connect_pool(&db_url).await.context("connect to sqlite")?;
    // Esegui la migrazione del database
    run_migrations(&pool).await.context("run migrations")?;
    // Crea lo stato dell'applicazione condiviso
    let state = Arc::new(AppState { pool });

    // Directory dei file statici serviti dal fallback (index.html compreso)
    let static_dir =
        PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
    // Configura le rotte dell'applicazione
    let app = routes::router(state, &static_dir);

    // La porta di ascolto arriva da PORT, con default 3001
    let port: u16 = match std::env::var("PORT") {
        Ok(v) => v.parse().context("parse PORT")?,
        Err(_) => 3001,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Server is running on port {}", port);
    println!("Visit http://localhost:{} to view the website", port);
    // Crea il listener TCP e legalo all'indirizzo addr
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    // Avvia il server Axum: accetta connessioni e instrada le richieste col Router
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
