use common::config::Config;
use common::logger;
use seeder::seed::seed_all;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    logger::init_logger(&config.log_level, &config.log_file);

    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            log::error!("Failed to connect to database: {err}");
            std::process::exit(1);
        }
    };

    // The connection is closed on both paths before the process exits.
    let outcome = seed_all(&db).await;
    if let Err(err) = db.close().await {
        log::warn!("Failed to close database connection: {err}");
    }

    match outcome {
        Ok(summary) => print!("\n{summary}"),
        Err(err) => {
            log::error!("Seeding failed: {err}");
            std::process::exit(1);
        }
    }
}
