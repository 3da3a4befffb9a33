use fixture_persistence_sqlite::{create_db_pool, create_schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = std::env::var("FIXTURE_DB").unwrap_or_else(|_| "events.db".to_string());
    if let Some(parent) = std::path::Path::new(&db_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory for events DB");
        println!(
            "Created parent directory for events DB at {}",
            parent.display()
        );
    }

    let pool = create_db_pool(&db_path)
        .await
        .expect("Failed to open events DB");
    create_schema(&pool)
        .await
        .expect("Failed to create events table");

    println!("Events table ready in {}", db_path);
}
