use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use snipbox::auth::ServerConfig;
use snipbox::db::establish_connection_pool;
use snipbox::repository::DieselRepository;
use snipbox::routes::snippets::{
    create_snippet, delete_snippet, get_snippet, list_snippets, patch_snippet, update_snippet,
};
use snipbox::routes::tags::{get_tag, list_tags};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = match env::var("SECRET_KEY") {
        Ok(secret) => secret,
        Err(_) => {
            log::error!("SECRET_KEY environment variable not set");
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig { secret };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_snippets)
            .service(create_snippet)
            .service(get_snippet)
            .service(update_snippet)
            .service(patch_snippet)
            .service(delete_snippet)
            .service(list_tags)
            .service(get_tag)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
