use fairway_odds::args;
use fairway_odds::cache::SourceCache;
use fairway_odds::controller::feeds::{FeedClient, FeedService};
use fairway_odds::controller::table::odds_table;
use fairway_odds::mvu::runtime::SharedModel;
use fairway_odds::mvu::table::TableModel;
use fairway_odds::storage::SqliteStore;
use fairway_odds::view;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use std::sync::Arc;
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let (args, region) = args::args_checks();

    let store = match SqliteStore::open(&args.cache_db) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("cannot open cache db {}: {e}", args.cache_db.display());
            std::process::exit(1);
        }
    };
    let cache = SourceCache::new(Arc::new(store));
    let client = FeedClient::new(args.feed_base_url.clone())?;
    let feeds = FeedService::new(client, cache);
    let model: SharedModel = Arc::new(RwLock::new(TableModel::new(region)));

    let bind_addr = (args.bind.clone(), args.port);
    let static_dir = args.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(model.clone()))
            .app_data(Data::new(feeds.clone()))
            .route("/", web::get().to(index))
            .route("/odds", web::get().to(odds_table))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await?;
    Ok(())
}

async fn index(model: Data<SharedModel>) -> impl Responder {
    let m = model.read().await;
    let markup = view::index::render_index_template(&m);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
