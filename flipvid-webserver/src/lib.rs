#[macro_use]
extern crate log;

use flipvid_core::entities::Phase;
use flipvid_db_sqlite::Connections;

mod web;

pub async fn run(connections: Connections, catalog: Vec<Phase>) {
    web::run(connections.into(), catalog).await;
}
