use rocket::{config::Config as RocketCfg, Rocket, Route};

use flipvid_core::{entities::Phase, repositories::UserRepo as _};

mod frontend;
mod guards;
mod sqlite;


/// The course structure, loaded once from the remote manifest at
/// startup and shared with every request.
pub struct Catalog(pub Vec<Phase>);

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    catalog: Catalog,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let video_count: usize = catalog
        .0
        .iter()
        .flat_map(|phase| &phase.topics)
        .map(|topic| topic.videos.len())
        .sum();
    let user_count = db
        .shared()
        .and_then(|db| Ok(db.count_users()?))
        .unwrap_or_default();
    info!(
        "Serving {} phases with {video_count} videos to {user_count} registered users",
        catalog.0.len()
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(catalog);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, catalog: Vec<Phase>) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let instance = rocket_instance(options, db, Catalog(catalog));
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
