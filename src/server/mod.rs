use crate::error::json_error_handler;
use crate::rest::v1;
use crate::{db, Result};
use actix_web::dev::Service;
use actix_web::web::{scope, JsonConfig};
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use futures_util::future::FutureExt;
use time::OffsetDateTime;
use tracing::{info, warn};

pub async fn run() -> Result<()> {
    // All the worker threads are sharing a single connection pool
    let pool = db::pool()?;
    let conf = db::conf::queries::select(&pool).await?;
    info!(
        host = %conf.server_host,
        port = conf.server_port,
        "Starting server"
    );
    let json_limit = conf.json_limit_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
                        if res.status().is_server_error() {
                            warn!(req_method, req_path, res_status, res_time_sec);
                        } else if res_time_sec > 5.0 {
                            info!(req_method, req_path, res_status, res_time_sec);
                        }
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(Data::new(pool.clone()))
            .app_data(
                JsonConfig::default()
                    .limit(json_limit as usize)
                    .error_handler(json_error_handler),
            )
            .service(
                scope("v1")
                    .service(
                        scope("layers")
                            .service(v1::layers::get)
                            .service(v1::layers::post)
                            .service(v1::layers::get_map_data)
                            .service(v1::layers::get_by_id),
                    )
                    .service(
                        scope("catalogs")
                            .service(v1::catalogs::get)
                            .service(v1::catalogs::post)
                            .service(v1::catalogs::get_map_data)
                            .service(v1::catalogs::get_by_id),
                    )
                    .service(scope("zone-layers").service(v1::zone_layers::post)),
            )
    })
    .bind((conf.server_host.as_str(), conf.server_port))?
    .run()
    .await?;

    Ok(())
}
