use crate::rest::{Envelope, RestResult as Res};
use crate::service;
use crate::zone::{OutputLayer, ZoneAssignment};
use actix_web::post;
use actix_web::web::{Data, Json};
use deadpool_sqlite::Pool;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostArgs {
    layer_ids: Vec<String>,
    #[serde(default)]
    zone_assignments: Vec<ZoneAssignment>,
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<Vec<OutputLayer>> {
    let layers =
        service::zone_layer::apply_zone_layers(&args.layer_ids, &args.zone_assignments, &pool)
            .await?;
    Ok(Envelope::json(layers))
}

#[cfg(test)]
mod test {
    use crate::db::test::pool;
    use crate::error::json_error_handler;
    use crate::rest::Envelope;
    use crate::service::layer::test::insert_layer;
    use crate::zone::{point, OutputLayer};
    use crate::Result;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data, JsonConfig};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[test]
    async fn post() -> Result<()> {
        let pool = pool();
        insert_layer(
            "malls",
            vec![
                point(46.0, 24.0, json!({ "rating": 1 })),
                point(47.0, 24.0, json!({ "rating": 3 })),
                point(48.0, 24.0, json!({ "rating": 5 })),
            ],
            &pool,
        )
        .await?;
        insert_layer(
            "cafes",
            vec![
                point(46.0, 24.01, json!({ "name": "a" })),
                point(47.0, 24.01, json!({ "name": "b" })),
                point(48.0, 24.01, json!({ "name": "c" })),
            ],
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "layer_ids": ["cafes", "malls"],
                "zone_assignments": [{ "layer_id": "malls", "property_key": "rating" }],
            }))
            .to_request();
        let res: Envelope<Vec<OutputLayer>> = test::call_and_read_body_json(&app, req).await;
        let counts: Vec<usize> = res.data.iter().map(|it| it.records_count).collect();
        assert_eq!(vec![1, 0, 0, 2], counts);
        assert_eq!("zymalls_applied_4", res.data[3].layer_id);
        assert_eq!("#0000FF", res.data[3].color);
        Ok(())
    }

    #[test]
    async fn post_without_zones() -> Result<()> {
        let pool = pool();
        insert_layer("cafes", vec![point(46.0, 24.0, json!({}))], &pool).await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({ "layer_ids": ["cafes"] }))
            .to_request();
        let res: Envelope<Vec<OutputLayer>> = test::call_and_read_body_json(&app, req).await;
        assert!(res.data.is_empty());
        Ok(())
    }

    #[test]
    async fn post_zone_not_requested() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool()))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "layer_ids": ["cafes"],
                "zone_assignments": [{ "layer_id": "malls", "property_key": "rating" }],
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let body: Value = test::read_body_json(res).await;
        assert_eq!("invalid_input", body["code"]);
        Ok(())
    }

    #[test]
    async fn post_empty_zone_layer() -> Result<()> {
        let pool = pool();
        insert_layer("malls", vec![], &pool).await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "layer_ids": ["malls"],
                "zone_assignments": [{ "layer_id": "malls", "property_key": "rating" }],
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
        Ok(())
    }

    #[test]
    async fn post_malformed_body() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool()))
                .app_data(JsonConfig::default().error_handler(json_error_handler))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({ "layers": "cafes" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let body: Value = test::read_body_json(res).await;
        assert_eq!("invalid_input", body["code"]);
        Ok(())
    }
}
