use super::*;
use crate::web::tests::prelude::*;

fn setup() -> Client {
    crate::web::tests::setup(vec![("/", routes())])
}

fn json_body(res: LocalResponse) -> serde_json::Value {
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

mod coordinates {
    use super::*;

    #[test]
    fn extract_from_gpx() {
        let client = setup();
        let res = client
            .post("/coordinates?format=gpx")
            .body(TWO_POINTS_GPX)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        assert_eq!(Some(ContentType::JSON), res.content_type());
        assert_eq!(
            serde_json::json!([
                { "lat": 47.6062, "lng": -122.3321 },
                { "lat": 40.7128, "lng": -74.006 }
            ]),
            json_body(res)
        );
    }

    #[test]
    fn extract_from_tcx() {
        let client = setup();
        let res = client
            .post("/coordinates?format=TCX")
            .body(ONE_POINT_TCX)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        assert_eq!(
            serde_json::json!([{ "lat": 52.52, "lng": 13.405 }]),
            json_body(res)
        );
    }

    #[test]
    fn unsupported_format() {
        let client = setup();
        let res = client
            .post("/coordinates?format=kml")
            .body(TWO_POINTS_GPX)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
        let body = json_body(res);
        assert_eq!(400, body["http_status"]);
    }

    #[test]
    fn malformed_xml() {
        let client = setup();
        let res = client
            .post("/coordinates?format=gpx")
            .body("<gpx><trk></gpx>")
            .dispatch();
        assert_eq!(Status::UnprocessableEntity, res.status());
    }

    #[test]
    fn track_file_too_large() {
        let client = crate::web::tests::setup_with_cfg(
            vec![("/", routes())],
            crate::web::Cfg {
                max_upload_size: 16,
            },
        );
        let res = client
            .post("/coordinates?format=gpx")
            .body(TWO_POINTS_GPX)
            .dispatch();
        assert_eq!(Status::PayloadTooLarge, res.status());
    }

    #[test]
    fn download_csv() {
        let client = setup();
        let res = client
            .post("/coordinates.csv?format=gpx")
            .body(TWO_POINTS_GPX)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        assert_eq!(Some(ContentType::CSV), res.content_type());
        assert_eq!(
            Some("attachment; filename=\"coordinates.csv\""),
            res.headers().get_one("Content-Disposition")
        );
        assert_eq!(
            "Latitude,Longitude\n47.6062,-122.3321\n40.7128,-74.006\n",
            res.into_string().unwrap()
        );
    }
}

mod geocode {
    use super::*;

    #[test]
    fn found() {
        let client = setup();
        let res = client.get("/geocode?address=Seattle").dispatch();
        assert_eq!(Status::Ok, res.status());
        assert_eq!(
            serde_json::json!({ "lat": 47.6062, "lng": -122.3321 }),
            json_body(res)
        );
    }

    #[test]
    fn not_found() {
        let client = setup();
        let res = client.get("/geocode?address=Atlantis").dispatch();
        assert_eq!(Status::NotFound, res.status());
        let body = json_body(res);
        assert_eq!("Address not found", body["message"]);
    }

    #[test]
    fn empty_address() {
        let client = setup();
        let res = client.get("/geocode?address=%20").dispatch();
        assert_eq!(Status::BadRequest, res.status());
    }

    #[test]
    fn gateway_failure() {
        let client = setup();
        let res = client.get("/geocode?address=offline").dispatch();
        assert_eq!(Status::BadGateway, res.status());
    }

    #[test]
    fn geocoding_not_configured() {
        let client = setup();
        let res = client.get("/geocode?address=unconfigured").dispatch();
        assert_eq!(Status::ServiceUnavailable, res.status());
        assert_eq!(503, json_body(res)["http_status"]);
    }
}
