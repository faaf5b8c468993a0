#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        db::MemStore,
        routes,
        utils::{non_blank, normalize_currency_code, parse_f64, parse_id},
    };
    use actix_web::{http::StatusCode, test as actix_test, web::Data, App};
    use serde_json::{json, Value};

    macro_rules! test_app {
        () => {
            test_app!(Config::default())
        };
        ($config:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(Data::new(MemStore::init().await))
                    .app_data(Data::new($config))
                    .service(crate::home)
                    .configure(routes::init),
            )
            .await
        };
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("123.45").unwrap(), 123.45);
        assert_eq!(parse_f64(" 7 ").unwrap(), 7.0);
        assert!(parse_f64("abc").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("-1").is_err());
        assert!(parse_id("xyz").is_err());
    }

    #[test]
    fn test_currency_helpers() {
        assert_eq!(normalize_currency_code(" usdc "), "USDC");
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some("MXN".to_string())), Some("MXN".to_string()));
    }

    #[actix_web::test]
    async fn test_home() {
        let app = test_app!();
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_convert_usdc_to_mxn() {
        let app = test_app!();
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=usdc&to=MXN&amount=100&networkId=8453")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["from"], "USDC");
        assert_eq!(body["to"], "MXN");
        assert_eq!(body["amount"], 100.0);
        assert_eq!(body["result"], 1750.0);
        assert_eq!(body["rate"], 17.5);
        assert_eq!(body["networkId"], "8453");
        assert_eq!(body["fromAddress"], "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
        assert_eq!(body["toAddress"], "0xa411c9Aa00E020e4f88Bc19996d29c5B7ADB4ACf");
    }

    #[actix_web::test]
    async fn test_convert_defaults_network_and_omits_addresses() {
        let app = test_app!();
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USD&to=EURC&amount=50")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["networkId"], "8453");
        assert!(body.get("fromAddress").is_none());
        assert!(body.get("toAddress").is_none());
    }

    #[actix_web::test]
    async fn test_convert_uses_configured_default_network() {
        let app = test_app!(Config {
            default_network_id: "5000".to_string(),
            ..Config::default()
        });
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USDC&to=BRZ&amount=10")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["networkId"], "5000");
        assert_eq!(body["fromAddress"], "0x09Bc4E0D864854c6aFB6eB9A9cdF58aC190D0dF9");
        assert_eq!(body["toAddress"], "0x05539F021b66Fd01d1FB1ff8E167CdD09bf7c2D0");

        // EURC is only priced on 8453, so the fallback must not be 8453 here.
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USDC&to=EURC&amount=10")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unsupported currency pair for the selected network");
    }

    #[actix_web::test]
    async fn test_malformed_query_hides_extractor_details() {
        let app = test_app!();
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USD&to=MXN&amount=1&amount=2")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid query parameters");
    }

    #[actix_web::test]
    async fn test_convert_rejects_bad_amounts() {
        let app = test_app!();
        for (amount, message) in [
            ("0", "Invalid amount"),
            ("-5", "Invalid amount"),
            ("abc", "Invalid amount"),
            ("", "Missing required parameters: from, to, amount"),
        ] {
            let req = actix_test::TestRequest::get()
                .uri(&format!("/api/currency/convert?from=USD&to=MXN&amount={}", amount))
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "amount {:?}", amount);
            let body: Value = actix_test::read_body_json(resp).await;
            assert_eq!(body["error"], message);
        }
    }

    #[actix_web::test]
    async fn test_convert_network_errors_are_distinct() {
        let app = test_app!();

        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USD&to=MXN&amount=1&networkId=9999")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unsupported network");

        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USDC&to=EURC&amount=50&networkId=5000")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unsupported currency pair for the selected network");
    }

    #[actix_web::test]
    async fn test_convert_overflow_is_generic_500() {
        let app = test_app!();
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/convert?from=USD&to=MXN&amount=1e308")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to convert currency");
    }

    #[actix_web::test]
    async fn test_list_tokens() {
        let app = test_app!();
        let req = actix_test::TestRequest::get()
            .uri("/api/currency/tokens?networkId=5000")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let codes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["currency"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["BRZ", "USD", "USDC"]);
        assert!(body[1]["token"].is_null());
        assert_eq!(body[2]["token"]["decimals"], 6);

        let req = actix_test::TestRequest::get()
            .uri("/api/currency/tokens")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let try_entry = body
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["currency"] == "TRY")
            .unwrap();
        assert!(try_entry["rate"].is_null());

        let req = actix_test::TestRequest::get()
            .uri("/api/currency/tokens?networkId=1")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_transactions_flow() {
        let app = test_app!();

        let req = actix_test::TestRequest::get().uri("/api/transactions").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let req = actix_test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(json!({
                "type": "send",
                "amount": 50.5,
                "recipient": "Maria Lopez",
                "note": "Dinner",
                "currency": "mxn"
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(resp).await;
        assert_eq!(created["id"], 4);
        assert_eq!(created["status"], "pending");
        assert_eq!(created["currency"], "MXN");

        let req = actix_test::TestRequest::get().uri("/api/transactions").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["id"], 4);

        let req = actix_test::TestRequest::patch()
            .uri("/api/transactions/4/status")
            .set_json(json!({ "status": "completed" }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "completed");

        let req = actix_test::TestRequest::get().uri("/api/transactions/4").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["recipient"], "Maria Lopez");
    }

    #[actix_web::test]
    async fn test_transaction_errors() {
        let app = test_app!();

        let req = actix_test::TestRequest::get().uri("/api/transactions/abc").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid transaction ID");

        let req = actix_test::TestRequest::get().uri("/api/transactions/99").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(json!({ "type": "refund", "amount": 1, "recipient": "x" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = actix_test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(json!({ "type": "send", "amount": -3, "recipient": "x" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_contacts_flow() {
        let app = test_app!();

        for name in ["Zoe", "Ana"] {
            let req = actix_test::TestRequest::post()
                .uri("/api/contacts")
                .set_json(json!({ "name": name, "email": format!("{}@example.com", name) }))
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = actix_test::TestRequest::get().uri("/api/contacts").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["name"], "Ana");
        assert_eq!(body[1]["name"], "Zoe");
        assert_eq!(body[0]["userId"], 1);
        let ana_id = body[0]["id"].as_u64().unwrap();

        let req = actix_test::TestRequest::put()
            .uri(&format!("/api/contacts/{}", ana_id))
            .set_json(json!({ "favorite": true, "email": null }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["favorite"], true);
        assert!(body["email"].is_null());
        assert_eq!(body["name"], "Ana");

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/contacts/{}", ana_id))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/contacts/{}", ana_id))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::put()
            .uri("/api/contacts/nope")
            .set_json(json!({}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = actix_test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({ "name": "  " }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_preferences_and_stripe_connect() {
        let app = test_app!();

        let req = actix_test::TestRequest::get().uri("/api/user/preferences").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "sendCurrency": "USD",
                "receiveCurrency": "USD",
                "twoFactorEnabled": false,
                "stripeAccountId": null
            })
        );

        let req = actix_test::TestRequest::put()
            .uri("/api/user/preferences")
            .set_json(json!({ "stripeAccountId": "acct_mock123456", "sendCurrency": "mxn" }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["stripeAccountId"], "acct_mock123456");
        assert_eq!(body["sendCurrency"], "MXN");

        let req = actix_test::TestRequest::put()
            .uri("/api/user/preferences")
            .set_json(json!({ "stripeAccountId": null, "twoFactorEnabled": true }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert!(body["stripeAccountId"].is_null());
        assert_eq!(body["twoFactorEnabled"], true);
        assert_eq!(body["sendCurrency"], "MXN");

        let req = actix_test::TestRequest::put()
            .uri("/api/user/preferences")
            .set_json(json!({ "twoFactorEnabled": "yes" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
