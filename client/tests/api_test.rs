//! Integration tests against a mock API server.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use inkpost_client::id::{AddressId, BankAccountId, ObjectId, SettingId};
use inkpost_client::protocol::request::{
    AddressRequest, BankAccountRequest, BankAccountVerifyRequest, CheckRequest, JobRequest,
    ObjectRequest, ZipCodeRouteRequest,
};
use inkpost_client::protocol::Money;
use inkpost_client::{Client, Config, Error, ListOptions};

fn test_client(server: &MockServer) -> Client {
    let _ = tracing_subscriber::fmt::try_init();
    Client::new(Config::new("test_0dc8d51e0acffcb188").base_url(server.uri())).unwrap()
}

fn to_id() -> AddressId {
    AddressId::parse("adr_43769b47aed248c2").unwrap()
}

fn from_id() -> AddressId {
    AddressId::parse("adr_7f9ece71fbca3796").unwrap()
}

fn address_json(id: &str) -> serde_json::Value {
    json!({"id": id, "line1": "123 main st", "object": "address"})
}

#[tokio::test]
async fn create_job_returns_generated_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/jobs"))
        .and(body_string_contains("to=adr_43769b47aed248c2"))
        .and(body_string_contains("object=obj_7ca5f80b42b6dfca"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job_9f8e7d6c5b4a3f2e",
            "to": address_json("adr_43769b47aed248c2"),
            "from": address_json("adr_7f9ece71fbca3796"),
            "objects": [],
            "price": "2.50",
            "object": "job"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = JobRequest::builder()
        .to(to_id())
        .from(from_id())
        .object(ObjectId::parse("obj_7ca5f80b42b6dfca").unwrap())
        .build()
        .unwrap();

    let job = client.create_job(&request).await.unwrap();
    assert!(job.id.value().starts_with("job_"));
    assert_eq!(job.price.unwrap().amount, Decimal::new(250, 2));

    // API key travels as preemptive basic auth on the first request.
    let requests = server.received_requests().await.unwrap();
    let auth = requests[0].headers.get("authorization").unwrap();
    assert!(auth.to_str().unwrap().starts_with("Basic "));
}

#[tokio::test]
async fn list_jobs_passes_pagination_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .and(query_param("count", "1"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "count": 1,
            "data": [{
                "id": "job_9f8e7d6c5b4a3f2e",
                "to": address_json("adr_43769b47aed248c2"),
                "from": address_json("adr_7f9ece71fbca3796"),
                "object": "job"
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let list = client
        .list_jobs(ListOptions::new().count(1).offset(1))
        .await
        .unwrap();

    assert_eq!(list.object, "list");
    assert_eq!(list.count, 1);
    assert_eq!(list.get(0).unwrap().id.value(), "job_9f8e7d6c5b4a3f2e");
}

#[tokio::test]
async fn list_over_server_maximum_fails_with_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .and(query_param("count", "1000"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {
                "message": "count must be less than or equal to 100",
                "status_code": 422
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .list_jobs(ListOptions::new().count(1000))
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    match err {
        Error::Api {
            status,
            message,
            status_code,
        } => {
            assert_eq!(status, 422);
            assert!(message.contains("100"));
            assert_eq!(status_code, Some(422));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn bank_account_is_verified_only_after_verify() {
    let server = MockServer::start().await;

    let account = |verified: bool| {
        json!({
            "id": "bnk_7f9ece71fbca3796",
            "routing_number": "122100024",
            "account_number": "123456789",
            "signatory": "John Doe",
            "verified": verified,
            "object": "bank_account"
        })
    };

    Mock::given(method("POST"))
        .and(path("/v1/bank_accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(false)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/bank_accounts/bnk_7f9ece71fbca3796/verify"))
        .and(body_string_contains("amounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account(true)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = BankAccountRequest::builder()
        .name("Test account")
        .routing_number("122100024")
        .account_number("123456789")
        .bank_address(to_id())
        .account_address(to_id())
        .signatory("John Doe")
        .build()
        .unwrap();

    let created = client.create_bank_account(&request).await.unwrap();
    assert!(!created.verified);

    let verify = BankAccountVerifyRequest::builder()
        .id(created.id.clone())
        .amounts(20, 40)
        .build()
        .unwrap();
    let verified = client.verify_bank_account(&verify).await.unwrap();
    assert!(verified.verified);
    assert_eq!(verified.id, created.id);
}

#[tokio::test]
async fn check_amount_encodes_as_decimal_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/checks"))
        .and(body_string_contains("amount=20.00"))
        .and(body_string_contains("memo=rent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chk_1a2b3c4d5e6f7a8b",
            "amount": "20.00",
            "memo": "rent",
            "object": "check"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = CheckRequest::builder()
        .to(to_id())
        .bank_account(BankAccountId::parse("bnk_7f9ece71fbca3796").unwrap())
        .amount(Money::usd(Decimal::new(2000, 2)))
        .memo("rent")
        .build()
        .unwrap();

    let check = client.create_check(&request).await.unwrap();
    assert_eq!(check.amount.unwrap(), Money::usd(Decimal::new(2000, 2)));
}

#[tokio::test]
async fn object_upload_switches_to_multipart() {
    let file_path = std::env::temp_dir().join("inkpost-test-upload.pdf");
    std::fs::write(&file_path, b"%PDF-1.4 test fixture").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "obj_7ca5f80b42b6dfca",
            "object": "object"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ObjectRequest::builder()
        .name("myObject")
        .file_path(&file_path)
        .setting(SettingId::BLACK_AND_WHITE_DOCUMENT)
        .build()
        .unwrap();

    let object = client.create_object(&request).await.unwrap();
    assert_eq!(object.id.value(), "obj_7ca5f80b42b6dfca");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data"));
}

#[tokio::test]
async fn object_with_url_file_stays_urlencoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/objects"))
        .and(body_string_contains("setting=100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "obj_7ca5f80b42b6dfca",
            "object": "object"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ObjectRequest::builder()
        .file("https://cdn.example.com/goblue.pdf")
        .setting(SettingId::BLACK_AND_WHITE_DOCUMENT)
        .build()
        .unwrap();
    client.create_object(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert_eq!(
        content_type.to_str().unwrap(),
        "application/x-www-form-urlencoded"
    );
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("file=https"));
}

#[tokio::test]
async fn delete_address_returns_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/addresses/adr_43769b47aed248c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "adr_43769b47aed248c2",
            "deleted": true
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.delete_address(&to_id()).await.unwrap();
    assert_eq!(response.id, to_id());
    assert!(response.deleted);
}

#[tokio::test]
async fn inline_address_create_uses_flat_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/addresses"))
        .and(body_string_contains("line1="))
        .and(body_string_contains("name=eric"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(address_json("adr_43769b47aed248c2")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = AddressRequest::builder()
        .name("eric")
        .line1("123 main st")
        .city("san francisco")
        .build()
        .unwrap();

    let address = client.create_address(&request).await.unwrap();
    assert_eq!(address.id, to_id());
}

#[tokio::test]
async fn zip_code_routes_repeat_query_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/zip_code_routes"))
        .and(query_param("zip_codes[]", "48168"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "count": 1,
            "data": [{
                "zip_code": "48168",
                "routes": [{"route": "C001", "object": "route"}],
                "object": "zip_code_routes"
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ZipCodeRouteRequest::builder()
        .add_zip("48168")
        .add_zip("94158")
        .build()
        .unwrap();

    let list = client.list_zip_code_routes(&request).await.unwrap();
    assert_eq!(list.get(0).unwrap().zip_code, "48168");
}

#[tokio::test]
async fn non_json_error_body_degrades_gracefully() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.list_jobs(ListOptions::new()).await.unwrap_err();

    match err {
        Error::Api {
            status,
            message,
            status_code,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "unknown error");
            assert_eq!(status_code, None);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
