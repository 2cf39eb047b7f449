mod common;

use serde_json::Value;

#[tokio::test]
async fn test_list_empty() {
    let (state, _repository) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/api/url/allURLs").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["urls"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_most_recent_first() {
    let (state, _repository) = common::create_test_state();
    let server = common::test_server(state);

    for (url, id) in [("a.com", "first"), ("b.com", "second"), ("c.com", "third")] {
        common::shorten(&server, common::shorten_body(url, Some(id))).await;
    }

    let response = server.get("/api/url/allURLs").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let urls = json["urls"].as_array().unwrap();
    assert_eq!(urls.len(), 3);

    let ids: Vec<&str> = urls.iter().map(|u| u["shortid"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_list_item_fields() {
    let (state, repository) = common::create_test_state();
    let server = common::test_server(state);

    common::create_test_mapping(&repository, "fields", "https://example.com/x").await;

    let json = server.get("/api/url/allURLs").await.json::<Value>();
    let item = &json["urls"][0];

    assert_eq!(item["shortid"], "fields");
    assert_eq!(item["originalUrl"], "https://example.com/x");
    assert!(item["createdAt"].is_string());
}
