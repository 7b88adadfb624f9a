use chrono::TimeZone;
use jobfeed::feed::parse_feed;
use jobfeed::models::{Config, Posting};
use jobfeed::pipeline::{Escalator, StopReason, run_feed};
use jobfeed::services::{
    DetailProvider, ListingSource, RenderedPageProvider, WorkdayClient, WorkdayDetailProvider,
    discover_endpoint,
};
use jobfeed::storage::{FeedStore, LocalFeedStore};
use jobfeed::utils::http::create_client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOBS_PATH: &str = "/wday/cxs/unhcr/External/jobs";

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.source.origin = server.uri();
    config.source.base_url = format!("{}/en-GB/External", server.uri());
    config.source.known_endpoint = format!("{}{}", server.uri(), JOBS_PATH);
    config.source.discovery_urls = vec![format!("{}/en-GB/External", server.uri())];
    config.feed.link = config.source.base_url.clone();
    config.http.request_delay_ms = 0;
    config
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), JOBS_PATH)
}

fn posting(path: &str) -> Posting {
    Posting {
        title: "Senior Officer".to_string(),
        external_path: path.to_string(),
        ..Posting::default()
    }
}

#[tokio::test]
async fn listing_page_is_posted_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .and(body_json(json!({
            "limit": 20,
            "offset": 40,
            "searchText": "",
            "appliedFacets": {},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 41,
            "jobPostings": [{
                "title": "Protection Officer",
                "externalPath": "/job/Amman/Protection-Officer_JR2",
                "locationsText": "Amman",
                "bulletFields": ["JR2"],
                "postedOn": "Posted Today"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = create_client(&config).unwrap();
    let listing = WorkdayClient::new(client, endpoint(&server));

    let page = listing.fetch_page(40, 20).await.unwrap();
    assert_eq!(page.total, 41);
    assert_eq!(page.job_postings.len(), 1);
    assert_eq!(page.job_postings[0].location(), "Amman");
    assert_eq!(page.job_postings[0].bullet_fields, vec!["JR2".to_string()]);
}

#[tokio::test]
async fn listing_error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let listing = WorkdayClient::new(create_client(&config).unwrap(), endpoint(&server));

    assert!(listing.fetch_page(0, 20).await.is_err());
}

#[tokio::test]
async fn structured_detail_joins_description_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wday/cxs/unhcr/External/job/Geneva/Officer_JR1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobPostingInfo": {
                "jobDescription": "<p>Grade: <b>P-3</b></p><script>x()</script>",
                "additionalInformation": "Fixed Term",
                "jobReqSubCategory": {"descriptor": "Protection"},
                "workerSubType": null
            }
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider =
        WorkdayDetailProvider::new(create_client(&config).unwrap(), endpoint(&server));

    let text = provider
        .detail_text(&posting("/job/Geneva/Officer_JR1"), "unused")
        .await
        .unwrap()
        .unwrap();
    assert!(text.contains("Grade: P-3"));
    assert!(text.contains("Fixed Term"));
    assert!(text.contains("Protection"));
    assert!(!text.contains("x()"));
}

#[tokio::test]
async fn structured_detail_missing_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider =
        WorkdayDetailProvider::new(create_client(&config).unwrap(), endpoint(&server));

    let text = provider
        .detail_text(&posting("/job/Geneva/Gone_JR9"), "unused")
        .await
        .unwrap();
    assert!(text.is_none());
}

#[tokio::test]
async fn rendered_page_keeps_visible_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-GB/External/job/Geneva/Officer_JR1"))
        .and(header("accept", "text/html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>Head of Office (D1)</title><style>p{}</style></head>\
             <body><h1>Head of Office</h1>\n<p>  Position grade D-1 </p>\
             <script>var grade = 'G-4';</script></body></html>",
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let provider = RenderedPageProvider::new(create_client(&config).unwrap());
    let url = format!("{}/en-GB/External/job/Geneva/Officer_JR1", server.uri());

    let text = provider
        .detail_text(&posting("/job/Geneva/Officer_JR1"), &url)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(text, "Head of Office (D1) Head of Office Position grade D-1");
}

#[tokio::test]
async fn endpoint_is_discovered_from_career_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-GB/External"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><script>window.workday = {"cxs": "/wday/cxs/acme/Careers/jobs"};</script></html>"#,
            "text/html",
        ))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = create_client(&config).unwrap();

    let found = discover_endpoint(&client, &config.source).await;
    assert_eq!(found, format!("{}/wday/cxs/acme/Careers/jobs", server.uri()));
}

#[tokio::test]
async fn discovery_falls_back_to_known_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = create_client(&config).unwrap();

    let found = discover_endpoint(&client, &config.source).await;
    assert_eq!(found, config.source.known_endpoint);
}

#[tokio::test]
async fn run_escalates_to_detail_and_writes_feed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "jobPostings": [
                {"title": "Head of Sub-Office", "externalPath": "/job/Kabul/Head_JR1", "locationsText": "Kabul"},
                {"title": "Senior Driver G-4", "externalPath": "/job/Kabul/Driver_JR2"},
                {"title": "Associate Officer P2", "externalPath": "/job/Rome/Associate_JR3", "postedOn": "2026-10-01"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wday/cxs/unhcr/External/job/Kabul/Head_JR1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobPostingInfo": {"jobDescription": "<p>Grade: P5</p>"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = create_client(&config).unwrap();
    let listing = WorkdayClient::new(client.clone(), endpoint(&server));
    let providers: Vec<Box<dyn DetailProvider>> = vec![
        Box::new(WorkdayDetailProvider::new(client.clone(), endpoint(&server))),
        Box::new(RenderedPageProvider::new(client)),
    ];
    let escalator = Escalator::new(providers);

    let dir = tempfile::tempdir().unwrap();
    let store = LocalFeedStore::new(dir.path().join("feed.xml"));
    let now = chrono::Utc
        .with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .unwrap()
        .fixed_offset();

    let summary = run_feed(&config, &listing, &escalator, &store, now)
        .await
        .unwrap();
    assert_eq!(summary.stop, StopReason::EndOfListing);
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.included, 2);

    let xml = store.read().await.unwrap().unwrap();
    let feed = parse_feed(&xml, "").unwrap();
    let links: Vec<_> = feed.items.iter().map(|i| i.link.clone()).collect();
    assert_eq!(
        links,
        vec![
            format!("{}/en-GB/External/job/Kabul/Head_JR1", server.uri()),
            format!("{}/en-GB/External/job/Rome/Associate_JR3", server.uri()),
        ]
    );
    assert!(feed.items[0].description.contains("Grade: P-5."));
    assert!(feed.items[0].description.contains("Location: Kabul."));
    assert_eq!(feed.items[1].pub_date, "Thu, 1 Oct 2026 00:00:00 +0000");
}
