//! Public content endpoint behavior.

use std::sync::Arc;

use insight_site::config::SiteConfig;
use insight_site::content::model::{ContentBlock, PostDraft};
use insight_site::content::store::{ContentStore, MemoryStore};
use insight_site::i18n::Locale;

mod common;

fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .create(
            Locale::Ja,
            PostDraft {
                slug: "visa-guide".into(),
                title: "ビザガイド".into(),
                excerpt: "在留資格の概要".into(),
                main_image: "/images/visa.webp".into(),
                content_blocks: vec![
                    ContentBlock::HeadingH2 {
                        text: "概要".into(),
                    },
                    ContentBlock::Paragraph {
                        text: "本文".into(),
                    },
                ],
                categories: vec!["immigration".into()],
                tags: vec!["visa".into()],
                sources: None,
            },
        )
        .unwrap();
    store
        .create(
            Locale::En,
            PostDraft {
                slug: "housing".into(),
                title: "Housing in Japan".into(),
                excerpt: String::new(),
                main_image: String::new(),
                content_blocks: Vec::new(),
                categories: Vec::new(),
                tags: Vec::new(),
                sources: None,
            },
        )
        .unwrap();
    store
}

#[tokio::test]
async fn test_get_report_returns_full_post() {
    let (addr, _shutdown) = common::spawn_site_with_store(SiteConfig::default(), seeded_store()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/ja/report/visa-guide", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["title"], "ビザガイド");
    assert_eq!(body["content_blocks"][0]["type"], "heading_h2");
    assert_eq!(body["content_blocks"][0]["content"]["text"], "概要");
}

#[tokio::test]
async fn test_listing_is_locale_scoped() {
    let (addr, _shutdown) = common::spawn_site_with_store(SiteConfig::default(), seeded_store()).await;
    let client = common::client();

    let ja: serde_json::Value = client
        .get(format!("http://{}/ja/reports", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ja.as_array().unwrap().len(), 1);
    assert_eq!(ja[0]["slug"], "visa-guide");

    let en: serde_json::Value = client
        .get(format!("http://{}/en", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(en.as_array().unwrap().len(), 1);
    assert_eq!(en[0]["slug"], "housing");

    let ko: serde_json::Value = client
        .get(format!("http://{}/ko", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(ko.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_slug_is_404() {
    let (addr, _shutdown) = common::spawn_site_with_store(SiteConfig::default(), seeded_store()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/en/report/visa-guide", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_robots_points_at_sitemap() {
    let mut config = SiteConfig::default();
    config.site.base_url = "https://example.org".into();
    let (addr, _shutdown) = common::spawn_site(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/robots.txt", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("Sitemap: https://example.org/sitemap.xml"));
    assert!(body.contains("Disallow: /admin"));
}

#[tokio::test]
async fn test_sitemap_lists_locale_roots_and_posts() {
    let mut config = SiteConfig::default();
    config.site.base_url = "https://example.org/".into();
    let (addr, _shutdown) = common::spawn_site_with_store(config, seeded_store()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/sitemap.xml", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/xml");

    let body = res.text().await.unwrap();
    for root in ["/ja", "/en", "/ko"] {
        assert!(body.contains(&format!("<loc>https://example.org{root}</loc>")));
    }
    assert!(body.contains("<loc>https://example.org/ja/report/visa-guide</loc>"));
    assert!(body.contains("<loc>https://example.org/en/report/housing</loc>"));
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (addr, _shutdown) = common::spawn_site(SiteConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/ja", addr))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}
