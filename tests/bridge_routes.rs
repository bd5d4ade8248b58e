//! End-to-end tests against a running bridge.

use std::sync::atomic::Ordering;
use std::time::Duration;

use retroarch_bridge::BridgeConfig;

mod common;

#[tokio::test]
async fn test_play_page_over_http() {
    let bridge = common::spawn_bridge(BridgeConfig::default()).await;

    let res = common::client()
        .get(bridge.url("/play?core=nestopia_libretro&rom=%2Froms%2Fnes%2FMega%20Man%202.nes"))
        .send()
        .await
        .expect("bridge unreachable");

    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains(r#"const core = "nestopia_libretro";"#));
    assert!(body.contains(r#"const rom = "/roms/nes/Mega Man 2.nes";"#));
    assert!(body.contains(r#""http://localhost:8082/?rom=nes/Mega%20Man%202.nes&core=nes""#));

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_play_uses_configured_frontend() {
    let mut config = BridgeConfig::default();
    config.frontend.host = "arcade.example".into();
    config.frontend.port = 9000;
    let bridge = common::spawn_bridge(config).await;

    let body = common::client()
        .get(bridge.url("/play?core=gambatte_libretro&rom=roms/gb/Link's%20Awakening.gb"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains(
        r#""http://arcade.example:9000/?rom=gb/Link%27s%20Awakening.gb&core=gb""#
    ));

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_play_requires_both_params() {
    let bridge = common::spawn_bridge(BridgeConfig::default()).await;
    let client = common::client();

    for query in ["", "?core=snes9x_libretro", "?rom=%2Froms%2Fsnes%2Fa.sfc", "?foo=bar"] {
        let res = client
            .get(bridge.url(&format!("/play{}", query)))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400, "query {:?}", query);
        assert_eq!(res.text().await.unwrap(), "Missing core or rom parameter");
    }

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_health_ignores_downstream() {
    // Nothing listens on the configured front-end port.
    let mut config = BridgeConfig::default();
    config.frontend.port = 1;
    let bridge = common::spawn_bridge(config).await;
    let client = common::client();

    for path in ["/health", "/"] {
        let res = client.get(bridge.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.headers()["content-type"], "application/json");

        let json: serde_json::Value = res.json().await.unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok", "service": "retroarch-bridge"}));
    }

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let bridge = common::spawn_bridge(BridgeConfig::default()).await;

    let res = common::client()
        .get(bridge.url("/launch?core=x&rom=y"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "Not Found");

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_bridge_never_contacts_frontend() {
    let (frontend_addr, hits) = common::start_counting_frontend().await;

    let mut config = BridgeConfig::default();
    config.frontend.host = frontend_addr.ip().to_string();
    config.frontend.port = frontend_addr.port();
    let bridge = common::spawn_bridge(config).await;

    let res = common::client()
        .get(bridge.url("/play?core=mgba_libretro&rom=%2Froms%2Fgba%2Fa.gba"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains(&format!("http://{}/?rom=gba/a.gba&core=gba", frontend_addr)));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0, "redirect must be left to the browser");

    bridge.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let bridge = common::spawn_bridge(BridgeConfig::default()).await;

    let res = common::client().get(bridge.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    bridge.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), bridge.handle)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok());
}
