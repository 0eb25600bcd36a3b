mod common;

use common::{EnvGuard, Fixture, run_cli};
use serde_json::Value;
use serial_test::serial;

#[test]
#[serial]
fn complete_setup_passes_every_check() {
    let fx = Fixture::new().with_full_deck();
    let outbox = fx.path("outbox");
    let _env = EnvGuard::apply(&[
        ("POKERVIEW_ASSETS_DIR", Fixture::arg(&fx.assets_dir())),
        ("POKERVIEW_OUTBOX_DIR", Fixture::arg(&outbox)),
    ]);

    let res = run_cli(&["doctor"]);
    assert_eq!(res.code, 0, "stdout: {}\nstderr: {}", res.stdout, res.stderr);
    assert!(res.stderr.is_empty());

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let checks = json["checks"].as_object().unwrap();
    for name in [
        "assets_dir",
        "table_background",
        "blank_card",
        "anonymous_avatar",
        "font",
        "card_faces",
        "outbox_dir",
    ] {
        assert_eq!(checks[name]["status"], "ok", "{name}: {}", checks[name]);
    }
    assert!(outbox.is_dir());
}

#[test]
#[serial]
fn missing_font_fails_but_still_reports() {
    let fx = Fixture::new().with_full_deck();
    std::fs::remove_file(fx.assets_dir().join("FreeMonoBold.ttf")).unwrap();
    let _env = EnvGuard::apply(&[
        ("POKERVIEW_ASSETS_DIR", Fixture::arg(&fx.assets_dir())),
        ("POKERVIEW_OUTBOX_DIR", Fixture::arg(&fx.path("outbox"))),
    ]);

    let res = run_cli(&["doctor"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.starts_with("Error: Font not found at"), "{}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["checks"]["font"]["status"], "fail");
    assert_eq!(json["checks"]["table_background"]["status"], "ok");
}

#[test]
#[serial]
fn absent_assets_dir_fails_every_asset_check() {
    let fx = Fixture::new();
    let _env = EnvGuard::apply(&[
        ("POKERVIEW_ASSETS_DIR", Fixture::arg(&fx.path("missing"))),
        ("POKERVIEW_OUTBOX_DIR", Fixture::arg(&fx.path("outbox"))),
    ]);

    let res = run_cli(&["doctor"]);
    assert_eq!(res.code, 2);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let checks = json["checks"].as_object().unwrap();
    assert_eq!(checks["assets_dir"]["status"], "fail");
    assert_eq!(checks["card_faces"]["status"], "fail");
    assert_eq!(checks["outbox_dir"]["status"], "ok");
}
