//! End-to-end CLI tests: run the built binary against `fixtures/content`.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_photo-gallery"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run photo-gallery")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn build_fixtures() -> (TempDir, String, String) {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = run(&[
        "build",
        "--source",
        fixtures().to_str().unwrap(),
        "--output",
        dist.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "build failed: {}", String::from_utf8_lossy(&out.stderr));
    let html = std::fs::read_to_string(dist.join("index.html")).unwrap();
    (tmp, stdout(&out), html)
}

// ---------------------------------------------------------------------------
// build
// ---------------------------------------------------------------------------

#[test]
fn build_writes_single_page() {
    let (tmp, out, html) = build_fixtures();
    let entries: Vec<_> = std::fs::read_dir(tmp.path().join("dist")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Harbour Lens"));
    assert!(out.contains("Gallery \u{2192} index.html"));
    assert!(out.contains("Generated 1 page, 4 cells, 2 features"));
}

#[test]
fn build_escapes_catalog_text() {
    let (_tmp, _out, html) = build_fixtures();
    assert!(html.contains("Market &lt;Sunday&gt;"));
    assert!(html.contains("Crowds &amp; colour"));
    assert!(!html.contains("Market <Sunday>"));
}

#[test]
fn build_keeps_catalog_order() {
    let (_tmp, _out, html) = build_fixtures();
    let positions: Vec<usize> = ["10", "20", "30", "40"]
        .iter()
        .map(|id| html.find(&format!(r#"data-id="{id}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn build_applies_config() {
    let (_tmp, _out, html) = build_fixtures();
    assert!(html.contains(r#"data-reveal-margin="40""#));
    assert!(html.contains("hello@harbour-lens.example"));
    // "rocket" is not in the icon set
    assert!(html.contains("icon-placeholder"));
    assert!(html.contains(r#"data-icon="zoom-in""#));
}

#[test]
fn build_renders_closed_lightbox() {
    let (_tmp, _out, html) = build_fixtures();
    assert!(html.contains(r#"id="lightbox""#));
    assert!(html.contains("1 / 4"));
    assert!(html.contains(r#"data-zoom-min="0.5""#));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_prints_inventory() {
    let out = run(&["check", "--source", fixtures().to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("001 Harbour at dawn (large)"));
    assert!(text.contains("    Source: https://images.example.com/portfolio/harbour-dawn.jpg"));
    assert!(text.contains("    Icon: rocket (placeholder)"));
    assert!(text.contains("    Icon: zoom-in"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn check_without_content_uses_stock() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("    config.toml (stock)"));
    assert!(text.contains("    catalog.toml (stock)"));
}

#[test]
fn check_rejects_duplicate_ids() {
    let tmp = TempDir::new().unwrap();
    let record = r#"
[[images]]
id = 1
url = "https://images.example.com/a.jpg"
title = "A"
description = ""
category = "general"
"#;
    std::fs::write(tmp.path().join("catalog.toml"), format!("{record}{record}")).unwrap();
    let out = run(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn check_rejects_bad_zoom_bounds() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        "[lightbox]\nzoom_min = 2.0\n",
    )
    .unwrap();
    let out = run(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// gen-config
// ---------------------------------------------------------------------------

#[test]
fn gen_config_output_is_loadable() {
    let out = run(&["gen-config"]);
    assert!(out.status.success());
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), stdout(&out)).unwrap();
    let check = run(&["check", "--source", tmp.path().to_str().unwrap()]);
    assert!(check.status.success(), "{}", String::from_utf8_lossy(&check.stderr));
    assert!(stdout(&check).contains("    config.toml\n"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_ignores_stale_load() {
    let out = run(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "--events",
        "open:0,next,loaded:1,loaded:2,key:escape",
    ]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();

    let step = |label: &str| lines.iter().position(|l| *l == label).unwrap();

    assert_eq!(lines[step("003 loaded:1") + 1], "    Lightbox: open 2 / 4, zoom 100%, loading");
    assert_eq!(lines[step("004 loaded:2") + 1], "    Lightbox: open 2 / 4, zoom 100%");
    let escape = step("005 key:escape");
    assert_eq!(lines[escape + 1], "    Lightbox: closed");
    assert!(lines[escape + 2].ends_with("scroll free"));
    assert_eq!(lines[escape + 3], "    Effect: unlock scroll");
    assert!(text.contains("006 teardown"));
}

#[test]
fn simulate_wraps_backwards_from_first() {
    let out = run(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "--events",
        "open:0,key:arrowleft",
    ]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("    Lightbox: open 4 / 4, zoom 100%, loading"));
    assert!(text.contains("never-loads.jpg (token 2)"));
}

#[test]
fn simulate_rejects_unknown_event() {
    let out = run(&[
        "simulate",
        "--source",
        fixtures().to_str().unwrap(),
        "--events",
        "open:0,fly",
    ]);
    assert!(!out.status.success());
}
