//! Layering guardrails to keep `vega_core` free of front-end and IO concerns.
//!
//! `vega_core` holds pure data structures and vocabulary. It must not depend on `vega_syntax`, or on
//! the logging and diagnostics stack the front end uses. This test scans its `Cargo.toml` and fails if
//! one of those crates appears in `[dependencies]`.

const FORBIDDEN: &[&str] = &["vega_syntax", "vega", "tracing", "miette"];

#[test]
fn core_does_not_depend_on_front_end_crates() {
    let manifest = include_str!("../crates/vega_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let name = line.split(['=', ' ']).next().unwrap_or("").trim();
        assert!(
            !FORBIDDEN.contains(&name),
            "`{name}` must not appear in vega_core's [dependencies]"
        );
    }
}
