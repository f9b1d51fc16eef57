use grid_launcher::catalog::{Item, ItemKind};
use grid_launcher::dispatch::{dispatch, normalize_url, Outcome};
use grid_launcher::settings::Settings;

fn item(kind: ItemKind, command: &str) -> Item {
    Item {
        id: "1".into(),
        name: "test".into(),
        kind,
        command: command.into(),
        category_id: None,
        category_name: String::new(),
        icon: String::new(),
        run_in_terminal: None,
    }
}

#[test]
fn bare_urls_get_https_prefix() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
}

#[test]
fn unknown_kind_is_reported_without_action() {
    let outcome = dispatch(&item(ItemKind::Unknown, "whatever"), &Settings::default());
    assert_eq!(outcome, Outcome::UnknownKind);
}

#[test]
fn unrecognized_type_strings_deserialize_to_unknown() {
    let raw = r#"{"id":"1","name":"x","type":"widget","command":"c"}"#;
    let parsed: Item = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.kind, ItemKind::Unknown);
}

#[cfg(unix)]
mod inline {
    use super::*;
    use grid_launcher::dispatch::run_inline;

    #[test]
    fn captures_stdout_on_success() {
        let outcome = run_inline("echo hello", None);
        assert_eq!(
            outcome,
            Outcome::Launched {
                output: Some("hello".into())
            }
        );
    }

    #[test]
    fn silent_success_has_no_output() {
        let outcome = run_inline("true", None);
        assert!(outcome.is_success());
        assert_eq!(outcome, Outcome::Launched { output: None });
    }

    #[test]
    fn nonzero_exit_fails() {
        assert!(matches!(
            run_inline("exit 3", None),
            Outcome::Failed { .. }
        ));
    }

    #[test]
    fn stderr_output_fails_even_with_zero_exit() {
        match run_inline("echo oops 1>&2", None) {
            Outcome::Failed { reason } => assert!(reason.contains("oops")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn timeout_kills_long_commands() {
        match run_inline("sleep 30", Some(1)) {
            Outcome::Failed { reason } => assert!(reason.contains("timed out")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn large_output_finishes_within_the_timeout() {
        // output far beyond the pipe buffer must not wedge the child
        // into the deadline
        match run_inline("yes x | head -c 1048576", Some(5)) {
            Outcome::Launched {
                output: Some(text),
            } => assert!(text.len() > 1_000_000),
            other => panic!("expected captured output, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_routes_inline_commands() {
        let outcome = dispatch(&item(ItemKind::Command, "echo routed"), &Settings::default());
        assert_eq!(
            outcome,
            Outcome::Launched {
                output: Some("routed".into())
            }
        );
    }

    #[test]
    fn failed_spawn_is_converted_not_thrown() {
        // shell itself reports the missing binary on stderr
        assert!(matches!(
            run_inline("definitely-not-a-real-binary-2931", None),
            Outcome::Failed { .. }
        ));
    }
}
