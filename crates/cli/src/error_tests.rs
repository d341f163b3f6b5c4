#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn pattern_errors_map_to_usage_error() {
    assert_eq!(ExitCode::from(&Error::EmptyPattern), ExitCode::UsageError);
    assert_eq!(
        ExitCode::from(&Error::TrailingRecursive("a/**".into())),
        ExitCode::UsageError
    );
    assert_eq!(
        ExitCode::from(&Error::UnterminatedBracket("[ab".into())),
        ExitCode::UsageError
    );
    assert_eq!(
        ExitCode::from(&Error::Argument("missing pattern".into())),
        ExitCode::UsageError
    );
}

#[test]
fn internal_errors_map_to_internal_error() {
    assert_eq!(
        ExitCode::from(&Error::Internal("boom".into())),
        ExitCode::InternalError
    );
}

#[test]
fn display_includes_the_offending_pattern() {
    let msg = Error::TrailingSeparator("src/".into()).to_string();
    assert!(msg.contains("src/"), "got: {msg}");

    let msg = Error::UnknownClass {
        segment: "[[:bogus:]]".into(),
        class: "bogus".into(),
    }
    .to_string();
    assert!(msg.contains("bogus"), "got: {msg}");
}

#[test]
fn exit_codes_are_stable() {
    assert_eq!(ExitCode::Success as i32, 0);
    assert_eq!(ExitCode::NoMatches as i32, 1);
    assert_eq!(ExitCode::UsageError as i32, 2);
    assert_eq!(ExitCode::InternalError as i32, 3);
}
