use roles_core::errors::{ensure_same_domain, ErrorInfo, RoleError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", "3")
        .with_context("reason", "example")
}

#[test]
fn capability_error_surface() {
    let err = RoleError::Capability(sample_info("predicate-unsupported", "needs an order"));
    assert_eq!(err.info().code, "predicate-unsupported");
    assert!(err.info().context.contains_key("node"));
}

#[test]
fn argument_error_surface() {
    let err = RoleError::Argument(sample_info("strictness-out-of-range", "k must be positive"));
    assert_eq!(err.info().code, "strictness-out-of-range");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn fixpoint_and_network_error_surface() {
    let err = RoleError::Fixpoint(sample_info("fixpoint-unsettled", "too many steps"));
    assert_eq!(err.info().code, "fixpoint-unsettled");
    let err = RoleError::Network(sample_info("unknown-node", "no such node"));
    assert_eq!(err.info().code, "unknown-node");
}

#[test]
fn domain_mismatch_reports_both_sizes() {
    let err = ensure_same_domain(4, 5).unwrap_err();
    match &err {
        RoleError::Domain(info) => {
            assert_eq!(info.code, "domain-mismatch");
            assert_eq!(info.context.get("expected"), Some(&"4".to_string()));
            assert_eq!(info.context.get("found"), Some(&"5".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(ensure_same_domain(7, 7).is_ok());
}

#[test]
fn display_includes_context_and_hint() {
    let err = RoleError::Serde(
        ErrorInfo::new("S001", "schema mismatch")
            .with_context("major", "2")
            .with_hint("upgrade the reader"),
    );
    assert_eq!(
        err.to_string(),
        "serde error: schema mismatch (code: S001) | context: [major=2] | hint: upgrade the reader"
    );
}

#[test]
fn errors_round_trip_through_json() {
    let err = RoleError::Capability(sample_info("C001", "no predicate"));
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: RoleError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
