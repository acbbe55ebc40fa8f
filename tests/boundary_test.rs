use release_lines::boundary::BoundaryWarning;
use release_lines::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        repo: "acme/widget".to_string(),
        tag: "nightly-2024".to_string(),
        reason: "Invalid format".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse tag"),
        "Message should contain 'Cannot parse tag', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("nightly-2024"),
        "Message should contain tag 'nightly-2024', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("acme/widget"),
        "Message should contain repository, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("Invalid format"),
        "Message should contain reason 'Invalid format', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_releases_display() {
    let warning = BoundaryWarning::NoReleases {
        repo: "acme/widget".to_string(),
    };

    assert_eq!(warning.to_string(), "No releases found for acme/widget");
}

#[test]
fn test_boundary_warning_nothing_above_floor_display() {
    let warning = BoundaryWarning::NothingAboveFloor {
        repo: "acme/widget".to_string(),
        min_version: "4.8.3".to_string(),
        newest: "2.7.6".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("4.8.3"), "got: {}", display_msg);
    assert!(display_msg.contains("2.7.6"), "got: {}", display_msg);
}

// ============================================================================
// BoundaryWarning Equality Tests
// ============================================================================

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::NoReleases {
        repo: "acme/widget".to_string(),
    };
    let b = BoundaryWarning::NoReleases {
        repo: "acme/widget".to_string(),
    };
    let c = BoundaryWarning::NoReleases {
        repo: "acme/gadget".to_string(),
    };

    assert_eq!(a, b);
    assert_ne!(a, c);
}

// ============================================================================
// Display integration
// ============================================================================

#[test]
fn test_display_boundary_warning_all_variants() {
    let warnings = vec![
        BoundaryWarning::UnparsableTag {
            repo: "acme/widget".to_string(),
            tag: "latest".to_string(),
            reason: "no version".to_string(),
        },
        BoundaryWarning::NoReleases {
            repo: "acme/widget".to_string(),
        },
        BoundaryWarning::NothingAboveFloor {
            repo: "acme/widget".to_string(),
            min_version: "2.0.0".to_string(),
            newest: "1.9.9".to_string(),
        },
    ];

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }
}
