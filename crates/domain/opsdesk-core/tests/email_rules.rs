use opsdesk_core::validate::{email_validation_error, is_valid_email, validate_email};

#[test]
fn every_string_without_at_fails_validation() {
    let samples = [
        "",
        " ",
        "bob",
        "bob.example.com",
        "first last",
        "1234567890",
        "no-at-here.io",
    ];
    for s in samples {
        assert!(
            !email_validation_error(s).is_empty(),
            "{s:?} must produce a validation error"
        );
    }
}

#[test]
fn well_formed_local_domain_tld_passes() {
    let samples = [
        "ops@desk.io",
        "billing.admin@platform.example.com",
        "x+filter@a-b.co",
    ];
    for s in samples {
        assert!(is_valid_email(s), "{s:?} must validate");
        let res = validate_email(s);
        assert!(res.valid);
        assert!(res.error.is_empty());
    }
}

#[test]
fn one_letter_tld_is_rejected() {
    assert!(!is_valid_email("user@host.x"));
}

#[test]
fn numeric_tld_is_rejected() {
    assert!(!is_valid_email("user@host.12"));
}
