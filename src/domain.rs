use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A waitlist email address, trimmed and lower-cased at the boundary.
///
/// The shape check is a syntactic sanity check only (`local@domain.tld`);
/// it makes no claim about deliverability.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = raw.trim().to_lowercase();
        if has_valid_shape(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(format!("{} is not a valid waitlist email", normalized))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// One or more non-space non-@ characters, "@", one or more non-space non-@
// characters, ".", one or more non-space characters.
fn has_valid_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, rest)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || rest.contains('@') {
        return false;
    }
    match rest.rsplit_once('.') {
        Some((domain, tld)) => !domain.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The unit persisted per submission. Either fully accepted by the store or
/// not persisted at all; uniqueness per email is enforced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    pub source: String,
    pub user_agent: String,
}

impl SignupRecord {
    pub fn new(email: WaitlistEmail, source: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            email: email.into_inner(),
            source: source.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[derive(Debug, Clone)]
    struct ValidEmailFixture(pub String);

    impl Arbitrary for ValidEmailFixture {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
            let email = SafeEmail().fake_with_rng(&mut rng);
            Self(email)
        }
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_err!(WaitlistEmail::parse(""));
    }

    #[test]
    fn email_missing_at_symbol_is_rejected() {
        assert_err!(WaitlistEmail::parse("not-an-email"));
    }

    #[test]
    fn email_missing_dot_after_at_is_rejected() {
        assert_err!(WaitlistEmail::parse("someone@nodot"));
    }

    #[test]
    fn email_missing_local_part_is_rejected() {
        assert_err!(WaitlistEmail::parse("@quarterly.app"));
    }

    #[test]
    fn email_with_empty_tld_is_rejected() {
        assert_err!(WaitlistEmail::parse("someone@quarterly."));
    }

    #[test]
    fn email_with_two_at_symbols_is_rejected() {
        assert_err!(WaitlistEmail::parse("some@one@quarterly.app"));
    }

    #[test]
    fn email_with_interior_whitespace_is_rejected() {
        assert_err!(WaitlistEmail::parse("some one@quarterly.app"));
    }

    #[test]
    fn plain_valid_email_is_parsed() {
        assert_ok!(WaitlistEmail::parse("someone@quarterly.app"));
    }

    #[test]
    fn dotted_subdomain_is_parsed() {
        assert_ok!(WaitlistEmail::parse("someone@mail.quarterly.app"));
    }

    #[test]
    fn parsing_trims_and_lowercases() {
        let email = WaitlistEmail::parse("Test@Example.com ").unwrap();
        assert_eq!(email.as_ref(), "test@example.com");
    }

    #[test]
    fn surrounding_whitespace_alone_does_not_reject() {
        assert_ok!(WaitlistEmail::parse("  someone@quarterly.app\n"));
    }

    #[quickcheck]
    fn valid_emails_are_parsed_successfully(valid_email: ValidEmailFixture) -> bool {
        WaitlistEmail::parse(&valid_email.0).is_ok()
    }

    #[quickcheck]
    fn parsed_emails_are_always_lowercase(valid_email: ValidEmailFixture) -> bool {
        let upper = valid_email.0.to_uppercase();
        match WaitlistEmail::parse(&upper) {
            Ok(parsed) => parsed.as_ref() == valid_email.0.to_lowercase(),
            Err(_) => false,
        }
    }

    #[test]
    fn record_carries_normalized_email() {
        let email = WaitlistEmail::parse("Someone@Quarterly.App").unwrap();
        let record = SignupRecord::new(email, "hero", "test-agent");
        assert_eq!(record.email, "someone@quarterly.app");
        assert_eq!(record.source, "hero");
        assert_eq!(record.user_agent, "test-agent");
    }
}
