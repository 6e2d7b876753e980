//! Pre-navigation authorization policy.
//!
//! Evaluated for every route transition, given only the target path and
//! whether an access token is persisted. This is a two-state gate checked per
//! navigation, not a persisted state machine: token presence gates access
//! here, while the session store decides separately whether that token is
//! actually valid.

/// What to do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Proceed to the requested target.
    Allow,
    /// Redirect to the login page.
    ToLogin,
    /// Redirect to the home page.
    ToHome,
}

const LOGIN_PATH: &str = "/login";

/// Decide what to do with a navigation to `path`.
///
/// | target | token present | outcome |
/// |---|---|---|
/// | `/` | yes | allow |
/// | `/` | no | to login |
/// | `/login` | yes | to home |
/// | `/login` | no | allow |
/// | any other | yes | allow |
/// | any other | no | to login |
pub fn evaluate(path: &str, token_present: bool) -> GuardOutcome {
    if normalize(path) == LOGIN_PATH {
        if token_present {
            GuardOutcome::ToHome
        } else {
            GuardOutcome::Allow
        }
    } else if token_present {
        GuardOutcome::Allow
    } else {
        GuardOutcome::ToLogin
    }
}

/// Trailing slashes are not significant; the root path stays `/`.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_requires_token() {
        assert_eq!(evaluate("/", true), GuardOutcome::Allow);
        assert_eq!(evaluate("/", false), GuardOutcome::ToLogin);
    }

    #[test]
    fn login_bounces_authenticated_users_home() {
        assert_eq!(evaluate("/login", true), GuardOutcome::ToHome);
        assert_eq!(evaluate("/login", false), GuardOutcome::Allow);
    }

    #[test]
    fn other_routes_require_token() {
        for path in ["/employees", "/departments", "/leaves", "/settings", "/admin"] {
            assert_eq!(evaluate(path, true), GuardOutcome::Allow, "{path}");
            assert_eq!(evaluate(path, false), GuardOutcome::ToLogin, "{path}");
        }
    }

    #[test]
    fn unknown_routes_go_through_the_same_gate() {
        assert_eq!(evaluate("/no/such/page", true), GuardOutcome::Allow);
        assert_eq!(evaluate("/no/such/page", false), GuardOutcome::ToLogin);
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        assert_eq!(evaluate("/login/", true), GuardOutcome::ToHome);
        assert_eq!(evaluate("/employees/", false), GuardOutcome::ToLogin);
        assert_eq!(evaluate("//", false), GuardOutcome::ToLogin);
    }
}
