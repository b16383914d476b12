//! Route guarding: a pure function from session state and a view's
//! requirement to what should happen. Navigation itself is the caller's
//! job; this module has no side effects.

use client::{Role, SessionState};

/// What a view demands from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Sign-in/sign-up views; pointless once authenticated.
    Guest,
    /// Any signed-in user.
    Authenticated,
    /// Signed in with this specific role.
    Role(Role),
    /// No session requirement at all (logout works signed out too).
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session is still being restored; show a neutral indicator only.
    Wait,
    /// Not signed in and the view needs a user.
    ToLogin,
    /// Signed in, but this is not the user's view; their own default view
    /// is the dashboard for admins and the portal for students.
    ToDefault(Role),
    Render,
}

pub fn route(state: &SessionState, access: Access) -> RouteDecision {
    match state {
        SessionState::Uninitialized | SessionState::Loading => RouteDecision::Wait,
        SessionState::Anonymous => match access {
            Access::Guest | Access::Open => RouteDecision::Render,
            Access::Authenticated | Access::Role(_) => RouteDecision::ToLogin,
        },
        SessionState::Authenticated(user) => match access {
            Access::Guest => RouteDecision::ToDefault(user.role),
            Access::Open | Access::Authenticated => RouteDecision::Render,
            Access::Role(required) if user.role == required => RouteDecision::Render,
            Access::Role(_) => RouteDecision::ToDefault(user.role),
        },
    }
}

/// The default view for a role, as a runnable command.
pub fn default_view(role: Role) -> &'static str {
    match role {
        Role::Admin => "dashboard",
        Role::Student => "portal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::AuthUser;

    fn user(role: Role) -> SessionState {
        SessionState::Authenticated(AuthUser {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.edu".to_string(),
            role,
            student_id: None,
            student_name: None,
            enabled: None,
        })
    }

    #[test]
    fn loading_always_waits() {
        for access in [
            Access::Guest,
            Access::Authenticated,
            Access::Role(Role::Admin),
            Access::Open,
        ] {
            assert_eq!(route(&SessionState::Loading, access), RouteDecision::Wait);
            assert_eq!(
                route(&SessionState::Uninitialized, access),
                RouteDecision::Wait
            );
        }
    }

    #[test]
    fn anonymous_is_sent_to_login_for_protected_views() {
        let state = SessionState::Anonymous;
        assert_eq!(
            route(&state, Access::Role(Role::Admin)),
            RouteDecision::ToLogin
        );
        assert_eq!(route(&state, Access::Authenticated), RouteDecision::ToLogin);
        assert_eq!(route(&state, Access::Guest), RouteDecision::Render);
        assert_eq!(route(&state, Access::Open), RouteDecision::Render);
    }

    #[test]
    fn role_mismatch_redirects_to_own_view() {
        assert_eq!(
            route(&user(Role::Student), Access::Role(Role::Admin)),
            RouteDecision::ToDefault(Role::Student)
        );
        assert_eq!(
            route(&user(Role::Admin), Access::Role(Role::Student)),
            RouteDecision::ToDefault(Role::Admin)
        );
        assert_eq!(
            route(&user(Role::Admin), Access::Role(Role::Admin)),
            RouteDecision::Render
        );
    }

    #[test]
    fn signed_in_user_is_bounced_off_login() {
        assert_eq!(
            route(&user(Role::Student), Access::Guest),
            RouteDecision::ToDefault(Role::Student)
        );
    }
}
