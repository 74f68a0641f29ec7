use std::fmt::Display;

use crate::session::{Session, SessionStatus};

/// Every view the client knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Onboarding,
    Terms,
    Privacy,
    BugReport,
    Forbidden,
    ManageLectures,
    Attendance,
    AttendanceLogs,
    AttendanceDetail(String),
    AccountEdit,
    BruteAttendOptions,
    AssignmentReview,
    ProKeyVerify,
    ProAd,
    AdminDashboard,
    AdminProKeys,
    AdminUsers,
    AdminUserRunners,
    AdminLecture(Option<String>),
}

/// What a route requires from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Member,
    Pro,
    /// Only members without Pro, the upgrade pages.
    Upsell,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render(Route),
    Redirect(Route),
    /// Render nothing at all.
    Blank,
    NotFound,
}

/// Drops the query string and any trailing slash.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = normalize(path);
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["onboarding"] => Self::Onboarding,
            ["terms"] => Self::Terms,
            ["privacy"] => Self::Privacy,
            ["bug-report"] => Self::BugReport,
            ["forbidden"] => Self::Forbidden,
            ["lectures", "manage"] => Self::ManageLectures,
            ["attendance"] => Self::Attendance,
            ["attendance", "logs"] => Self::AttendanceLogs,
            ["attendance", course] => Self::AttendanceDetail((*course).to_string()),
            ["account", "edit"] => Self::AccountEdit,
            ["brute-attend-options"] => Self::BruteAttendOptions,
            ["assignment", "review"] => Self::AssignmentReview,
            ["prokey", "verify"] => Self::ProKeyVerify,
            ["pro-ad"] => Self::ProAd,
            ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "prokeys"] => Self::AdminProKeys,
            ["admin", "users"] => Self::AdminUsers,
            ["admin", "user-runners"] => Self::AdminUserRunners,
            ["admin", "lecture"] => Self::AdminLecture(None),
            ["admin", "lecture", lecture] => Self::AdminLecture(Some((*lecture).to_string())),
            _ => return None,
        };

        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Onboarding => "/onboarding".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::Privacy => "/privacy".to_string(),
            Self::BugReport => "/bug-report".to_string(),
            Self::Forbidden => "/forbidden".to_string(),
            Self::ManageLectures => "/lectures/manage".to_string(),
            Self::Attendance => "/attendance".to_string(),
            Self::AttendanceLogs => "/attendance/logs".to_string(),
            Self::AttendanceDetail(course) => format!("/attendance/{course}"),
            Self::AccountEdit => "/account/edit".to_string(),
            Self::BruteAttendOptions => "/brute-attend-options".to_string(),
            Self::AssignmentReview => "/assignment/review".to_string(),
            Self::ProKeyVerify => "/prokey/verify".to_string(),
            Self::ProAd => "/pro-ad".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminProKeys => "/admin/prokeys".to_string(),
            Self::AdminUsers => "/admin/users".to_string(),
            Self::AdminUserRunners => "/admin/user-runners".to_string(),
            Self::AdminLecture(None) => "/admin/lecture".to_string(),
            Self::AdminLecture(Some(lecture)) => format!("/admin/lecture/{lecture}"),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Home
            | Self::Onboarding
            | Self::Terms
            | Self::Privacy
            | Self::BugReport
            | Self::Forbidden => Access::Public,

            Self::ManageLectures
            | Self::Attendance
            | Self::AttendanceLogs
            | Self::AttendanceDetail(_)
            | Self::AccountEdit => Access::Member,

            Self::BruteAttendOptions | Self::AssignmentReview => Access::Pro,

            Self::ProKeyVerify | Self::ProAd => Access::Upsell,

            Self::AdminDashboard
            | Self::AdminProKeys
            | Self::AdminUsers
            | Self::AdminUserRunners
            | Self::AdminLecture(_) => Access::Admin,
        }
    }

    /// Views still reachable while the profile is incomplete.
    fn allowed_while_onboarding(&self) -> bool {
        matches!(self, Self::Onboarding | Self::Terms | Self::Privacy)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Access {
    pub fn allows(self, session: &Session) -> bool {
        let ready = session.is_ready();

        match self {
            Self::Public => true,
            Self::Member => ready,
            Self::Pro => ready && session.is_pro,
            Self::Upsell => ready && !session.is_pro,
            Self::Admin => ready && session.is_admin,
        }
    }
}

/// Decides what happens when `path` is requested with the given session.
pub fn decide(path: &str, session: &Session) -> Decision {
    let path = normalize(path);
    let route = Route::parse(&path);

    // checked before anything else, unknown paths included
    if session.status == SessionStatus::Onboarding
        && !route
            .as_ref()
            .map_or(false, Route::allowed_while_onboarding)
    {
        return Decision::Redirect(Route::Onboarding);
    }

    let Some(route) = route else {
        if path.starts_with("/admin/") && !Access::Admin.allows(session) {
            return Decision::Blank;
        }

        return Decision::NotFound;
    };

    let access = route.access();

    if access.allows(session) {
        return Decision::Render(route);
    }

    match access {
        Access::Admin => Decision::Blank,
        _ => Decision::Redirect(Route::Home),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL_PATHS: &[&str] = &[
        "/",
        "/onboarding",
        "/terms",
        "/privacy",
        "/bug-report",
        "/forbidden",
        "/lectures/manage",
        "/attendance",
        "/attendance/logs",
        "/attendance/12345",
        "/account/edit",
        "/brute-attend-options",
        "/assignment/review",
        "/prokey/verify",
        "/pro-ad",
        "/admin/dashboard",
        "/admin/prokeys",
        "/admin/users",
        "/admin/user-runners",
        "/admin/lecture",
        "/admin/lecture/3",
    ];

    fn session(status: SessionStatus, is_admin: bool, is_pro: bool) -> Session {
        Session {
            status,
            is_admin,
            is_pro,
        }
    }

    fn ready(is_admin: bool, is_pro: bool) -> Session {
        session(SessionStatus::Ready, is_admin, is_pro)
    }

    #[test]
    fn test_parse_round_trip() {
        for path in ALL_PATHS {
            let route = Route::parse(path).unwrap();

            assert_eq!(&route.path(), path);
        }
    }

    #[test]
    fn test_static_segment_wins_over_param() {
        assert_eq!(Route::parse("/attendance/logs"), Some(Route::AttendanceLogs));
        assert_eq!(
            Route::parse("/attendance/77"),
            Some(Route::AttendanceDetail("77".to_string()))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/attendance/"), "/attendance");
        assert_eq!(normalize("/admin/prokeys?count=10"), "/admin/prokeys");
        assert_eq!(normalize("terms"), "/terms");
    }

    #[test]
    fn test_onboarding_redirects_everything_else() {
        let paths = ALL_PATHS
            .iter()
            .copied()
            .chain(["/does/not/exist", "/admin/secret/deep", "/attendance/1/2"]);

        for is_admin in [false, true] {
            for is_pro in [false, true] {
                let current = session(SessionStatus::Onboarding, is_admin, is_pro);

                for path in paths.clone() {
                    let decision = decide(path, &current);

                    match path {
                        "/onboarding" => {
                            assert_eq!(decision, Decision::Render(Route::Onboarding));
                        }
                        "/terms" => assert_eq!(decision, Decision::Render(Route::Terms)),
                        "/privacy" => assert_eq!(decision, Decision::Render(Route::Privacy)),
                        _ => assert_eq!(decision, Decision::Redirect(Route::Onboarding), "{path}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_public_routes_always_render() {
        for path in ["/", "/terms", "/privacy", "/bug-report", "/forbidden", "/onboarding"] {
            for current in [Session::default(), ready(false, false), ready(true, true)] {
                assert!(matches!(decide(path, &current), Decision::Render(_)), "{path}");
            }
        }
    }

    #[test]
    fn test_member_routes() {
        for path in [
            "/lectures/manage",
            "/attendance",
            "/attendance/logs",
            "/attendance/9",
            "/account/edit",
        ] {
            assert_eq!(
                decide(path, &Session::default()),
                Decision::Redirect(Route::Home)
            );
            assert!(matches!(decide(path, &ready(false, false)), Decision::Render(_)));
        }
    }

    #[test]
    fn test_pro_routes() {
        for path in ["/brute-attend-options", "/assignment/review"] {
            assert_eq!(
                decide(path, &ready(true, false)),
                Decision::Redirect(Route::Home)
            );
            assert_eq!(
                decide(path, &Session::default()),
                Decision::Redirect(Route::Home)
            );
            assert_eq!(
                decide(path, &ready(false, true)),
                Decision::Render(Route::parse(path).unwrap())
            );
        }
    }

    #[test]
    fn test_upsell_routes() {
        for path in ["/prokey/verify", "/pro-ad"] {
            assert!(matches!(decide(path, &ready(false, false)), Decision::Render(_)));
            assert_eq!(
                decide(path, &ready(false, true)),
                Decision::Redirect(Route::Home)
            );
            assert_eq!(
                decide(path, &Session::default()),
                Decision::Redirect(Route::Home)
            );
        }
    }

    #[test]
    fn test_admin_routes_render_nothing() {
        let admin_paths = ALL_PATHS
            .iter()
            .copied()
            .filter(|path| path.starts_with("/admin/"))
            .chain(["/admin/unknown"]);

        for path in admin_paths {
            for current in [Session::default(), ready(false, false), ready(false, true)] {
                assert_eq!(decide(path, &current), Decision::Blank, "{path}");
            }
        }
    }

    #[test]
    fn test_admin_routes_render_for_admins() {
        assert_eq!(
            decide("/admin/users", &ready(true, false)),
            Decision::Render(Route::AdminUsers)
        );
        assert_eq!(
            decide("/admin/lecture/5", &ready(true, true)),
            Decision::Render(Route::AdminLecture(Some("5".to_string())))
        );
        assert_eq!(decide("/admin/unknown", &ready(true, false)), Decision::NotFound);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        for current in [Session::default(), ready(false, false), ready(true, true)] {
            assert_eq!(decide("/nope", &current), Decision::NotFound);
            assert_eq!(decide("/attendance/1/2", &current), Decision::NotFound);
        }
    }
}
