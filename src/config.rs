pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "plato";
#[cfg(windows)]
pub const EXEC_NAME: &str = "plato.exe";

pub const API_BASE_URL: &str = "https://api.superplato.app";
pub const WEB_AUTH_URL: &str = "https://superplato.app/cli-auth";
pub const BUG_REPORT_EMAIL: &str = "bugs@superplato.app";

pub const API_URL_ENV: &str = "PLATO_API_URL";
pub const TOKEN_ENV: &str = "PLATO_TOKEN";
pub const ID_TOKEN_ENV: &str = "PLATO_ID_TOKEN";
pub const HOME_ENV: &str = "PLATO_HOME";

pub const STORAGE_DIR: &str = ".superplato";
pub const STORAGE_FILE: &str = "storage.json";

/// Key holding the bearer token in the persistent scope.
pub const TOKEN_KEY: &str = "jwt";

/// Every key that may hold credentials from this or an earlier login.
/// Logout and login sweep exactly these keys from both scopes.
pub const SESSION_KEYS: &[&str] = &[
    TOKEN_KEY,
    "token",
    "authToken",
    "accessToken",
    "refreshToken",
    "idToken",
    "session",
];
