//! Authentication failure view.

use super::escape;

/// Render the failure page for an error code set by the callback
/// handler. Each rejection gets its own human-readable reason; the
/// domain rejection lists the configured allow-list.
pub fn render(code: &str, allowed_domains: &[String]) -> String {
    let reason = match code {
        "no_email" => "Your account has no email address visible to this application.".to_string(),
        "domain_not_allowed" => format!(
            "Your email domain is not allowed. Allowed domains: {}.",
            escape(&allowed_domains.join(", "))
        ),
        "state_mismatch" => {
            "The sign-in flow was interrupted or replayed. Please start again.".to_string()
        }
        "session" => "Your sign-in could not be saved. Please try again.".to_string(),
        "missing_code" | "exchange_failed" => {
            "The identity provider did not complete the sign-in.".to_string()
        }
        other => format!(
            "The identity provider reported an error ({}).",
            escape(other)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Authentication Failed</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 4rem auto; max-width: 32rem; color: #222; text-align: center; }}
h1 {{ color: #e74c3c; }}
a {{ display: inline-block; margin-top: 1.5rem; }}
</style>
</head>
<body>
<h1>Authentication Failed</h1>
<p>{reason}</p>
<a href="/auth/google">Try Again</a>
</body>
</html>
"#
    )
}
