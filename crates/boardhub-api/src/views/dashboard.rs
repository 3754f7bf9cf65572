//! Landing page listing every board mount.

use boardhub_core::types::Principal;

use crate::state::BoardRuntime;

use super::escape;

/// Render the landing page: the signed-in principal plus one card per
/// mounted board with its queue count and access-mode badge.
pub fn render(principal: &Principal, boards: &[BoardRuntime]) -> String {
    let cards: String = boards
        .iter()
        .map(|board| {
            let badge = if board.descriptor.access_mode.is_read_only() {
                r#"<span class="badge readonly">read-only</span>"#
            } else {
                r#"<span class="badge">full access</span>"#
            };
            format!(
                r#"<a class="card" href="{path}"><h3>{path}</h3><p>{count} queue(s)</p>{badge}</a>"#,
                path = escape(&board.descriptor.mount_path),
                count = board.queues.len(),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>BoardHub</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; color: #222; }}
.card {{ display: block; border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: .75rem 0; text-decoration: none; color: inherit; }}
.card:hover {{ border-color: #888; }}
.badge {{ background: #4ade80; border-radius: 1rem; padding: .15rem .6rem; font-size: .75rem; }}
.badge.readonly {{ background: #ffd700; }}
header {{ display: flex; justify-content: space-between; align-items: baseline; }}
</style>
</head>
<body>
<header>
<h1>BoardHub</h1>
<p>{name} &lt;{email}&gt; &middot; <a href="/logout">Logout</a></p>
</header>
<h2>Boards</h2>
{cards}
</body>
</html>
"#,
        name = escape(&principal.display_name),
        email = escape(&principal.email),
    )
}
