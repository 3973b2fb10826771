use crate::auth::Notice;
use crate::chart::ChartKind;
use crate::stats::SeriesStats;

pub struct DashboardView<'a> {
    pub chart_html: &'a str,
    pub count: usize,
    pub stats: Option<&'a SeriesStats>,
    pub kind: ChartKind,
}

pub fn render_dashboard(view: &DashboardView<'_>) -> String {
    let (badge, description) = if view.count == 0 {
        (
            String::new(),
            "Your chart will appear here once you add some data points",
        )
    } else {
        let plural = if view.count == 1 { "" } else { "s" };
        (
            format!(r#"<span class="badge">{} point{plural}</span>"#, view.count),
            "Chart of your data points over time",
        )
    };

    let stats = match view.stats {
        Some(stats) => fill(
            STATS_HTML,
            &[
                ("COUNT", stats.count.to_string().as_str()),
                ("MAX", stats.max_label().as_str()),
                ("MEAN", stats.mean_label().as_str()),
            ],
        ),
        None => String::new(),
    };

    let (line_class, bar_class) = match view.kind {
        ChartKind::Line => ("tab active", "tab"),
        ChartKind::Bar => ("tab", "tab active"),
    };

    let body = fill(
        DASHBOARD_HTML,
        &[
            ("VIEW", view.kind.as_str()),
            ("LINE_TAB", line_class),
            ("BAR_TAB", bar_class),
            ("BADGE", badge.as_str()),
            ("DESCRIPTION", description),
            ("STATS", stats.as_str()),
            ("CHART", view.chart_html),
        ],
    );
    layout("Bar Chart Builder", &body)
}

pub fn render_login(notice: Option<&Notice>, email: &str) -> String {
    let body = fill(
        LOGIN_HTML,
        &[
            ("NOTICE", render_notice(notice).as_str()),
            ("EMAIL", escape_html(email).as_str()),
        ],
    );
    layout("Sign In", &body)
}

pub fn render_signup(notice: Option<&Notice>, name: &str, email: &str) -> String {
    let body = fill(
        SIGNUP_HTML,
        &[
            ("NOTICE", render_notice(notice).as_str()),
            ("NAME", escape_html(name).as_str()),
            ("EMAIL", escape_html(email).as_str()),
        ],
    );
    layout("Sign Up", &body)
}

fn render_notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!(
            r#"<div class="status" role="alert" data-type="{}"><strong>{}</strong> {}</div>"#,
            notice.kind.as_str(),
            escape_html(notice.title),
            escape_html(notice.description)
        ),
        None => String::new(),
    }
}

fn layout(title: &str, body: &str) -> String {
    fill(
        PAGE_HTML,
        &[("TITLE", escape_html(title).as_str()), ("STYLE", STYLE), ("BODY", body)],
    )
}

/// Substitutes `{{KEY}}` placeholders in one pass over `template`, so
/// substituted text is never scanned for further placeholders.
/// Unknown keys are left as written.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
{{BODY}}
</body>
</html>
"#;

const STYLE: &str = r#"
    :root {
      --bg: #f4f1fb;
      --ink: #22212b;
      --muted: #6d6a7c;
      --primary: #6c4ee3;
      --accent: #e3684e;
      --card: rgba(255, 255, 255, 0.9);
      --border: rgba(34, 33, 43, 0.1);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #fff 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app { width: min(960px, 100%); margin: 0 auto; display: grid; gap: 24px; }
    .narrow { width: min(440px, 100%); }
    .nav { display: flex; justify-content: flex-end; gap: 12px; }
    h1 { margin: 0; font-size: clamp(2rem, 4vw, 2.8rem); color: var(--primary); text-align: center; }
    .subtitle { margin: 0; color: var(--muted); text-align: center; }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .card-header { display: flex; justify-content: space-between; align-items: center; gap: 12px; flex-wrap: wrap; }
    .card h2 { margin: 0; font-size: 1.3rem; }
    .badge { font-size: 0.8rem; background: rgba(108, 78, 227, 0.1); color: var(--primary); padding: 4px 10px; border-radius: 999px; }

    form.inline { display: flex; gap: 12px; flex-wrap: wrap; justify-content: center; }
    form.stacked { display: grid; gap: 12px; }
    label { font-size: 0.9rem; color: var(--muted); }
    input { padding: 12px 14px; border-radius: 12px; border: 1px solid var(--border); font-size: 1rem; }

    button, .button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--primary);
      color: white;
      text-decoration: none;
    }

    .button.outline { background: transparent; color: var(--primary); border: 1px solid var(--primary); }

    .tabs { display: flex; gap: 6px; padding: 6px; background: rgba(34, 33, 43, 0.06); border-radius: 999px; }
    .tab { padding: 6px 12px; border-radius: 999px; color: var(--muted); text-decoration: none; font-weight: 600; }
    .tab.active { background: white; color: var(--primary); }

    .chart { width: 100%; height: 320px; display: block; }
    .chart-grid { stroke: var(--border); stroke-dasharray: 3 3; }
    .chart-axis { stroke: rgba(34, 33, 43, 0.3); }
    .chart-label { fill: var(--muted); font-size: 11px; }
    .chart-line { fill: none; stroke: var(--primary); stroke-width: 2; stroke-linecap: round; stroke-linejoin: round; }
    .chart-point circle { fill: var(--primary); stroke: white; stroke-width: 2; }
    .chart-point:hover circle { r: 6; }
    .chart-bar rect { fill: var(--primary); }
    .chart-bar:hover rect { opacity: 0.8; }

    .chart-empty {
      height: 320px;
      display: grid;
      place-content: center;
      text-align: center;
      border: 2px dashed var(--border);
      border-radius: 14px;
    }

    .chart-empty-title { margin: 0; font-size: 1.1rem; font-weight: 600; color: var(--muted); }
    .chart-empty-hint { margin: 6px 0 0; font-size: 0.9rem; color: var(--muted); }

    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
    .stat { background: white; border: 1px solid var(--border); border-radius: 16px; padding: 18px; text-align: center; }
    .stat .value { display: block; font-size: 1.6rem; font-weight: 600; color: var(--primary); }
    .stat .value.accent { color: var(--accent); }
    .stat .label { font-size: 0.85rem; color: var(--muted); }

    .status { padding: 12px 14px; border-radius: 12px; }
    .status[data-type="error"] { background: #fde8e4; color: #a5321c; }
    .status[data-type="ok"] { background: #e6f4ea; color: #23693a; }
    .hint { text-align: center; color: var(--muted); font-size: 0.9rem; }
"#;

const DASHBOARD_HTML: &str = r#"<main class="app">
  <nav class="nav">
    <form method="post" action="/logout">
      <button class="button outline" type="submit">Sign Out</button>
    </form>
  </nav>

  <header>
    <h1>Bar Chart Builder</h1>
    <p class="subtitle">Add numeric values to build a chart that grows with your data.</p>
  </header>

  <section class="card">
    <h2>Add New Data Point</h2>
    <form class="inline" method="post" action="/dashboard/add?view={{VIEW}}">
      <input type="number" name="value" placeholder="Enter a number..." required autofocus />
      <button type="submit">Add</button>
    </form>
  </section>

  <section class="card">
    <div class="card-header">
      <div>
        <h2>Data Visualization {{BADGE}}</h2>
        <p class="subtitle">{{DESCRIPTION}}</p>
      </div>
      <div class="tabs">
        <a class="{{LINE_TAB}}" href="/dashboard?view=line">Line</a>
        <a class="{{BAR_TAB}}" href="/dashboard?view=bar">Bar</a>
      </div>
    </div>
    {{CHART}}
  </section>

  {{STATS}}
</main>"#;

const STATS_HTML: &str = r#"<section class="stats">
    <div class="stat"><span class="value" id="stat-count">{{COUNT}}</span><span class="label">Total Points</span></div>
    <div class="stat"><span class="value accent" id="stat-max">{{MAX}}</span><span class="label">Highest Value</span></div>
    <div class="stat"><span class="value" id="stat-mean">{{MEAN}}</span><span class="label">Average</span></div>
  </section>"#;

const LOGIN_HTML: &str = r#"<main class="app narrow">
  <header>
    <h1>Welcome Back</h1>
    <p class="subtitle">Enter your email and password to access your account</p>
  </header>
  <section class="card">
    {{NOTICE}}
    <form class="stacked" method="post" action="/login">
      <label for="email">Email</label>
      <input id="email" name="email" type="email" placeholder="you@example.com" value="{{EMAIL}}" required />
      <label for="password">Password</label>
      <input id="password" name="password" type="password" placeholder="Enter your password" required />
      <button type="submit">Sign In</button>
    </form>
  </section>
  <p class="hint">Don't have an account? <a href="/signup">Sign up</a></p>
</main>"#;

const SIGNUP_HTML: &str = r#"<main class="app narrow">
  <header>
    <h1>Create Account</h1>
    <p class="subtitle">Start building charts in seconds</p>
  </header>
  <section class="card">
    {{NOTICE}}
    <form class="stacked" method="post" action="/signup">
      <label for="name">Full Name</label>
      <input id="name" name="name" type="text" placeholder="Your name" value="{{NAME}}" required />
      <label for="email">Email</label>
      <input id="email" name="email" type="email" placeholder="you@example.com" value="{{EMAIL}}" required />
      <label for="password">Password</label>
      <input id="password" name="password" type="password" placeholder="At least 6 characters" required />
      <label for="confirm_password">Confirm Password</label>
      <input id="confirm_password" name="confirm_password" type="password" placeholder="Confirm your password" required />
      <button type="submit">Create Account</button>
    </form>
  </section>
  <p class="hint">Already have an account? <a href="/login">Sign in</a></p>
</main>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LOGIN_FAILED;

    #[test]
    fn escape_html_replaces_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn fill_does_not_rescan_substituted_text() {
        let html = fill(
            "<p>{{NAME}}|{{EMAIL}}|{{OTHER}}</p>",
            &[("NAME", "{{EMAIL}}"), ("EMAIL", "ada@example.com")],
        );
        assert_eq!(html, "<p>{{EMAIL}}|ada@example.com|{{OTHER}}</p>");
        assert_eq!(fill("tail {{OPEN", &[]), "tail {{OPEN");
    }

    #[test]
    fn signup_name_with_placeholder_text_is_kept_literal() {
        let html = render_signup(None, "{{EMAIL}}", "ada@example.com");
        assert!(html.contains(r#"id="name" name="name" type="text" placeholder="Your name" value="{{EMAIL}}""#));
        assert_eq!(html.matches("ada@example.com").count(), 1);
    }

    #[test]
    fn login_page_shows_notice_and_keeps_email() {
        let html = render_login(Some(&LOGIN_FAILED), "ada@example.com");
        assert!(html.contains("Please check your credentials and try again."));
        assert!(html.contains(r#"value="ada@example.com""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn dashboard_without_points_hides_stats() {
        let view = DashboardView {
            chart_html: "<div>placeholder</div>",
            count: 0,
            stats: None,
            kind: ChartKind::Line,
        };
        let html = render_dashboard(&view);
        assert!(!html.contains("stat-count"));
        assert!(html.contains("Your chart will appear here"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn dashboard_with_points_shows_stats() {
        let stats = SeriesStats {
            count: 1,
            max: 2.0,
            mean: 2.0,
        };
        let view = DashboardView {
            chart_html: "<svg></svg>",
            count: 1,
            stats: Some(&stats),
            kind: ChartKind::Bar,
        };
        let html = render_dashboard(&view);
        assert!(html.contains(r#"<span class="badge">1 point</span>"#));
        assert!(html.contains(r#"id="stat-max">2.0<"#));
        assert!(html.contains(r#"action="/dashboard/add?view=bar""#));
    }
}
