use crate::auth::{self, LOGIN_FAILED, SIGNUP_UNAVAILABLE};
use crate::chart::{render_chart, ChartKind};
use crate::dashboard::{load_series, submit_value, SubmitError};
use crate::models::{AddValueForm, DashboardQuery, LoginForm, SignupForm};
use crate::series::Series;
use crate::session::{self, Session};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::{render_dashboard, render_login, render_signup, DashboardView};
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info, warn};

pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub async fn index() -> Redirect {
    Redirect::to(DASHBOARD_ROUTE)
}

pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let kind = ChartKind::from_query(query.view.as_deref());
    let series = match load_series(&state.api, &session).await {
        Ok(series) => series,
        Err(err) => {
            error!(user_id = %session.user_id, "failed to load series: {err}");
            Series::new()
        }
    };

    let stats = build_stats(&series);
    let chart_html = render_chart(&series, kind);
    Html(render_dashboard(&DashboardView {
        chart_html: &chart_html,
        count: series.len(),
        stats: stats.as_ref(),
        kind,
    }))
}

/// Always lands back on the dashboard, which re-fetches the authoritative series.
pub async fn add_value(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
    Form(form): Form<AddValueForm>,
) -> Redirect {
    match submit_value(&state.api, &session, &form.value).await {
        Ok(series) => info!(user_id = %session.user_id, points = series.len(), "value added"),
        Err(SubmitError::Input(err)) => warn!(user_id = %session.user_id, "rejected value: {err}"),
        Err(SubmitError::Api(err)) => error!(user_id = %session.user_id, "failed to add value: {err}"),
    }

    let kind = ChartKind::from_query(query.view.as_deref());
    Redirect::to(&format!("{DASHBOARD_ROUTE}?view={}", kind.as_str()))
}

pub async fn login_page(jar: CookieJar) -> Response {
    if Session::from_jar(&jar).is_some() {
        return Redirect::to(DASHBOARD_ROUTE).into_response();
    }
    Html(render_login(None, "")).into_response()
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Err(notice) = auth::validate_login(&form) {
        return Html(render_login(Some(&notice), &form.email)).into_response();
    }

    match state.api.login(form.email.trim(), &form.password).await {
        Ok(user_id) => {
            info!(%user_id, "signed in");
            (session::start(jar, user_id), Redirect::to(DASHBOARD_ROUTE)).into_response()
        }
        Err(err) => {
            warn!(email = %form.email, "login failed: {err}");
            Html(render_login(Some(&LOGIN_FAILED), &form.email)).into_response()
        }
    }
}

pub async fn signup_page() -> Html<String> {
    Html(render_signup(None, "", ""))
}

pub async fn signup(Form(form): Form<SignupForm>) -> Html<String> {
    let notice = match auth::validate_signup(&form) {
        Ok(()) => {
            warn!(email = %form.email, "signup submitted but account creation is not available");
            SIGNUP_UNAVAILABLE
        }
        Err(notice) => notice,
    };
    Html(render_signup(Some(&notice), &form.name, &form.email))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (session::end(jar), Redirect::to(session::LOGIN_ROUTE))
}
