use common::config::resolve_base_url;

/// Base URL of the REST backend. `STUDENT_API_URL` is read when the bundle
/// is compiled; the browser has no process environment to consult later.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("STUDENT_API_URL"))
}
