use std::env;

/// Read access to process environment variables.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;

    /// Like [`var`](Self::var), trimmed; an unset, non-unicode or blank value is `None`.
    fn non_empty(&self, key: &str) -> Option<String> {
        let value = self.var(key).ok()?;
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
