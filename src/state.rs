use crate::config::AppConfig;
use crate::session::SessionProvider;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionProvider,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let sessions = SessionProvider::connect(&config).await?;
        Ok(Self { sessions })
    }
}
