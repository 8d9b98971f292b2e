use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::infrastructure::shared_generator;
use crate::web::{self, AppState};
use crate::workflow::SessionStore;

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let generator = shared_generator(&config).await;
        let sessions = SessionStore::with_limits(
            chrono::Duration::minutes(config.session_idle_minutes),
            config.max_sessions,
        );
        let router = web::router(AppState::with_sessions(generator, sessions));

        Ok(Self { config, router })
    }

    /// 启动 Web 服务，直到收到 Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", self.config.bind_addr))?;

        info!("🌐 服务已启动: http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web 服务异常退出")?;

        info!("👋 服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 学习助手启动");
    info!("🤖 模型: {} @ {}", config.llm_model_name, config.llm_api_base_url);
    info!("🌡️ 采样温度: {}", config.sampling_temperature);
    info!(
        "🗂️ 会话上限: {} 个，闲置 {} 分钟过期",
        config.max_sessions, config.session_idle_minutes
    );
    info!("{}", "=".repeat(60));
}
