use std::sync::Arc;

use log::info;

use wxpush_bridge::config::Config;
use wxpush_bridge::handlers::AppState;
use wxpush_bridge::wechat::WechatClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let config = Config::from_env();
    info!("Platform API base: {}", config.api_base);

    let state = Arc::new(AppState {
        defaults: config.defaults,
        wechat: WechatClient::new(config.api_base),
    });

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, wxpush_bridge::app(state)).await?;

    Ok(())
}
