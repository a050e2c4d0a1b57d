use anyhow::Result;
use devguide_core::GuideService;

/// Binds the listener before starting so `--port 0` reports the real port.
pub fn run(service: GuideService, port: u16) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();

        println!("devguide HTTP API → http://localhost:{actual_port}");

        tokio::select! {
            res = devguide_server::serve_on(service, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
