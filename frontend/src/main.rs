use leavedesk_frontend::{config, router};
use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let perf = web_sys::window().and_then(|w| w.performance());
    let t0 = perf.as_ref().map(|p| p.now());
    log::info!("starting leave desk frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        match (perf.as_ref(), t0) {
            (Some(p), Some(start)) => {
                log::info!("runtime config initialized ({} ms)", p.now() - start)
            }
            _ => log::info!("runtime config initialized"),
        }
        router::mount_app();
    });
}
