//! Jadwal Sholat web page.
//!
//! Build and serve with `dx serve --platform web --features web`.

fn main() {
    jadwal_sholat::logging::init();

    tracing::info!(
        "Starting Jadwal Sholat v{} ({})",
        env!("CARGO_PKG_VERSION"),
        jadwal_sholat::config::GIT_SHA
    );

    dioxus::launch(jadwal_sholat::app::App);
}
