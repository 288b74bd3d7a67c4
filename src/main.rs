#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use finance_course::CourseApp;

    pretty_env_logger::init();
    log::info!("Iniciando curso de finanzas v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Financial Literacy Course",
        options,
        Box::new(|_cc| Ok(Box::new(CourseApp::new()))),
    )
}

// En WASM arranca `web::start` desde la librería
#[cfg(target_arch = "wasm32")]
fn main() {}
