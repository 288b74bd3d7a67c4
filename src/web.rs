// src/web.rs
//
// Punto de entrada del build WASM: la app se dibuja en un <canvas> y,
// si la página tiene un <video id="financial-video">, lo usa como reproductor.

use crate::CourseApp;
use crate::config::read_config_embedded;
use crate::data::read_questions_embedded;
use crate::media::{MediaSurface, SimulatedVideo, WebVideo};
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "course-canvas";
const VIDEO_ID: &str = "financial-video";

#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("sin document: no se puede arrancar la app");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas #{CANVAS_ID}");
            return;
        };

        let config = read_config_embedded();
        let video: Box<dyn MediaSurface> = match WebVideo::from_element_id(VIDEO_ID) {
            Some(video) => Box::new(video),
            None => {
                log::warn!("sin <video id=\"{VIDEO_ID}\">, usando reproductor simulado");
                Box::new(SimulatedVideo::new(config.video_length_secs))
            }
        };
        let app = CourseApp::with_parts(config, read_questions_embedded(), video);

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;
        if let Err(e) = result {
            log::error!("no se pudo iniciar eframe: {e:?}");
        }
    });
}
