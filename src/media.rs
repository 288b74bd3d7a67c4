// src/media.rs
//
// Superficie de reproducción: lo que el resto de la app necesita de un vídeo.

pub trait MediaSurface {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64);
    fn pause(&mut self);
    fn play(&mut self);
    fn is_paused(&self) -> bool;
    fn duration(&self) -> f64;
    /// Observación periódica: `Some(posición)` si ha avanzado desde la última
    /// llamada (equivalente a un evento `timeupdate`).
    fn time_update(&mut self, now: f64) -> Option<f64>;
}

/// Reproductor simulado para el build nativo: el tiempo de reproducción
/// avanza con el reloj de pared mientras no está en pausa.
#[derive(Debug, Clone)]
pub struct SimulatedVideo {
    position: f64,
    length: f64,
    paused: bool,
    last_tick: Option<f64>,
}

impl SimulatedVideo {
    pub fn new(length: f64) -> Self {
        Self {
            position: 0.0,
            length: length.max(0.0),
            paused: true,
            last_tick: None,
        }
    }

    fn advance(&mut self, now: f64) -> Option<f64> {
        let last = self.last_tick.replace(now);
        if self.paused {
            return None;
        }
        let dt = (now - last.unwrap_or(now)).max(0.0);
        if dt == 0.0 {
            return None;
        }
        self.position = (self.position + dt).min(self.length);
        if self.position >= self.length {
            self.paused = true;
        }
        Some(self.position)
    }
}

impl MediaSurface for SimulatedVideo {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs.clamp(0.0, self.length);
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn play(&mut self) {
        if self.position >= self.length {
            self.position = 0.0;
        }
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> f64 {
        self.length
    }

    fn time_update(&mut self, now: f64) -> Option<f64> {
        self.advance(now)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebVideo;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::MediaSurface;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlVideoElement;

    /// Un `<video>` real de la página
    pub struct WebVideo {
        video: HtmlVideoElement,
        last_seen: f64,
    }

    impl WebVideo {
        pub fn from_element_id(id: &str) -> Option<Self> {
            let video = web_sys::window()?
                .document()?
                .get_element_by_id(id)?
                .dyn_into::<HtmlVideoElement>()
                .ok()?;
            Some(Self {
                video,
                last_seen: 0.0,
            })
        }
    }

    impl MediaSurface for WebVideo {
        fn current_time(&self) -> f64 {
            self.video.current_time()
        }

        fn set_current_time(&mut self, secs: f64) {
            self.video.set_current_time(secs);
        }

        fn pause(&mut self) {
            if let Err(e) = self.video.pause() {
                log::warn!("el navegador rechazó pause(): {e:?}");
            }
        }

        fn play(&mut self) {
            // p.ej. la política de autoplay del navegador
            if let Err(e) = self.video.play() {
                log::warn!("el navegador rechazó play(): {e:?}");
            }
        }

        fn is_paused(&self) -> bool {
            self.video.paused()
        }

        fn duration(&self) -> f64 {
            self.video.duration()
        }

        fn time_update(&mut self, _now: f64) -> Option<f64> {
            let t = self.video.current_time();
            if self.video.paused() || t == self.last_seen {
                return None;
            }
            self.last_seen = t;
            Some(t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_only_moves_while_playing() {
        let mut video = SimulatedVideo::new(120.0);
        assert_eq!(video.time_update(1.0), None);
        video.play();
        assert_eq!(video.time_update(2.0), Some(1.0));
        assert_eq!(video.time_update(4.5), Some(3.5));
        video.pause();
        assert_eq!(video.time_update(10.0), None);
        video.play();
        assert_eq!(video.time_update(11.0), Some(4.5));
    }

    #[test]
    fn stops_at_end_and_restarts_on_play() {
        let mut video = SimulatedVideo::new(5.0);
        video.play();
        video.time_update(0.0);
        assert_eq!(video.time_update(9.0), Some(5.0));
        assert!(video.is_paused());
        video.play();
        assert_eq!(video.current_time(), 0.0);
    }

    #[test]
    fn seek_is_clamped() {
        let mut video = SimulatedVideo::new(10.0);
        video.set_current_time(-3.0);
        assert_eq!(video.current_time(), 0.0);
        video.set_current_time(30.0);
        assert_eq!(video.current_time(), 10.0);
    }
}
