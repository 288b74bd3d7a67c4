use super::*;
use crate::gate::GateEvent;

impl CourseApp {
    /// Se llama una vez por frame con el reloj de pared de egui.
    /// El temporizador de reanudación se consulta siempre, esté donde esté
    /// el usuario: no hay cancelación.
    pub fn on_frame(&mut self, now: f64) {
        if let Some(t) = self.video.time_update(now) {
            if self.gate.on_time_update(t, now) == GateEvent::Prompt {
                self.video.pause();
                self.prompt_message = Some(self.config.prompt_text.clone());
            }
        }

        if self.gate.poll(now) == GateEvent::Resume {
            self.prompt_message = None;
            self.video.play();
        }
    }

    pub fn toggle_playback(&mut self) {
        if self.video.is_paused() {
            self.video.play();
        } else {
            self.video.pause();
        }
    }

    pub fn restart_video(&mut self) {
        self.video.set_current_time(0.0);
        self.video.play();
    }

    /// Hay algo animándose: vídeo, aviso o gráfico
    pub fn needs_repaint(&self, now: f64) -> bool {
        let chart_animating = self
            .chart_started_at
            .is_some_and(|t0| self.chart.progress(now - t0) < 1.0);
        !self.video.is_paused() || self.gate.prompt_visible() || chart_animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateState;

    fn app() -> CourseApp {
        let mut app = CourseApp::new();
        app.video.play();
        app.on_frame(0.0);
        app
    }

    #[test]
    fn prompt_pauses_then_auto_resumes() {
        let mut app = app();
        app.on_frame(30.0);
        assert!(app.prompt_message.is_none());
        app.on_frame(61.0);
        assert!(app.video.is_paused());
        assert_eq!(
            app.prompt_message.as_deref(),
            Some("Time to answer a question before proceeding!")
        );

        // pausado: el tiempo de reproducción no avanza durante el aviso
        app.on_frame(63.0);
        assert_eq!(app.video.current_time(), 61.0);
        assert!(app.prompt_message.is_some());

        app.on_frame(64.0);
        assert!(app.prompt_message.is_none());
        assert!(!app.video.is_paused());
        assert_eq!(app.gate.state(), GateState::Prompted);
    }

    #[test]
    fn resume_fires_even_after_navigating_away() {
        let mut app = app();
        app.on_frame(61.0);
        app.open_quiz_section();
        app.on_frame(64.5);
        assert!(!app.video.is_paused());
        assert!(app.prompt_message.is_none());
    }

    #[test]
    fn gate_never_fires_twice() {
        let mut app = app();
        app.on_frame(61.0);
        app.on_frame(64.0);
        app.restart_video();
        app.on_frame(65.0);
        app.on_frame(140.0);
        assert!(app.prompt_message.is_none());
        assert!(!app.video.is_paused());
    }
}
