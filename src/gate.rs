// src/gate.rs
//
// Interrupción única de la reproducción para invitar al quiz.

use crate::config::CourseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    NotYetPrompted,
    Prompted, // terminal
}

/// Lo que el llamador debe hacer tras una observación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    None,
    /// Pausar el vídeo y mostrar el aviso
    Prompt,
    /// Ocultar el aviso y reanudar
    Resume,
}

#[derive(Debug, Clone)]
pub struct PlaybackGate {
    state: GateState,
    threshold_secs: f64,
    visible_secs: f64,
    /// Reloj de pared (no de reproducción) en el que se reanuda
    resume_at: Option<f64>,
}

impl PlaybackGate {
    pub fn new(threshold_secs: f64, visible_secs: f64) -> Self {
        Self {
            state: GateState::NotYetPrompted,
            threshold_secs,
            visible_secs,
            resume_at: None,
        }
    }

    pub fn from_config(config: &CourseConfig) -> Self {
        Self::new(config.gate_threshold_secs, config.prompt_visible_secs)
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn prompt_visible(&self) -> bool {
        self.resume_at.is_some()
    }

    /// Observación periódica del tiempo de reproducción.
    pub fn on_time_update(&mut self, current_time: f64, now: f64) -> GateEvent {
        if self.state == GateState::Prompted || current_time <= self.threshold_secs {
            return GateEvent::None;
        }
        self.state = GateState::Prompted;
        self.resume_at = Some(now + self.visible_secs);
        log::info!("quiz gate disparado en t={current_time:.1}s");
        GateEvent::Prompt
    }

    /// Temporizador de un solo disparo; sin cancelación.
    pub fn poll(&mut self, now: f64) -> GateEvent {
        match self.resume_at {
            Some(deadline) if now >= deadline => {
                self.resume_at = None;
                log::debug!("aviso del quiz oculto, reanudando reproducción");
                GateEvent::Resume
            }
            _ => GateEvent::None,
        }
    }
}

impl Default for PlaybackGate {
    fn default() -> Self {
        Self::from_config(&CourseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_time_first_exceeds_threshold() {
        let mut gate = PlaybackGate::default();
        let events: Vec<GateEvent> = [10.0, 30.0, 61.0]
            .iter()
            .enumerate()
            .map(|(i, t)| gate.on_time_update(*t, i as f64))
            .collect();
        assert_eq!(events, vec![GateEvent::None, GateEvent::None, GateEvent::Prompt]);
        assert_eq!(gate.state(), GateState::Prompted);

        for t in [62.0, 90.0, 200.0] {
            assert_eq!(gate.on_time_update(t, 10.0), GateEvent::None);
        }
    }

    #[test]
    fn exactly_sixty_seconds_does_not_fire() {
        let mut gate = PlaybackGate::default();
        assert_eq!(gate.on_time_update(60.0, 0.0), GateEvent::None);
        assert_eq!(gate.state(), GateState::NotYetPrompted);
    }

    #[test]
    fn resumes_after_three_wall_clock_seconds() {
        let mut gate = PlaybackGate::default();
        assert_eq!(gate.on_time_update(61.0, 100.0), GateEvent::Prompt);
        assert!(gate.prompt_visible());
        assert_eq!(gate.poll(101.0), GateEvent::None);
        assert_eq!(gate.poll(102.9), GateEvent::None);
        assert_eq!(gate.poll(103.0), GateEvent::Resume);
        assert!(!gate.prompt_visible());
        assert_eq!(gate.poll(200.0), GateEvent::None);
    }

    #[test]
    fn does_not_rearm_after_seek_back() {
        let mut gate = PlaybackGate::default();
        gate.on_time_update(61.0, 0.0);
        gate.poll(5.0);
        // p.ej. tras suspender el quiz el vídeo vuelve a 0
        assert_eq!(gate.on_time_update(0.0, 6.0), GateEvent::None);
        assert_eq!(gate.on_time_update(61.0, 70.0), GateEvent::None);
        assert!(!gate.prompt_visible());
    }
}
