use anyhow::Result;
use common::{GameEvent, GameView, Presenter};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::time::Duration;

use crate::audio::{AudioCue, AudioSink};
use crate::render::arena::ArenaRenderer;
use crate::render::particles::ParticleSystem;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::RenderConfig;
use crate::replay::recorder::ReplayRecorder;
use crate::views::{self, Screen};

type TitleHook = Box<dyn FnMut(&str)>;

/// Draws the game into a ratatui terminal and fans events out to
/// particles, audio and the optional replay recorder.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    arena: ArenaRenderer<StandardRenderer>,
    render_config: RenderConfig,
    particles: ParticleSystem,
    frame_dt: f32,
    audio: Option<Box<dyn AudioSink>>,
    recorder: Option<ReplayRecorder>,
    title_hook: Option<TitleHook>,
    title: String,
    fps: u32,
    frame: u64,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>, render_config: RenderConfig, frame_duration: Duration) -> Self {
        Self {
            terminal,
            arena: ArenaRenderer::new(StandardRenderer::new(render_config.chars_per_cell)),
            render_config,
            particles: ParticleSystem::new(),
            frame_dt: frame_duration.as_secs_f32(),
            audio: None,
            recorder: None,
            title_hook: None,
            title: String::new(),
            fps: 0,
            frame: 0,
        }
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_recorder(mut self, recorder: ReplayRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Called with the new window title on every stats report
    pub fn with_title_hook(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.title_hook = Some(Box::new(hook));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Stamp the final state on the recording and write it out.
    /// Returns the replay path when recording was enabled.
    pub fn finish(&mut self, view: &GameView<'_>) -> Result<Option<PathBuf>> {
        let Some(recorder) = self.recorder.as_mut() else {
            return Ok(None);
        };

        recorder.set_final_state(view.score, view.snake.size(), view.status);
        recorder.save().map(Some)
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::FoodEaten { position } => {
                self.particles.emit_food_particles(position.x, position.y);
            }
            GameEvent::GameRestarted => self.particles.clear(),
            GameEvent::StatusChanged { from, to } => {
                tracing::info!("Status {:?} -> {:?}", from, to);
            }
            _ => {}
        }

        if let (Some(audio), Some(cue)) = (self.audio.as_mut(), AudioCue::for_event(event)) {
            audio.play(cue);
        }

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record_event(self.frame, event.clone());
        }
    }

    fn render(&mut self, view: &GameView<'_>) -> Result<()> {
        self.particles.update(self.frame_dt);

        let lines = self
            .arena
            .render(view, self.particles.particles(), &self.render_config)
            .into_lines();
        let screen = Screen {
            status: view.status,
            score: view.score,
            length: view.snake.size(),
            fps: self.fps,
            arena_lines: &lines,
        };

        self.terminal.draw(|frame| views::draw(frame, &screen))?;
        self.frame += 1;
        Ok(())
    }

    fn report_stats(&mut self, score: u32, frames: u32) {
        self.fps = frames;
        self.title = format!("Snake | Score: {} | FPS: {}", score, frames);
        tracing::debug!("{}", self.title);
        if let Some(hook) = self.title_hook.as_mut() {
            hook(&self.title);
        }
    }
}
