use std::time::{Duration, Instant};

use blockfall_engine::GameConfig;
use blockfall_runtime::{App, RenderMode, Runtime};
use crossterm::event::Event;
use ratatui::Frame;

use super::screen::PlayScreen;

const FPS: f64 = 60.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(config: &GameConfig, show_grid: bool) -> Self {
        Self {
            screen: PlayScreen::new(config, show_grid),
        }
    }

    pub fn score(&self) -> usize {
        self.screen.score()
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(FPS));
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        self.screen.handle_event(&event, Instant::now());
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        self.screen.update(elapsed);
    }
}
