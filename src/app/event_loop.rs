use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, input, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// loop encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - texplot requires an interactive terminal")?;
        drop(init_scope);

        let mut model = match self.expression {
            Some(ref expression) => Model::with_expression(self.range, expression),
            None => Model::new(self.range),
        };

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;
        let mut had_toast = false;

        loop {
            // Repaint once when a toast expires so it disappears on time.
            let has_toast = model.active_toast().is_some();
            if had_toast && !has_toast {
                needs_render = true;
            }
            had_toast = has_toast;

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                let event = event::read()?;
                if matches!(event, crossterm::event::Event::Resize(..)) {
                    needs_render = true;
                }
                if let Some(msg) = input::handle_event(&event) {
                    crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
                    update(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = input::handle_event(&event::read()?) {
                        drained += 1;
                        update(model, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            // The expression changed: notify the curve evaluator before
            // the renderer sees the new state.
            if model.take_changed() {
                let sample_start = Instant::now();
                model.refresh_curve();
                crate::perf::log_event(
                    "curve.refresh",
                    format!(
                        "frame={} sample_ms={:.3} points={}",
                        frame_idx,
                        sample_start.elapsed().as_secs_f64() * 1000.0,
                        model.curve.as_ref().map_or(0, Vec::len)
                    ),
                );
                needs_render = true;
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::view(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
