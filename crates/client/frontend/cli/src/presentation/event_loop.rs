//! Pumps telemetry events, user input, and rendering for the CLI.
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::error::RecvError;
use tokio::{
    sync::broadcast,
    time::{self, Duration},
};

use client_frontend_core::{DisplaySet, EventConsumer};
use poller::TelemetryEvent;

use crate::presentation::{Tui, ui};

const INPUT_INTERVAL_MS: u64 = 16;

pub struct EventLoop<C>
where
    C: EventConsumer,
{
    event_rx: broadcast::Receiver<TelemetryEvent>,
    consumer: C,
    display: DisplaySet,
    message_panel_height: u16,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        event_rx: broadcast::Receiver<TelemetryEvent>,
        consumer: C,
        message_panel_height: u16,
    ) -> Self {
        Self {
            event_rx,
            consumer,
            display: DisplaySet::placeholder(),
            message_panel_height,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    if self.handle_telemetry_channel(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(INPUT_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    fn handle_telemetry_channel(
        &mut self,
        result: Result<TelemetryEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if self.collect_events(event) {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Telemetry stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale telemetry frames", skipped);
                Ok(false)
            }
        }
    }

    /// Apply the received event and drain any queued ones so the view
    /// always reflects the most recently completed poll.
    fn collect_events(&mut self, initial: TelemetryEvent) -> bool {
        let mut should_render = self.apply(initial);

        while let Ok(event) = self.event_rx.try_recv() {
            should_render |= self.apply(event);
        }

        should_render
    }

    fn apply(&mut self, event: TelemetryEvent) -> bool {
        let impact = self.consumer.on_event(&event);
        self.display = DisplaySet::from_event(&event);
        impact.requires_redraw
    }

    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key),
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.consumer.message_log_mut().push_text("Quitting...");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &self.display,
            self.consumer.message_log(),
            self.message_panel_height,
        )
    }
}
