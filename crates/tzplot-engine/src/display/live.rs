use super::clamp_width;
use crate::Result;
use crate::frame::{FrameSummary, Plotter};
use crate::surface::{CellStyle, DrawSurface};
use chrono::{DateTime, SubsecRound, Utc};
use std::time::Duration;

/// Sleep between polls when no event is pending.
pub const POLL_INTERVAL: Duration = Duration::from_millis(40);

/// An interactive screen the live driver renders onto.
pub trait Screen: DrawSurface {
    /// Current size as `(columns, rows)`.
    fn size(&mut self) -> Result<(u16, u16)>;

    /// Wipe the screen and move to the top-left corner.
    fn clear(&mut self, style: &CellStyle) -> Result<()>;

    /// Paint every row from `first_row` to the bottom with `style`.
    fn fill_rows(&mut self, first_row: usize, style: &CellStyle) -> Result<()>;

    /// Make everything drawn so far visible.
    fn present(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Esc,
    CtrlC,
    /// Redraw request.
    CtrlL,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Resize(u16, u16),
    Key(Key),
}

impl ScreenEvent {
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            ScreenEvent::Key(Key::Esc | Key::CtrlC | Key::Char('q'))
        )
    }
}

/// Source of input events. `poll_event` must return immediately.
pub trait EventSource {
    fn poll_event(&mut self) -> Result<Option<ScreenEvent>>;
}

pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    Idle,
    Rendering,
    WaitingForEvent,
    Terminating,
}

/// Single-threaded redraw loop for live mode.
///
/// The driver owns the last rendered size and instant and only redraws when
/// one of them changed, or when a resize or Ctrl+L forced it.
pub struct LiveDriver<'a, S, E, C> {
    plotter: Plotter<'a>,
    screen: S,
    events: E,
    clock: C,
    state: LiveState,
    last_size: Option<(u16, u16)>,
    last_instant: Option<DateTime<Utc>>,
    force_redraw: bool,
    frames: usize,
}

impl<'a, S, E, C> LiveDriver<'a, S, E, C>
where
    S: Screen,
    E: EventSource,
    C: Clock,
{
    pub fn new(plotter: Plotter<'a>, screen: S, events: E, clock: C) -> Self {
        Self {
            plotter,
            screen,
            events,
            clock,
            state: LiveState::Idle,
            last_size: None,
            last_instant: None,
            force_redraw: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> Result<LiveState> {
        self.state = match self.state {
            LiveState::Idle => LiveState::Rendering,
            LiveState::Rendering => {
                self.render_if_needed()?;
                LiveState::WaitingForEvent
            }
            LiveState::WaitingForEvent => self.wait_for_event()?,
            LiveState::Terminating => LiveState::Terminating,
        };
        Ok(self.state)
    }

    /// One render check plus one event check. Returns `false` once the
    /// driver is terminating.
    pub fn tick(&mut self) -> Result<bool> {
        if self.state == LiveState::Idle {
            self.step()?;
        }
        while self.state != LiveState::Terminating {
            if self.step()? == LiveState::Rendering {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run until a quit key arrives or rendering fails.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("live mode started");
        while self.tick()? {}
        tracing::debug!(frames = self.frames, "live mode finished");
        Ok(())
    }

    fn render_if_needed(&mut self) -> Result<Option<FrameSummary>> {
        let size = self.screen.size()?;
        let instant = self.clock.now().trunc_subsecs(0);

        if !self.force_redraw
            && self.last_size == Some(size)
            && self.last_instant == Some(instant)
        {
            return Ok(None);
        }

        let background = self.plotter.background_style();
        let request = tzplot_types::PlotRequest::now_at(instant);
        let width = clamp_width(Some(usize::from(size.0)));

        self.screen.clear(&background)?;
        let summary = self.plotter.render(&request, width, &mut self.screen)?;
        self.screen.fill_rows(summary.rows, &background)?;
        self.screen.present()?;

        tracing::trace!(?size, %instant, "redrew live frame");
        self.last_size = Some(size);
        self.last_instant = Some(instant);
        self.force_redraw = false;
        self.frames += 1;
        Ok(Some(summary))
    }

    fn wait_for_event(&mut self) -> Result<LiveState> {
        match self.events.poll_event()? {
            Some(event) if event.is_quit() => {
                tracing::debug!(?event, "quit requested");
                return Ok(LiveState::Terminating);
            }
            Some(ScreenEvent::Resize(columns, rows)) => {
                tracing::debug!(columns, rows, "terminal resized");
                self.force_redraw = true;
            }
            Some(ScreenEvent::Key(Key::CtrlL)) => {
                self.force_redraw = true;
            }
            Some(ScreenEvent::Key(_)) => {}
            None => self.clock.sleep(POLL_INTERVAL),
        }
        Ok(LiveState::Rendering)
    }
}
