use crate::window::RowWindow;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ecaview_lib::MAX_SCALE;
use log::debug;
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

const DEAD_COLOR: Color = Color::White;
const ALIVE_COLOR: Color = Color::Black;

struct App {
    window: RowWindow,
    scale: usize,
    frame: Duration,
    paused: bool,
}

impl App {
    fn new(window: RowWindow, scale: usize, fps: u32) -> Self {
        App {
            window,
            scale: scale.clamp(1, MAX_SCALE),
            frame: Duration::from_secs(1) / fps.max(1),
            paused: false,
        }
    }

    fn status(&self) -> String {
        let help = if self.paused {
            "Paused. [space] resume  [n] next row  [q] quit"
        } else {
            "Running. [space] pause  [q] quit"
        };
        format!(
            " Rule: {}  Gen: {}  {}",
            self.window.rule(),
            self.window.generation(),
            help
        )
    }

    fn draw(&self, stdout: &mut Stdout) -> io::Result<()> {
        let (cols, lines) = terminal::size()?;
        let status: String = self.status().chars().take(cols as usize).collect();
        queue!(
            stdout,
            MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(format!("{:width$}", status, width = cols as usize)),
            SetAttribute(Attribute::Reset)
        )?;

        let cell_width = 2 * self.scale;
        let blank = " ".repeat(cell_width);
        let max_cells = cols as usize / cell_width;
        let mut line = 1;
        for row in self.window.rows() {
            for _ in 0..self.scale {
                if line >= lines {
                    break;
                }
                queue!(stdout, MoveTo(0, line))?;
                let mut last = None;
                for &state in row.iter().take(max_cells) {
                    if last != Some(state) {
                        let color = if state.is_alive() {
                            ALIVE_COLOR
                        } else {
                            DEAD_COLOR
                        };
                        queue!(stdout, SetBackgroundColor(color))?;
                        last = Some(state);
                    }
                    queue!(stdout, Print(&blank))?;
                }
                queue!(stdout, ResetColor, Clear(ClearType::UntilNewLine))?;
                line += 1;
            }
        }
        if line < lines {
            queue!(stdout, MoveTo(0, line), Clear(ClearType::FromCursorDown))?;
        }
        stdout.flush()
    }

    /// Returns when the user quits.
    fn main_loop(&mut self, stdout: &mut Stdout) -> io::Result<()> {
        let mut next_frame = Instant::now() + self.frame;
        loop {
            self.draw(stdout)?;
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                if !self.paused {
                    self.window.advance();
                }
                next_frame = Instant::now() + self.frame;
                continue;
            }
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.paused = !self.paused;
                        debug!("Paused: {}", self.paused);
                    }
                    KeyCode::Char('n') | KeyCode::Right if self.paused => self.window.advance(),
                    _ => (),
                },
                Event::Resize(..) => queue!(stdout, Clear(ClearType::All))?,
                _ => (),
            }
        }
        Ok(())
    }
}

/// Shows the rows in the terminal until the user quits.
///
/// The terminal is restored even if drawing fails.
pub(crate) fn run_with_tui(window: RowWindow, scale: usize, fps: u32) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    let result = execute!(stdout, EnterAlternateScreen, Hide)
        .and_then(|_| App::new(window, scale, fps).main_loop(&mut stdout));
    let leave = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
    let raw = terminal::disable_raw_mode();
    result.and(leave).and(raw)
}
