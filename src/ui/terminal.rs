use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use crossterm::cursor::{self, MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use super::prompt::Prompter;

/// Rows of a choice list visible at once; longer lists scroll.
const PAGE_SIZE: usize = 10;

/// Interactive prompts on the process terminal. Lists are drawn inline below
/// the question and navigated with the arrow keys; free text is read as one
/// line from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, labels: &[&str]) -> Result<usize> {
        if labels.is_empty() {
            bail!("no choices to select from for '{message}'");
        }

        let mut stdout = io::stdout();
        let selected = {
            let _raw = RawModeGuard::enable()?;
            execute!(stdout, cursor::Hide).context("failed to hide cursor")?;
            let result = select_loop(&mut stdout, message, labels);
            execute!(stdout, cursor::Show).context("failed to restore cursor visibility")?;
            result?
        };

        println!("{} {} {}", "?".green(), message.bold(), labels[selected].cyan());
        Ok(selected)
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        print!("{} {} ", "?".green(), message.bold());
        stdout.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("input closed before '{message}' was answered");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Raw mode for the lifetime of the guard, restored on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Draw the list, react to keys until Enter, then erase the list so the
/// caller can print a one-line summary in its place.
fn select_loop<W: Write>(out: &mut W, message: &str, labels: &[&str]) -> Result<usize> {
    let mut view = ListView::new(labels.len());
    let mut drawn = 0;

    loop {
        drawn = redraw(out, message, labels, &view, drawn)?;

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read().context("failed to read key")?
        else {
            continue;
        };

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                erase(out, drawn)?;
                bail!("prompt interrupted");
            }
            KeyCode::Up | KeyCode::Char('k') => view.up(),
            KeyCode::Down | KeyCode::Char('j') => view.down(),
            KeyCode::Enter => {
                erase(out, drawn)?;
                return Ok(view.selected);
            }
            _ => {}
        }
    }
}

/// Render the question and the visible window of choices. Returns the number
/// of lines now on screen so the next frame can overwrite them.
fn redraw<W: Write>(
    out: &mut W,
    message: &str,
    labels: &[&str],
    view: &ListView,
    previous: u16,
) -> Result<u16> {
    erase(out, previous)?;

    queue!(
        out,
        Print(format!("{} {} ", "?".green(), message.bold())),
        Print("(Use arrow keys)".dark_grey()),
        Print("\r\n")
    )?;

    let mut lines = 1;
    for index in view.window() {
        let label = labels[index];
        if index == view.selected {
            queue!(out, Print(format!("❯ {label}").cyan()), Print("\r\n"))?;
        } else {
            queue!(out, Print(format!("  {label}")), Print("\r\n"))?;
        }
        lines += 1;
    }

    if view.len > PAGE_SIZE {
        queue!(
            out,
            Print("(Move up and down to reveal more choices)".dark_grey()),
            Print("\r\n")
        )?;
        lines += 1;
    }

    out.flush().context("failed to draw choices")?;
    Ok(lines)
}

fn erase<W: Write>(out: &mut W, lines: u16) -> Result<()> {
    if lines > 0 {
        queue!(out, MoveUp(lines))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    out.flush().context("failed to clear choices")?;
    Ok(())
}

/// Cursor and scroll state for a choice list. Movement wraps around at both
/// ends.
#[derive(Debug)]
struct ListView {
    len: usize,
    selected: usize,
    offset: usize,
}

impl ListView {
    fn new(len: usize) -> Self {
        Self {
            len,
            selected: 0,
            offset: 0,
        }
    }

    fn up(&mut self) {
        self.selected = if self.selected == 0 {
            self.len - 1
        } else {
            self.selected - 1
        };
        self.scroll();
    }

    fn down(&mut self) {
        self.selected = (self.selected + 1) % self.len;
        self.scroll();
    }

    fn scroll(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + PAGE_SIZE {
            self.offset = self.selected + 1 - PAGE_SIZE;
        }
    }

    fn window(&self) -> std::ops::Range<usize> {
        self.offset..self.len.min(self.offset + PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_shows_every_row() {
        let view = ListView::new(3);
        assert_eq!(view.window(), 0..3);
    }

    #[test]
    fn moving_up_from_top_wraps_to_bottom() {
        let mut view = ListView::new(15);
        view.up();
        assert_eq!(view.selected, 14);
        assert_eq!(view.window(), 5..15);
    }

    #[test]
    fn moving_past_window_scrolls() {
        let mut view = ListView::new(12);
        for _ in 0..PAGE_SIZE {
            view.down();
        }
        assert_eq!(view.selected, 10);
        assert_eq!(view.window(), 1..11);

        view.down();
        view.down();
        assert_eq!(view.selected, 0);
        assert_eq!(view.window(), 0..10);
    }
}
