//! Paints rendered lines onto the terminal with crossterm.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::render::{Line, Tone};

const PROMPT: &str = "> ";
const DEFAULT_HINT: &str = "type a command, or help";

pub struct TerminalSurface {
    stdout: Stdout,
    prompt_row: u16,
    dark_mode: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prompt_row: 0,
            dark_mode: false,
        }
    }

    /// Redraws the whole screen and leaves the cursor on the prompt.
    pub fn draw(
        &mut self,
        lines: &[Line],
        dark_mode: bool,
        placeholder: Option<&str>,
    ) -> io::Result<()> {
        self.dark_mode = dark_mode;
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(
                self.stdout,
                MoveTo(0, row),
                SetForegroundColor(tone_color(line.tone, dark_mode)),
            )?;
            if matches!(line.tone, Tone::Title | Tone::Heading) {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.prompt_row = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
        self.draw_prompt(placeholder)
    }

    /// Repaints only the prompt row; used by the placeholder animation.
    pub fn draw_prompt(&mut self, placeholder: Option<&str>) -> io::Result<()> {
        queue!(
            self.stdout,
            MoveTo(0, self.prompt_row),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(tone_color(Tone::Accent, self.dark_mode)),
            Print(PROMPT),
            SetForegroundColor(tone_color(Tone::Muted, self.dark_mode)),
            Print(placeholder.unwrap_or(DEFAULT_HINT)),
            SetAttribute(Attribute::Reset),
            MoveTo(PROMPT.len() as u16, self.prompt_row),
        )?;
        self.stdout.flush()
    }

    /// Prints a one-off message below the prompt, e.g. parse errors or help.
    pub fn draw_message(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        for (offset, line) in text.lines().enumerate() {
            let row = self.prompt_row.saturating_add(2 + offset as u16);
            queue!(
                self.stdout,
                MoveTo(0, row),
                Clear(ClearType::CurrentLine),
                SetForegroundColor(tone_color(tone, self.dark_mode)),
                Print(line),
                SetAttribute(Attribute::Reset),
            )?;
        }
        queue!(self.stdout, MoveTo(PROMPT.len() as u16, self.prompt_row))?;
        self.stdout.flush()
    }
}

fn tone_color(tone: Tone, dark_mode: bool) -> Color {
    match (tone, dark_mode) {
        (Tone::Title, _) => Color::Cyan,
        (Tone::Heading, true) | (Tone::Body, true) => Color::White,
        (Tone::Heading, false) | (Tone::Body, false) => Color::Black,
        (Tone::Muted, true) => Color::Grey,
        (Tone::Muted, false) => Color::DarkGrey,
        (Tone::Accent, true) => Color::Magenta,
        (Tone::Accent, false) => Color::DarkMagenta,
        (Tone::Success, _) => Color::Green,
        (Tone::Error, _) => Color::Red,
        (Tone::Warning, _) => Color::Yellow,
        (Tone::Info, _) => Color::Blue,
    }
}
