//! The interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use mcform::{parse_triple, FormColor, Rgb};

/// Which of the two conversions a menu choice selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// 8-bit RGB channels to a normalized form color.
    RgbToForm,
    /// A normalized form color back to 8-bit RGB channels.
    FormToRgb,
}

/// The interactive shell.
///
/// Owns its input and output streams for the whole program lifetime and
/// walks one menu cycle at a time: show the menu, read a choice, read a
/// color, convert and report. Problems with the input are reported on the
/// output stream and never end the loop; only stream failures do.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run menu cycles until the input stream ends.
    pub fn run(&mut self) -> Result<()> {
        while self.cycle()? {}
        Ok(())
    }

    /// Run a single menu cycle and return.
    pub fn run_once(&mut self) -> Result<()> {
        self.cycle()?;
        Ok(())
    }

    /// One full menu cycle. Returns `false` once the input stream is closed.
    fn cycle(&mut self) -> Result<bool> {
        self.show_menu()?;

        let choice = match self.read_line()? {
            Some(choice) => choice,
            None => return Ok(false),
        };
        let direction = match choice.trim() {
            "0" => Direction::RgbToForm,
            "1" => Direction::FormToRgb,
            other => {
                log::debug!("invalid menu choice {:?}", other);
                writeln!(self.output, "Invalid choice, enter 0 or 1.")?;
                return Ok(true);
            }
        };

        let line = match self.prompt_color(direction)? {
            Some(line) => line,
            None => return Ok(false),
        };
        self.convert(direction, line.trim())?;

        Ok(true)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "RGB / Bedrock form color converter")?;
        writeln!(self.output, "0 = Convert RGB to form color")?;
        writeln!(self.output, "1 = Convert form color to RGB")?;
        writeln!(self.output, "Press Ctrl+C to exit.")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt_color(&mut self, direction: Direction) -> Result<Option<String>> {
        match direction {
            Direction::RgbToForm => {
                write!(
                    self.output,
                    "Enter a color as R, G, B (0 to 255), e.g. 255, 150, 0: "
                )?;
            }
            Direction::FormToRgb => {
                write!(
                    self.output,
                    "Enter a form color as R, G, B (0.0 to 1.0), e.g. 1, 0.588, 0: "
                )?;
            }
        }
        self.output.flush()?;
        self.read_line()
    }

    /// Parse and convert one line of input, reporting any problem with it.
    fn convert(&mut self, direction: Direction, line: &str) -> Result<()> {
        let components = match parse_triple(line) {
            Ok(components) => components,
            Err(err) => {
                log::debug!("rejected color input {:?}: {}", line, err);
                writeln!(
                    self.output,
                    "Invalid input, enter a color as \"R, G, B\" ({}).",
                    err
                )?;
                return Ok(());
            }
        };

        match direction {
            Direction::RgbToForm => match FormColor::from_rgb(components) {
                Ok(form) => writeln!(self.output, "Form color: {}", form)?,
                Err(err) => writeln!(self.output, "Invalid color: {}.", err)?,
            },
            Direction::FormToRgb => match Rgb::from_form(components) {
                Ok(rgb) => writeln!(self.output, "RGB color: {}", rgb)?,
                Err(err) => writeln!(self.output, "Invalid color: {}.", err)?,
            },
        }

        Ok(())
    }

    /// Read one line, or `None` once the stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("input stream closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
