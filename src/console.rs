//! Line-oriented console shared by the menus and the timed runner.
//!
//! Input arrives as whole lines over a channel. On a real terminal the
//! channel is fed by a detached thread blocked on stdin, so a pending read
//! never holds up the async side and is simply abandoned at process exit.

use std::io::{self, BufRead, Stdout, Write};
use std::thread;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use log::{debug, warn};
use tokio::sync::mpsc;

pub struct Console<W> {
    lines: mpsc::UnboundedReceiver<String>,
    out: W,
    styled: bool,
}

impl Console<Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || forward_lines(io::stdin().lock(), &tx));

        let out = io::stdout();
        let styled = out.is_tty();
        Self::new(rx, out).styled(styled)
    }
}

/// Sends each line of `reader` until EOF, an I/O error or a dropped receiver.
///
/// Bytes that are not UTF-8 are replaced rather than ending input, so a
/// garbled line is just one more invalid answer.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                if tx.send(line.to_string()).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }
}

impl<W: Write> Console<W> {
    pub fn new(lines: mpsc::UnboundedReceiver<String>, out: W) -> Self {
        Self {
            lines,
            out,
            styled: false,
        }
    }

    /// Enables coloured verdicts.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Waits for the next line. `None` once input has ended.
    pub async fn read_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }

    /// Drops lines that were typed before they were asked for.
    pub fn discard_pending(&mut self) -> usize {
        let mut discarded = 0;
        while self.lines.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            debug!("Discarded {} stale input line(s)", discarded);
        }
        discarded
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.out, "{}", text.as_ref())?;
        self.out.flush()
    }

    pub fn say_colored(&mut self, text: impl AsRef<str>, color: Color) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", text.as_ref().with(color).bold())
        } else {
            self.say(text)
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}
