//! Console input and output
//!
//! Songs and the prompt are written to stdout. Commands are read one line at
//! a time: `r` refreshes, `q` quits, anything else is ignored.

use std::io::{self, Write};
use std::sync::Mutex;

use lyricer_core::{PollSignal, SongInfo, SongPresenter};
use lyricer_domain::constants::CONSOLE_PROMPT;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Shown instead of lyrics when none could be fetched.
pub const NO_LYRICS: &str = "(no lyrics found)";

/// Text block shown for a song.
#[must_use]
pub fn render_song(song: &SongInfo) -> String {
    let lyrics = song.lyrics.as_deref().unwrap_or(NO_LYRICS);
    format!("Song: {}, {}\n\n{}\n", song.artist, song.title, lyrics)
}

/// Writes each song to a terminal-like sink.
pub struct ConsolePresenter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsolePresenter {
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self { out: Mutex::new(Box::new(writer)) }
    }
}

impl SongPresenter for ConsolePresenter {
    fn present(&self, song: &SongInfo) {
        let Ok(mut out) = self.out.lock() else {
            warn!("Console writer poisoned; dropping song output");
            return;
        };
        if let Err(err) = out.write_all(render_song(song).as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %err, "Failed to write song to the console");
        }
    }
}

/// Map one console line to a signal.
///
/// Exact, lowercase match after stripping the line terminator.
#[must_use]
pub fn parse_command(line: &str) -> Option<PollSignal> {
    match line.trim_end_matches(['\n', '\r']) {
        "r" => Some(PollSignal::Refresh),
        "q" => Some(PollSignal::Quit),
        _ => None,
    }
}

/// Prompt, read commands and forward them until the user quits.
///
/// End of input is treated as `q`. Returns once `Quit` has been sent or the
/// polling loop has gone away.
///
/// # Errors
/// Propagates I/O errors from reading the input or writing the prompt.
pub async fn read_commands<R, W>(
    mut input: R,
    mut output: W,
    signals: mpsc::Sender<PollSignal>,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        output.write_all(format!("{CONSOLE_PROMPT}\n").as_bytes()).await?;
        output.flush().await?;

        line.clear();
        let signal = if input.read_line(&mut line).await? == 0 {
            debug!("Console input closed");
            PollSignal::Quit
        } else {
            match parse_command(&line) {
                Some(signal) => signal,
                None => continue,
            }
        };

        if signals.send(signal).await.is_err() {
            debug!("Polling loop already stopped");
            return Ok(());
        }
        if signal == PollSignal::Quit {
            return Ok(());
        }
    }
}
