use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::Record;

use crate::config::Settings;
use crate::errors::ChatError;

/// Appends every record to the log file; mirrors it to `echo` when
/// `mirror` is set.
struct TeeWriter<F: Write, E: Write> {
    file: F,
    echo: E,
    mirror: bool,
}

impl<F: Write, E: Write> Write for TeeWriter<F, E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.mirror {
            self.echo.write_all(buf)?;
        }
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.mirror {
            self.echo.flush()?;
        }
        self.file.flush()
    }
}

fn write_record<W: Write>(
    out: &mut W,
    timestamp: impl Display,
    record: &Record,
) -> io::Result<()> {
    writeln!(
        out,
        "{} - {} - {} - {}",
        timestamp,
        record.target(),
        record.level(),
        record.args()
    )
}

fn open_log_file(path: impl AsRef<Path>) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// The CLI passes `echo = false` to keep log lines out of the conversation.
pub fn init_logging(settings: &Settings, echo: bool) -> Result<(), ChatError> {
    let file = open_log_file(&settings.log_file)?;

    let default_filter = settings.log_level.to_string().to_lowercase();

    Builder::from_env(Env::new().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            write_record(buf, timestamp, record)
        })
        .target(Target::Pipe(Box::new(TeeWriter {
            file,
            echo: io::stderr(),
            mirror: echo,
        })))
        .try_init()
        .map_err(|e| ChatError::ConfigError(format!("logger already initialized: {}", e)))
}
