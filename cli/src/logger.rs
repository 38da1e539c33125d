use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;
use wristnote_core::paths;

pub struct WristnoteLogger {
    max_level: Level,
    started: Instant,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, usize>>,
}

impl WristnoteLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let max_level = if quiet {
            Level::Info
        } else if verbose {
            Level::Trace
        } else {
            Level::Debug
        };

        Self {
            max_level,
            started: Instant::now(),
            log_file: Mutex::new(Self::open_log_file()),
            target_colors: Mutex::new(HashMap::new()),
        }
    }

    fn open_log_file() -> Option<File> {
        let path = paths::log_file_path()?;
        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
                None
            }
        }
    }

    fn level_tag(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target<'a>(record: &Record<'a>) -> Option<&'a str> {
        let target = record.target();
        if target.is_empty() {
            None
        } else {
            target.rsplit("::").next()
        }
    }

    fn colored_target(&self, target: &str) -> ColoredString {
        let palette: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
        ];

        let index = match self.target_colors.lock() {
            Ok(mut colors) => {
                let next = colors.len() % palette.len();
                *colors.entry(target.to_string()).or_insert(next)
            }
            Err(_) => 0,
        };
        palette[index](target).dimmed()
    }

    fn format_plain(&self, record: &Record) -> String {
        let elapsed = self.started.elapsed().as_millis();
        let tag = Self::level_tag(record.level());
        match Self::short_target(record) {
            Some(target) => format!("{elapsed:>7}ms {tag} [{target}] {}", record.args()),
            None => format!("{elapsed:>7}ms {tag} {}", record.args()),
        }
    }

    fn format_colored(&self, record: &Record) -> String {
        let elapsed = format!("{:>7}ms", self.started.elapsed().as_millis()).dimmed();
        let tag = Self::level_tag(record.level());
        let target = Self::short_target(record)
            .map(|target| format!("[{}] ", self.colored_target(target)))
            .unwrap_or_default();

        let line = format!("{tag} {target}{}", record.args());
        match record.level() {
            Level::Error => format!("{elapsed} {}", line.red().bold()),
            Level::Warn => format!("{elapsed} {}", line.yellow().bold()),
            Level::Info => format!("{elapsed} {} {target}{}", tag.green().bold(), record.args()),
            Level::Debug => format!("{elapsed} {} {target}{}", tag.blue().bold(), record.args()),
            Level::Trace => format!("{elapsed} {} {target}{}", tag.white().bold(), record.args()),
        }
    }
}

impl Log for WristnoteLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // stdout carries the console prompt, so log lines go to stderr
        eprintln!("{}", self.format_colored(record));

        if let Ok(mut file) = self.log_file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = writeln!(file, "{}", self.format_plain(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.log_file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = WristnoteLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
