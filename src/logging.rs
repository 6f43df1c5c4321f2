//! `tracing` subscriber setup.
//!
//! Regular log output goes to stderr, filtered by an `EnvFilter` built from
//! `RUST_LOG` or the configured directive. Validation diagnostics travel on
//! [`DIAGNOSTIC_TARGET`] and are printed verbatim to stdout by a dedicated
//! layer, one line per diagnostic.

use std::{
    env::{VarError, var},
    io::{stderr, stdout},
    result::Result as StdResult,
};

use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{Directive, filter_fn},
    fmt::{self, MakeWriter},
    prelude::*,
    registry::LookupSpan,
};

use crate::{
    config::SongbookSettings,
    error::{DIAGNOSTIC_TARGET, Result, ResultExt},
};

/// Installs the global subscriber described by `settings`.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` or the configured filter directive is
/// malformed, or a global subscriber is already installed.
pub fn init(settings: &SongbookSettings) -> Result<()> {
    let env_filter = log_filter(var(EnvFilter::DEFAULT_ENV), settings)?;
    let silenced = format!("{DIAGNOSTIC_TARGET}=off")
        .parse::<Directive>()
        .add_context("Invalid diagnostic directive")?;

    let log_layer = fmt::layer()
        .with_writer(stderr)
        .with_filter(env_filter.add_directive(silenced));

    let diagnostics = settings
        .echo_diagnostics
        .then(|| diagnostic_layer(stdout));

    tracing_subscriber::registry()
        .with(log_layer)
        .with(diagnostics)
        .try_init()
        .add_context("Failed to install tracing subscriber")
}

/// Parses `RUST_LOG` when it is set and non-empty, the configured directive
/// otherwise. A malformed `RUST_LOG` is an error, not a silent fallback.
fn log_filter(
    env_value: StdResult<String, VarError>,
    settings: &SongbookSettings,
) -> Result<EnvFilter> {
    let directives = match env_value {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) | Err(VarError::NotPresent) => settings.log_filter.clone(),
        Err(error) => {
            return Err(error).add_contextf(format!("Unreadable {}", EnvFilter::DEFAULT_ENV));
        }
    };
    EnvFilter::try_new(&directives).add_contextf(format!("Invalid log filter {directives:?}"))
}

/// Builds the layer that prints diagnostics to `writer`.
///
/// Only events on [`DIAGNOSTIC_TARGET`] pass, formatted as their bare
/// message without timestamp, level, or target.
pub fn diagnostic_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_filter(filter_fn(|metadata| metadata.target() == DIAGNOSTIC_TARGET))
}

#[cfg(test)]
mod tests {
    use std::{
        env::VarError,
        io::{Result as IoResult, Write},
        sync::Arc,
    };

    use {
        parking_lot::Mutex,
        tracing::{info, subscriber::with_default},
        tracing_subscriber::{filter::LevelFilter, fmt::MakeWriter, prelude::*},
    };

    use crate::{
        catalog::{Song, SongIdGenerator},
        config::SongbookSettings,
        logging::{diagnostic_layer, log_filter},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(|line| line.trim().to_string())
                .collect()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> IoResult<()> {
            Ok(())
        }
    }

    impl<'writer> MakeWriter<'writer> for Captured {
        type Writer = Captured;

        fn make_writer(&'writer self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_log_filter_falls_back_to_settings_when_unset() {
        let settings = SongbookSettings {
            log_filter: "songbook=debug".to_string(),
            ..SongbookSettings::default()
        };

        let unset = log_filter(Err(VarError::NotPresent), &settings).unwrap();
        assert_eq!(unset.max_level_hint(), Some(LevelFilter::DEBUG));

        let blank = log_filter(Ok("  ".to_string()), &settings).unwrap();
        assert_eq!(blank.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_prefers_environment() {
        let settings = SongbookSettings::default();
        let filter = log_filter(Ok("songbook=trace".to_string()), &settings).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_malformed_environment_filter_is_an_error() {
        let settings = SongbookSettings::default();
        let error = log_filter(Ok("songbook=loud".to_string()), &settings).unwrap_err();
        assert!(error.to_string().contains("songbook=loud"));
    }

    #[test]
    fn test_diagnostics_are_printed_verbatim() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(diagnostic_layer(captured.clone()));

        with_default(subscriber, || {
            let ids = SongIdGenerator::new();
            assert!(Song::new("Title", "Artist", 100, 0, &ids).is_err());
            let mut song = Song::new("Title", "Artist", 100, 3, &ids).unwrap();
            assert!(song.add_tag("Rock").is_ok());
            assert!(song.add_tag("rock").is_err());
            assert!(song.remove_tag("jazz").is_err());
            assert!(song.set_duration(-5).is_err());
            info!("not a diagnostic");
        });

        assert_eq!(
            captured.lines(),
            [
                "[错误] 评分必须在 1...5 之间",
                "[提示] 标签已存在（忽略大小写）",
                "[提示] 未找到该标签",
                "[提示] 时长需为正整数，已忽略本次修改",
            ]
        );
    }

    #[test]
    fn test_first_failing_field_is_the_only_diagnostic() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(diagnostic_layer(captured.clone()));

        with_default(subscriber, || {
            let ids = SongIdGenerator::new();
            let song = Song::new_or_invalid("  ", "Artist", 100, 42, &ids);
            assert!(!song.is_valid());
        });

        assert_eq!(captured.lines(), ["[错误] 标题不能为空"]);
    }
}
