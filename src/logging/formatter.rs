use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    registry::LookupSpan,
    Layer,
};

use crate::config::{LogFormat, LoggingConfig};

/// Console layer writing to stderr, so stdout stays free for command replies.
pub fn build_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    build_layer_with_writer(config, std::io::stderr)
}

/// Same as [`build_layer`] with a custom writer.
pub fn build_layer_with_writer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer().with_writer(writer).with_target(true);

    match config.format {
        LogFormat::Pretty => base.pretty().with_ansi(config.ansi).boxed(),
        LogFormat::Compact => base.compact().with_ansi(config.ansi).boxed(),
        LogFormat::Json => base.json().with_ansi(false).boxed(),
    }
}
