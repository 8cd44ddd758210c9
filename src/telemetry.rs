use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

use crate::configuration::LogSettings;

lazy_static! {
    pub static ref QUIZ_QUESTION_CNTR: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions served to quiz players",
        &["category"]
    )
    .unwrap();
}

/// `LOG_LEVEL` wins over the configured filter; an unparsable filter falls back to `info`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|err| {
            eprintln!("Invalid log filter {default_filter:?} ({err}), using info");
            EnvFilter::new("info")
        })
}

pub fn init_tracing(settings: &LogSettings) {
    let mut fmt_layer = fmt::layer();
    if settings.span_events {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }

    tracing_subscriber::registry()
        .with(env_filter(&settings.filter))
        .with(fmt_layer)
        .init();
}
