use tracing_subscriber::{filter::LevelFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Routes `tracing` events to the devtools console.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(level);

    tracing_subscriber::registry().with(fmt_layer).init();
}
