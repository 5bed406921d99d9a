use std::io::Read;

use crate::domain::{Clipboard, Clock};
use crate::interface_adapters::clients::ProxyApi;
use crate::use_cases::form::FormController;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// Clock backed by the system time.
struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

// Terminal stand-in for the browser clipboard: echo what would be copied.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write(&mut self, text: &str) -> Result<(), String> {
        println!("--- copied ---\n{text}\n--------------");
        Ok(())
    }
}

// One-shot flow: read text, submit it through the form controller, print the
// summary with its statistics.
pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let base_url =
        std::env::var("SUMMARIZER_URL").unwrap_or_else(|_| "http://localhost:5000".into());
    tracing::debug!(base_url = %base_url, "proxy client configured.");
    let api = ProxyApi::new(base_url);

    // Read the text to summarize from a file argument or stdin.
    let input = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                tracing::error!(%path, %error, "failed to read input file");
                return;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(error) = std::io::stdin().read_to_string(&mut buffer) {
                tracing::error!(%error, "failed to read stdin");
                return;
            }
            buffer
        }
    };

    let mut form = FormController::new();
    form.set_input(input);
    println!("{} words", form.input_word_count());

    form.submit(&api).await;

    if let Some(error) = form.error() {
        eprintln!("error: {error}");
        return;
    }

    if let Some(summary) = form.summary() {
        println!("\n{summary}\n");
        println!(
            "original: {} words | summary: {} words | compression: {}%",
            form.original_word_count(),
            form.summary_word_count(),
            form.compression_ratio()
        );

        let clock = SystemClock;
        let mut clipboard = StdoutClipboard;
        if form.copy_summary(&mut clipboard, &clock) && form.copy_confirmed(&clock) {
            println!("copied!");
        }
    }
}
