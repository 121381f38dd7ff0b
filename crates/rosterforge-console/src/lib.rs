//! Colorful console output for roster generation.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, termination)
//! - **DEBUG**: One line per finished attempt
//! - **TRACE**: Phase outcomes inside each attempt

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs a subscriber filtered by `RUST_LOG`,
/// defaulting to `rosterforge_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let directive = "rosterforge_solver=info"
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RosterConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____            _            _____
|  _ \ ___  ___| |_ ___ _ __|  ___|__  _ __ __ _  ___
| |_) / _ \/ __| __/ _ \ '__| |_ / _ \| '__/ _` |/ _ \
|  _ < (_) \__ \ ||  __/ |  |  _| (_) | | | (_| |  __/
|_| \_\___/|___/\__\___|_|  |_|  \___/|_|  \__, |\___|
                                            |___/
"#;

    let version_line = format!("                   v{VERSION} - Shift Roster Generator\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats roster solver events with colors.
pub struct RosterConsoleLayer;

impl<S: Subscriber> Layer<S> for RosterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("rosterforge_solver") && !target.starts_with("rosterforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    stop: Option<String>,
    score: Option<String>,
    staff_count: Option<u64>,
    day_count: Option<u64>,
    restart_count: Option<u64>,
    attempt: Option<u64>,
    attempts: Option<u64>,
    attempts_completed: Option<u64>,
    attempts_skipped: Option<u64>,
    best_attempt: Option<u64>,
    shortage: Option<u64>,
    steps: Option<u64>,
    duration_ms: Option<u64>,
    variance: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "stop" => self.stop = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "staff_count" => self.staff_count = Some(value),
            "day_count" => self.day_count = Some(value),
            "restart_count" => self.restart_count = Some(value),
            "attempt" => self.attempt = Some(value),
            "attempts" => self.attempts = Some(value),
            "attempts_completed" => self.attempts_completed = Some(value),
            "attempts_skipped" => self.attempts_skipped = Some(value),
            "best_attempt" => self.best_attempt = Some(value),
            "shortage" => self.shortage = Some(value),
            "steps" => self.steps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "variance" {
            self.variance = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "stop" => self.stop = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "attempt_end" => format_attempt_end(v),
        "phase_end" => format_phase_end(v),
        "terminated" => format_terminated(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} Generating │ {} staff │ {} days │ {} attempts",
        "▶".bright_green().bold(),
        count(v.staff_count).bright_yellow(),
        count(v.day_count).bright_yellow(),
        count(v.restart_count).bright_yellow(),
    )
}

fn format_attempt_end(v: &EventVisitor) -> String {
    let shortage = v.shortage.unwrap_or(0);
    let shortage_text = format!("{shortage} short");
    let shortage_colored = if shortage == 0 {
        shortage_text.bright_green().to_string()
    } else {
        shortage_text.bright_red().to_string()
    };

    format!(
        "  {} attempt {} │ {} │ variance {:.3}",
        "◆".bright_blue(),
        count(v.attempt).white().bold(),
        shortage_colored,
        v.variance.unwrap_or(0.0),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    format!(
        "    {} {} │ {} steps │ {} │ {}",
        "◀".bright_black(),
        v.phase.as_deref().unwrap_or("Unknown").white(),
        count(v.steps),
        v.stop.as_deref().unwrap_or("-").bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_terminated(v: &EventVisitor) -> String {
    format!(
        "{} Terminated early │ {} attempts run │ {} skipped",
        "■".bright_yellow().bold(),
        count(v.attempts_completed).white(),
        count(v.attempts_skipped).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let status = if v.shortage == Some(0) {
        "FULLY STAFFED".bright_green().bold().to_string()
    } else {
        "SHORT-STAFFED".bright_red().bold().to_string()
    };

    format!(
        "{} Roster complete │ {} │ {} │ best of {} (attempt {}) │ {}",
        "■".bright_cyan().bold(),
        score.bright_white().bold(),
        status,
        count(v.attempts),
        count(v.best_attempt),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{mins}m {secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("support_chain")).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_solve_start_formats_counts() {
        let v = EventVisitor {
            staff_count: Some(12),
            day_count: Some(28),
            restart_count: Some(1500),
            ..visitor("solve_start")
        };
        let out = format_event(&v);
        assert!(out.contains("Generating"));
        assert!(out.contains("1,500"));
        assert!(out.contains("28"));
    }

    #[test]
    fn test_solve_end_status() {
        let staffed = EventVisitor {
            score: Some("0shortage/0.250variance".to_string()),
            shortage: Some(0),
            ..visitor("solve_end")
        };
        assert!(format_event(&staffed).contains("FULLY STAFFED"));
        assert!(format_event(&staffed).contains("0shortage/0.250variance"));

        let short = EventVisitor {
            shortage: Some(3),
            ..visitor("solve_end")
        };
        assert!(format_event(&short).contains("SHORT-STAFFED"));
    }

    #[test]
    fn test_phase_end_shows_stop_reason() {
        let v = EventVisitor {
            phase: Some("FairnessSearch".to_string()),
            stop: Some("balanced".to_string()),
            steps: Some(4),
            ..visitor("phase_end")
        };
        let out = format_event(&v);
        assert!(out.contains("FairnessSearch"));
        assert!(out.contains("balanced"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }
}
