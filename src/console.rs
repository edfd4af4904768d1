//! Line-based focus session for plain terminals
//!
//! Same controller as the TUI, driven by stdin lines: topic, duration, a
//! live countdown, then one answer per line until the quiz completes.

use std::io::{self, BufRead, Write};

use crate::app::Prefill;
use crate::config::FocusConfig;
use crate::focus::{FocusMode, InputField};
use crate::models::Outcome;
use crate::notify::{AdvisoryRestriction, ConsoleNotifier};
use crate::quiz::QuizPhase;
use crate::timer::Ticker;
use crate::Result;

type ConsoleFocus<W> = FocusMode<ConsoleNotifier<W>, AdvisoryRestriction>;

/// Run a session on stdin/stdout
pub async fn run_console(config: &FocusConfig, prefill: &Prefill) -> Result<Option<Outcome>> {
    let stdin = io::stdin();
    run_session(config, prefill, stdin.lock(), io::stdout()).await
}

/// Run a session over any line source and writer.
///
/// Returns the quiz outcome, or `None` when input ends first.
pub async fn run_session<R: BufRead, W: Write>(
    config: &FocusConfig,
    prefill: &Prefill,
    mut input: R,
    out: W,
) -> Result<Option<Outcome>> {
    let policy = AdvisoryRestriction::new(config.restriction_window()?);
    let mut focus = FocusMode::new(config, ConsoleNotifier::new(out), policy);

    writeln!(focus.notifier_mut().writer_mut(), "Study Time! Focus Mode")?;

    // Topic
    let topic = match &prefill.topic {
        Some(topic) => topic.clone(),
        None => match prompt(&mut focus, &mut input, "Enter topic to study: ")? {
            Some(line) => line,
            None => return Ok(None),
        },
    };
    focus.set_input(InputField::Topic, topic);
    focus.set_topic();

    // Duration, re-asked until valid
    let mut duration = prefill
        .duration_secs
        .map(|secs| secs.to_string())
        .or_else(|| config.default_duration_secs.map(|secs| secs.to_string()));
    loop {
        let text = match duration.take() {
            Some(text) => text,
            None => match prompt(&mut focus, &mut input, "Enter time in seconds: ")? {
                Some(line) => line,
                None => return Ok(None),
            },
        };
        focus.set_input(InputField::Duration, text);
        match focus.toggle_timer() {
            Ok(()) => break,
            Err(e) => tracing::debug!(error = %e, "asking for the duration again"),
        }
    }

    // Countdown
    let mut ticker = Ticker::start(config.tick_interval())?;
    while focus.is_running() {
        if !ticker.tick().await {
            break;
        }
        focus.tick();
        if focus.is_running() {
            let remaining = focus.remaining();
            writeln!(focus.notifier_mut().writer_mut(), "{}", remaining)?;
        }
    }
    ticker.stop();

    // Quiz
    while let QuizPhase::Asking(_) = focus.session().phase() {
        let Some(answer) = prompt(&mut focus, &mut input, "Your answer: ")? else {
            return Ok(None);
        };
        focus.set_input(InputField::Answer, answer);
        if let Err(e) = focus.submit_answer() {
            tracing::debug!(error = %e, "answer not accepted");
        }
    }

    Ok(focus.session().outcome())
}

fn prompt<R: BufRead, W: Write>(
    focus: &mut ConsoleFocus<W>,
    input: &mut R,
    text: &str,
) -> Result<Option<String>> {
    let out = focus.notifier_mut().writer_mut();
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    fn fast_config() -> FocusConfig {
        FocusConfig::default().with_tick_interval(Duration::from_millis(1))
    }

    async fn run(input: &str, prefill: Prefill) -> (Option<Outcome>, String) {
        let mut out = Vec::new();
        let outcome = run_session(&fast_config(), &prefill, Cursor::new(input), &mut out)
            .await
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_frog_session_passes() {
        let (outcome, out) = run(
            "frog\n2\nchordata\nAmphibia\nwrong\nwetlands\nexternal\nyes\n",
            Prefill::default(),
        )
        .await;
        assert_eq!(outcome, Some(Outcome::Pass));
        assert!(out.contains("[Question] What is the phylum of the frog?"));
        assert!(out.contains("[Incorrect Answer. Try Again.]"));
        assert!(out.contains("[Quiz Completed] You answered enough questions correctly!"));
    }

    #[tokio::test]
    async fn test_invalid_duration_is_reasked() {
        let (outcome, out) = run("rust\n-1\nabc\n1\n", Prefill::default()).await;
        // Input ends while the first question is open
        assert_eq!(outcome, None);
        assert_eq!(out.matches("[Error] Please enter a valid time.").count(), 2);
        assert!(out.contains("[Question] What is the basic concept of rust?"));
    }

    #[tokio::test]
    async fn test_prefill_skips_prompts() {
        let prefill = Prefill {
            topic: Some("frog".to_string()),
            duration_secs: Some(1),
        };
        let (outcome, out) = run("", prefill).await;
        assert_eq!(outcome, None);
        assert!(!out.contains("Enter topic to study"));
        assert!(!out.contains("Enter time in seconds"));
        assert!(out.contains("[Question]"));
    }

    #[tokio::test]
    async fn test_empty_input_stops_early() {
        let (outcome, _) = run("", Prefill::default()).await;
        assert_eq!(outcome, None);
    }
}
