//! Animated welcome banner.
//!
//! Drives a [`MultiTyping`] with tokio timers, printing each newly revealed
//! character as it appears.

use std::io::{self, Write};
use std::time::Duration;

use folio_core::{MultiOutcome, MultiTyping, TypingConfig};

/// Type `lines` to `out`, one after another.
pub async fn play(
    out: &mut impl Write,
    lines: Vec<String>,
    config: TypingConfig,
) -> io::Result<()> {
    let mut typing = MultiTyping::new(lines, config);
    let mut printed = 0;
    let mut tick = typing.start();

    while let Some(t) = tick {
        tokio::time::sleep(Duration::from_millis(t.after_ms.into())).await;
        let outcome = typing.tick(t.epoch);
        tracing::trace!(?outcome, "banner tick");

        tick = match outcome {
            MultiOutcome::Stale => None,
            MultiOutcome::Progress { next } => {
                printed = write_new(out, typing.current_text(), printed)?;
                next
            }
            MultiOutcome::ItemDone { next, .. } => {
                write_new(out, typing.current_text(), printed)?;
                writeln!(out)?;
                printed = 0;
                next
            }
            MultiOutcome::Advanced { next, .. } => next,
        };
        out.flush()?;
    }
    Ok(())
}

/// Write the characters of `text` past `printed`; returns the new count.
fn write_new(out: &mut impl Write, text: &str, printed: usize) -> io::Result<usize> {
    let fresh: String = text.chars().skip(printed).collect();
    write!(out, "{}", fresh)?;
    Ok(printed + fresh.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_types_every_line() {
        let mut out = Vec::new();
        let config = TypingConfig::new(5, 0, false).unwrap();
        play(&mut out, vec!["ab".into(), "✓c".into()], config)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\n✓c\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_blank_lines() {
        let mut out = Vec::new();
        let config = TypingConfig::new(5, 0, false).unwrap();
        play(&mut out, vec!["a".into(), "".into(), "b".into()], config)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n\nb\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_banner() {
        let mut out = Vec::new();
        play(&mut out, Vec::new(), TypingConfig::default())
            .await
            .unwrap();
        assert!(out.is_empty());
    }
}
