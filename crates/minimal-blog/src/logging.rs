use colored::{ColoredString, Colorize};
use log::info;
use std::time::Duration;

pub(crate) struct FormatElapsedTimeOptions {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: u128,
    pub(crate) millis_red_threshold: u128,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: 100,
            millis_red_threshold: 500,
        }
    }
}

pub(crate) fn format_elapsed_time(
    elapsed: Duration,
    options: &FormatElapsedTimeOptions,
) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis if millis > options.millis_red_threshold => format!("{}ms", millis).red(),
            millis if millis > options.millis_yellow_threshold => {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}

pub(crate) fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_time_units() {
        let options = FormatElapsedTimeOptions::default();

        let micros = format_elapsed_time(Duration::from_micros(250), &options);
        assert_eq!(micros.input, "250μs");

        let millis = format_elapsed_time(Duration::from_millis(42), &options);
        assert_eq!(millis.input, "42ms");

        let secs = format_elapsed_time(Duration::from_secs(2), &options);
        assert_eq!(secs.input, "2s");
    }
}
