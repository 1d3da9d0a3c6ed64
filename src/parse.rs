use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::domain::Timing;
use crate::error::TimingError;


fn timing_regex() -> &'static Regex {
    static TIMING_RE: OnceLock<Regex> = OnceLock::new();
    TIMING_RE.get_or_init(|| {
        Regex::new(r"(?P<minutes>[0-9]+)(:|\.)(?P<seconds>[0-5][0-9])")
            .expect("timing regex is valid")
    })
}

/// Parse the first timing found in a token, anywhere in it.
///
/// Returns `Ok(None)` when the token holds no timing, and an error when it
/// holds one whose minutes do not fit.
pub fn parse_timing(token: &str) -> Result<Option<Timing>, TimingError> {
    let caps = match timing_regex().captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let too_large = || TimingError::TooLarge {
        token: token.to_string(),
    };
    // Only digits are captured, so the parse can only fail on overflow
    let minutes = caps["minutes"].parse::<u64>().map_err(|_| too_large())?;
    let seconds = caps["seconds"].parse::<u64>().map_err(|_| too_large())?;
    Ok(Some(Timing::new(minutes, seconds)))
}

/// Parse every whitespace-separated token of the input, in order.
///
/// Stops at the first token that holds no timing, or one too large to
/// represent; nothing parsed before it is returned.
pub fn parse_timings(timings: &str) -> Result<Vec<Timing>, TimingError> {
    let mut result = vec![];
    for token in timings.split_whitespace() {
        match parse_timing(token)? {
            Some(timing) => {
                debug!(
                    "parsed {:?} as {} minutes {} seconds",
                    token,
                    timing.minutes(),
                    timing.seconds()
                );
                result.push(timing);
            }
            None => {
                debug!("no timing found in {:?}", token);
                return Err(TimingError::InvalidToken {
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(result)
}
