#[macro_use]
extern crate clap;

use std::io;
use std::io::Write;

use anyhow::Context;
use clap::App;
use log::debug;

use crate::config::{current_argv0, load_config_from_matches, Config};
use crate::pretty_print::{format_summary, format_usage, write_to};
use crate::summary::add_timings;

mod config;
mod domain;
mod error;
mod logging;
mod parse;
mod pretty_print;
mod summary;

type Writer = (Box<dyn Write>, bool);
type TimingsResult<T> = anyhow::Result<T>;

fn get_stdout_writer() -> Writer {
    (Box::new(io::stdout()) as Box<dyn Write>, true)
}

fn run(config: &Config, writer: Writer) -> TimingsResult<()> {
    let (mut out, color) = writer;

    let timings = match &config.timings {
        Some(t) => t,
        None => {
            write_to(|| vec![format_usage(&config.program_name)], &mut out)
                .context("Could not write the usage message.")?;
            return Ok(());
        }
    };

    // Everything is parsed before anything is printed
    let summary = add_timings(timings)?;
    if summary.is_empty() {
        debug!("no timings in {:?}", timings);
    }

    write_to(|| format_summary(&summary, color), &mut out)
        .context("Could not write the timings.")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).version(crate_version!()).get_matches();

    let config = load_config_from_matches(&matches, current_argv0());
    run(&config, get_stdout_writer())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::io::Write;
    use std::rc::Rc;

    use crate::config::Config;
    use crate::error::TimingError;
    use crate::{run, Writer};

    /// A writer whose content stays readable after being boxed away.
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn writer_to(buf: &SharedBuffer) -> Writer {
        (Box::new(buf.clone()) as Box<dyn Write>, false)
    }

    fn config(timings: Option<&str>) -> Config {
        Config {
            program_name: "timings".to_string(),
            timings: timings.map(|s| s.to_string()),
        }
    }

    #[test]
    fn run_prints_usage_without_timings() {
        let buf = SharedBuffer::default();
        run(&config(None), writer_to(&buf)).unwrap();
        assert_eq!(buf.contents(), "Usage: timings timings\n");
    }

    #[test]
    fn run_prints_timings_and_total() {
        let buf = SharedBuffer::default();
        run(&config(Some("4:33 6:28 2:59")), writer_to(&buf)).unwrap();
        assert_eq!(
            buf.contents(),
            "\n   4:33\n   6:28\n   2:59\n ======\n  14:00\n"
        );
    }

    #[test]
    fn run_prints_nothing_on_invalid_token() {
        let buf = SharedBuffer::default();
        let err = run(&config(Some("4:33 foo")), writer_to(&buf)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TimingError>(),
            Some(&TimingError::InvalidToken {
                token: "foo".to_string()
            })
        );
        assert_eq!(err.to_string(), "Invalid timing string: foo");
        assert_eq!(buf.contents(), "");
    }
}
