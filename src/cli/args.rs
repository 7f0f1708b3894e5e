/// Option resolution: raw argument tokens to a `Configuration`.
///
/// Every token is examined in order and later flags overwrite earlier ones.
/// Unknown tokens and unknown flag values are ignored; ignored values are
/// reported at `warn` level only, so stdout never changes because of them.
use clap::ValueEnum;

use crate::dataset::record::{DESKTOP, MOBILE};
use crate::dataset::{MatchType, OutputFormat, Record, SortOrder};

/// Which device clients stay in the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Devices {
    pub mobile: bool,
    pub desktop: bool,
}

impl Default for Devices {
    fn default() -> Self {
        Self {
            mobile: true,
            desktop: true,
        }
    }
}

impl Devices {
    /// Whether `record` survives the device filter.
    #[must_use]
    pub fn admits(self, record: &Record) -> bool {
        match record.client.as_str() {
            MOBILE => self.mobile,
            DESKTOP => self.desktop,
            _ => true,
        }
    }
}

/// Resolved options for one invocation. Built once, never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Search term: always the first argument.
    pub term: String,
    /// `-m`/`--mobile` and `-d`/`--desktop` exclusions.
    pub devices: Devices,
    /// `-t`/`--type`.
    pub match_type: MatchType,
    /// `-s`/`--sort`.
    pub sort_order: SortOrder,
    /// `-o`/`--output`.
    pub output: OutputFormat,
    /// `-h`/`--help`, or no arguments at all.
    pub help: bool,
}

/// Resolve raw arguments (program name excluded) into a `Configuration`.
#[must_use]
pub fn resolve<S: AsRef<str>>(args: &[S]) -> Configuration {
    let mut config = Configuration {
        help: args.is_empty(),
        ..Configuration::default()
    };

    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        let value = args.get(index + 1).map(AsRef::as_ref);

        // The term slot does not stop the token from being read as a flag.
        if index == 0 {
            config.term = arg.to_owned();
        }

        match arg {
            "-m" | "--mobile" => config.devices.mobile = false,
            "-d" | "--desktop" => config.devices.desktop = false,
            "-t" | "--type" => select(&mut config.match_type, arg, value),
            "-s" | "--sort" => select(&mut config.sort_order, arg, value),
            "-o" | "--output" => select(&mut config.output, arg, value),
            "-h" | "--help" => config.help = true,
            _ => {}
        }
    }

    log::debug!("resolved {config:?}");
    config
}

/// Overwrite `slot` when `value` names a registered variant; keep it otherwise.
fn select<T: ValueEnum>(slot: &mut T, flag: &str, value: Option<&str>) {
    match value {
        Some(name) => match T::from_str(name, false) {
            Ok(parsed) => *slot = parsed,
            Err(_) => log::warn!(
                "ignoring unknown value '{name}' for {flag} (expected one of: {})",
                names::<T>().join(", ")
            ),
        },
        None => log::warn!("ignoring {flag}: no value given"),
    }
}

/// Registered names of a plugin kind, in declaration order.
#[must_use]
pub fn names<T: ValueEnum>() -> Vec<String> {
    T::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .map(|v| v.get_name().to_owned())
        .collect()
}
