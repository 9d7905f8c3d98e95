//! User gate classification and reporting.
//!
//! [`classify`] decides whether a user name grants administrator access.
//! [`UserGate`] wraps that decision with a single log record so each check
//! leaves exactly one trace in whichever [`log::Log`] sink it writes to.

use std::fmt;

use log::{Level, Log, Record};

/// The only user name that passes the gate.
pub const ADMIN_USER: &str = "admin";

/// Log target attached to every record emitted by [`UserGate`].
pub const TARGET: &str = "usergate::gate";

/// Message logged at [`Level::Info`] for an authorized user.
pub const WELCOME_MESSAGE: &str = "¡Bienvenido administrador!";

/// Message logged at [`Level::Warn`] for anyone else.
pub const UNAUTHORIZED_MESSAGE: &str = "Usuario no autorizado o variable de entorno no definida";

/// Outcome of checking a user name against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Authorized,
    Unauthorized,
}

impl Classification {
    /// Severity used when reporting this outcome.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Authorized => Level::Info,
            Self::Unauthorized => Level::Warn,
        }
    }

    /// Text reported for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Authorized => WELCOME_MESSAGE,
            Self::Unauthorized => UNAUTHORIZED_MESSAGE,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorized => f.write_str("authorized"),
            Self::Unauthorized => f.write_str("unauthorized"),
        }
    }
}

/// Classify `input` by exact, case-sensitive comparison with [`ADMIN_USER`].
///
/// No trimming or case folding is applied; an absent value is unauthorized.
///
/// # Examples
///
/// ```
/// use usergate::{Classification, classify};
///
/// assert_eq!(classify(Some("admin")), Classification::Authorized);
/// assert_eq!(classify(Some("Admin")), Classification::Unauthorized);
/// assert_eq!(classify(None), Classification::Unauthorized);
/// ```
#[must_use]
pub fn classify(input: Option<&str>) -> Classification {
    match input {
        Some(ADMIN_USER) => Classification::Authorized,
        _ => Classification::Unauthorized,
    }
}

/// Somewhere a user name can be read from.
pub trait UserSource {
    /// Resolve the current user, or `None` when it is not set.
    fn user(&self) -> Option<String>;
}

impl UserSource for Option<&str> {
    fn user(&self) -> Option<String> {
        self.map(str::to_owned)
    }
}

/// Where a [`UserGate`] sends its records.
#[derive(Clone, Copy)]
enum Sink<'a> {
    Global,
    Custom(&'a dyn Log),
}

/// Checks users and reports each decision to a log sink.
///
/// By default records go to the global logger installed through the `log`
/// crate. [`UserGate::with_sink`] routes them to a specific sink instead.
#[derive(Clone, Copy)]
pub struct UserGate<'a> {
    sink: Sink<'a>,
}

impl Default for UserGate<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UserGate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink {
            Sink::Global => "global",
            Sink::Custom(_) => "custom",
        };
        f.debug_struct("UserGate").field("sink", &sink).finish()
    }
}

impl<'a> UserGate<'a> {
    /// Create a gate that reports through the global logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: Sink::Global }
    }

    /// Create a gate that reports to `sink`.
    #[must_use]
    pub const fn with_sink(sink: &'a dyn Log) -> Self {
        Self {
            sink: Sink::Custom(sink),
        }
    }

    /// Classify `input` and emit exactly one record describing the result.
    #[must_use]
    pub fn check(&self, input: Option<&str>) -> Classification {
        let outcome = classify(input);
        self.report(outcome);
        outcome
    }

    /// Resolve the user from `source` and [`check`](Self::check) it.
    #[must_use]
    pub fn process<S: UserSource + ?Sized>(&self, source: &S) -> Classification {
        let user = source.user();
        self.check(user.as_deref())
    }

    fn report(&self, outcome: Classification) {
        match self.sink {
            Sink::Global => log::log!(target: TARGET, outcome.level(), "{}", outcome.message()),
            Sink::Custom(sink) => sink.log(
                &Record::builder()
                    .level(outcome.level())
                    .target(TARGET)
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .line(Some(line!()))
                    .args(format_args!("{}", outcome.message()))
                    .build(),
            ),
        }
    }
}
