use std::fmt::Display;

/// A Shape Pattern that can never be used. These are bugs in the extraction
/// rules, not in the document being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    MultipleOptional {
        count: usize,
    },
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
    DuplicateBinding(&'static str),
}

impl Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleOptional { count } => write!(
                f,
                "pattern has {count} optional elements, at most one is supported"
            ),
            Self::InvalidSelector { selector, reason } => {
                write!(f, "pattern selector '{selector}' is invalid: {reason}")
            }
            Self::DuplicateBinding(name) => {
                write!(f, "pattern binds '{name}' more than once")
            }
        }
    }
}

impl std::error::Error for PatternError {}

const WRONG_SAVE_METHOD_HINT: &str = "\
(Is this raw server HTML? You need to save it from a web browser, after
it's executed the embedded Javascript to fetch the route data, in such
a way that the browser saves the modified DOM.
In Firefox, \"Save Page As...\" then \"Web Page, complete\".)";

/// Document-level failures. Any of these ends the run.
#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    MissingRouteList { found: usize },
    Pattern(PatternError),
}

impl From<PatternError> for Error {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::MissingRouteList { found } => write!(
                f,
                "Couldn't find route list (expected exactly one <ul> element, found {found}), giving up.\n\n{WRONG_SAVE_METHOD_HINT}"
            ),
            Self::Pattern(e) => write!(f, "Pattern Error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
