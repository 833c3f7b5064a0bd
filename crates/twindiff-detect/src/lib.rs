//! Heuristic language detection for twindiff.
//!
//! A [`Classifier`] evaluates an ordered list of [`Rule`]s against a text
//! and returns the first match as a [`Detection`]: a language identifier and
//! the identifier of the formatter that handles it, if any.
//!
//! Several languages share surface syntax (an `import` line is valid
//! JavaScript, TypeScript, Python, and Java), so the rule order decides the
//! answer for ambiguous input. Callers that know better should pass an
//! override to [`Classifier::classify_with_override`].
//!
//! ```rust
//! use twindiff_detect::Classifier;
//!
//! let classifier = Classifier::builtin();
//! let js = classifier.classify("import x from 'y'\n");
//! assert_eq!(js.language, "javascript");
//! assert_eq!(js.formatter.as_deref(), Some("babel"));
//!
//! let py = classifier.classify("def foo():\n    pass\n");
//! assert_eq!(py.language, "python");
//! assert_eq!(py.formatter, None);
//! ```

pub mod classifier;
pub mod error;
pub mod rules;

pub use classifier::{Classifier, Detection, Rule};
pub use error::{DetectError, DetectResult};
pub use rules::{DEFAULT_FORMATTER, PLAINTEXT};
