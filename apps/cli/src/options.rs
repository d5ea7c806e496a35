//! Startup options.
//!
//! Arguments come in `(flag, value)` pairs: `-import <path>` and
//! `-export <path>`, in any order.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub import: Option<PathBuf>,
    pub export: Option<PathBuf>,
}

impl Options {
    /// Parse arguments, excluding the program name.
    ///
    /// Unknown flags are skipped. With an odd count the last, unpaired
    /// argument is ignored. A flag given twice keeps its last value.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut options = Self::default();

        if args.len() % 2 != 0 {
            tracing::warn!(
                "ignoring unpaired argument {:?}",
                args.last().map(String::as_str).unwrap_or_default()
            );
        }

        for pair in args.chunks_exact(2) {
            let (flag, value) = (&pair[0], &pair[1]);
            match flag.as_str() {
                "-import" => options.import = Some(PathBuf::from(value)),
                "-export" => options.export = Some(PathBuf::from(value)),
                other => tracing::warn!("ignoring unknown option {:?}", other),
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_arguments() {
        assert_eq!(Options::parse(Vec::<String>::new()), Options::default());
    }

    #[test]
    fn import_and_export_in_any_order() {
        let options = Options::parse(["-export", "out.txt", "-import", "in.txt"]);
        assert_eq!(options.import, Some(PathBuf::from("in.txt")));
        assert_eq!(options.export, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn unknown_flag_is_skipped() {
        let options = Options::parse(["-verbose", "yes", "-import", "in.txt"]);
        assert_eq!(options.import, Some(PathBuf::from("in.txt")));
        assert_eq!(options.export, None);
    }

    #[test]
    fn odd_count_keeps_complete_pairs() {
        let options = Options::parse(["-import", "in.txt", "-export"]);
        assert_eq!(options.import, Some(PathBuf::from("in.txt")));
        assert_eq!(options.export, None);
    }

    #[test]
    fn last_value_wins() {
        let options = Options::parse(["-export", "a.txt", "-export", "b.txt"]);
        assert_eq!(options.export, Some(PathBuf::from("b.txt")));
    }
}
