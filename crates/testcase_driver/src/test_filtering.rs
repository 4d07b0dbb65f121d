use regex::bytes as regex;
use testcase_registry::TestDescriptor;

use crate::cli_args::FilterArgs;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid test pattern {pattern:?}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Test pattern {pattern:?} does not compile to a usable regex")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: ::regex::Error,
    },
}

/// A compiled name filter.  With no pattern, everything matches.
#[derive(Debug)]
pub struct TestFilter {
    glob: Option<regex::Regex>,
}

impl TestFilter {
    pub fn new(pattern: Option<&str>) -> Result<TestFilter, FilterError> {
        let glob = pattern.map(compile_glob).transpose()?;
        Ok(TestFilter { glob })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.glob
            .as_ref()
            .map(|g| g.is_match(name.as_bytes()))
            .unwrap_or(true)
    }
}

/// Given a string representing a glob pattern, return a regular expression which can match it.
fn compile_glob(glob: &str) -> Result<regex::Regex, FilterError> {
    let parsed_glob = globset::Glob::new(glob).map_err(|source| FilterError::InvalidGlob {
        pattern: glob.to_string(),
        source,
    })?;

    regex::Regex::new(parsed_glob.regex()).map_err(|source| FilterError::InvalidRegex {
        pattern: glob.to_string(),
        source,
    })
}

/// Get an iterator over tests which match a filter from the command line, in registration order.
pub fn get_tests_filtered(
    args: &FilterArgs,
) -> Result<impl Iterator<Item = &'static TestDescriptor>, FilterError> {
    let filter = TestFilter::new(args.pattern.as_deref())?;
    Ok(testcase_registry::enumerate().filter(move |x| filter.matches(x.name())))
}

/// Find every test whose name is shared with another, grouped by name.
pub fn find_duplicate_names<'a>(
    tests: impl IntoIterator<Item = &'a TestDescriptor>,
) -> Vec<Vec<&'a TestDescriptor>> {
    use itertools::Itertools;

    let mut sorted = tests.into_iter().collect::<Vec<_>>();
    sorted.sort_by_key(|x| x.name());

    let mut ret = vec![];
    let groups = sorted.into_iter().group_by(|x| x.name());
    for (_, items) in groups.into_iter() {
        let items_vec = items.collect::<Vec<_>>();
        if items_vec.len() > 1 {
            ret.push(items_vec);
        }
    }

    ret
}

/// Log a warning for each name registered more than once.  Duplicates still run.
pub fn warn_duplicate_names<'a>(tests: impl IntoIterator<Item = &'a TestDescriptor>) {
    for group in find_duplicate_names(tests) {
        log::warn!(
            "Test name {} is registered {} times:",
            group[0].name(),
            group.len()
        );
        for t in group {
            log::warn!("  {t}");
        }
    }
}
