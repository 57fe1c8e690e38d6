use proptest::prelude::*;

use spyrun::registry::{substitute, PLACEHOLDER};

// Path-like strings that never contain the placeholder's `$`.
fn path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./ -]{1,24}"
}

// Template fragments without `$` either, so the only tokens are the ones we
// insert between them.
fn fragment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./ &|;-]{0,12}"
}

proptest! {
    #[test]
    fn every_token_becomes_the_path(
        fragments in proptest::collection::vec(fragment_strategy(), 1..6),
        path in path_strategy(),
    ) {
        let template = fragments.join(PLACEHOLDER);

        let command = substitute(&template, &path);

        prop_assert!(!command.contains(PLACEHOLDER));
        prop_assert_eq!(&command, &fragments.join(path.as_str()));

        // Nothing left to replace: a second pass is a no-op.
        prop_assert_eq!(substitute(&command, &path), command);
    }
}
