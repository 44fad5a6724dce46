use diacritics::remove_diacritics;
use log::error;
use std::fmt::Debug;

pub mod env_args;

pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Lowercase a string, strip its accents and collapse its whitespaces,
/// so that `"  Éloïse  MBA"` and `"eloise mba"` compare equal.
pub fn normalize(value: &str) -> String {
    remove_diacritics(value)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_error_and_return, log_message_and_return, normalize};
    use parameterized::{ide, parameterized};

    ide!();

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_return_value() {
        init();

        let expected_return_value = "test";
        let result = log_error_and_return(expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_message_and_return_value() {
        init();

        let expected_message = "This is a test message";
        let expected_return_value = "This is a test return value";
        let result =
            log_message_and_return(expected_message, expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[parameterized(
        value = {"Obiang", "  Éloïse  MBA ", "NDONG-ÉYÉ", ""},
        expected_result = {"obiang", "eloise mba", "ndong-eye", ""}
    )]
    fn should_normalize(value: &str, expected_result: &str) {
        assert_eq!(expected_result, normalize(value));
    }
}
