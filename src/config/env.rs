/// Get an environment variable with a default value
///
/// # Example
/// ```
/// use launchpad::config::env;
///
/// let port: u16 = env("SERVER_PORT", 8080);
/// let host = env("SERVER_HOST", "127.0.0.1".to_string());
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        let port: u16 = env("LAUNCHPAD_TEST_UNSET_PORT", 8080);
        assert_eq!(port, 8080);
    }

    #[test]
    fn reads_and_parses_set_values() {
        std::env::set_var("LAUNCHPAD_TEST_SET_PORT", "9001");
        let port: u16 = env("LAUNCHPAD_TEST_SET_PORT", 8080);
        assert_eq!(port, 9001);
        std::env::remove_var("LAUNCHPAD_TEST_SET_PORT");
    }

    #[test]
    fn unparsable_values_fall_back_to_default() {
        std::env::set_var("LAUNCHPAD_TEST_BAD_PORT", "not-a-port");
        let port: u16 = env("LAUNCHPAD_TEST_BAD_PORT", 8080);
        assert_eq!(port, 8080);
        std::env::remove_var("LAUNCHPAD_TEST_BAD_PORT");
    }
}
