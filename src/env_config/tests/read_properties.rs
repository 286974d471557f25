use env_config::{ConfigError, MapEnv, ReadOptions, read_var, resolve_server_url};
use proptest::prelude::*;

const NAME: &str = "[A-Z][A-Z0-9_]{0,23}";

proptest! {
    #[test]
    fn absent_and_required_fails_with_name(name in NAME, allow_empty in any::<bool>()) {
        let opts = ReadOptions::default().allow_empty(allow_empty);
        let err = read_var(&MapEnv::new(), &name, opts).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("{name} is not set"));
    }

    #[test]
    fn absent_and_optional_is_none(name in NAME, allow_empty in any::<bool>()) {
        let opts = ReadOptions::optional().allow_empty(allow_empty);
        prop_assert_eq!(read_var(&MapEnv::new(), &name, opts), Ok(None));
    }

    #[test]
    fn empty_and_optional_is_empty_string(name in NAME, allow_empty in any::<bool>()) {
        let env = MapEnv::new().with(name.clone(), "");
        let opts = ReadOptions::optional().allow_empty(allow_empty);
        prop_assert_eq!(read_var(&env, &name, opts), Ok(Some(String::new())));
    }

    #[test]
    fn empty_and_required_by_default_fails(name in NAME) {
        let env = MapEnv::new().with(name.clone(), "");
        let err = read_var(&env, &name, ReadOptions::default()).unwrap_err();
        prop_assert_eq!(err, ConfigError::NotSet(name));
    }

    #[test]
    fn empty_with_allow_empty_is_empty_string(name in NAME) {
        let env = MapEnv::new().with(name.clone(), "");
        let opts = ReadOptions::default().allow_empty(true);
        prop_assert_eq!(read_var(&env, &name, opts), Ok(Some(String::new())));
    }

    #[test]
    fn non_empty_value_is_returned_as_is(
        name in NAME,
        value in ".{1,32}",
        is_required in any::<bool>(),
        allow_empty in any::<bool>(),
    ) {
        let env = MapEnv::new().with(name.clone(), value.clone());
        let opts = ReadOptions { is_required, allow_empty };
        prop_assert_eq!(read_var(&env, &name, opts), Ok(Some(value)));
    }

    #[test]
    fn server_url_takes_precedence(
        server in "https?://[a-z]{1,12}\\.[a-z]{2,3}",
        host in "[a-z]{1,12}\\.vercel\\.app",
    ) {
        let env = MapEnv::new()
            .with("SERVER_URL", server.clone())
            .with("VERCEL_URL", host);
        prop_assert_eq!(resolve_server_url(&env), Ok(server));
    }

    #[test]
    fn vercel_url_gets_https_prefix(host in "[a-z]{1,12}\\.vercel\\.app") {
        let env = MapEnv::new().with("VERCEL_URL", host.clone());
        prop_assert_eq!(resolve_server_url(&env), Ok(format!("https://{host}")));
    }
}
