/// Default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r#"# Brick bridge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[origins]
# Inbound messages are accepted only from <scheme>://<host>[:port].
# schemes = ["http", "https", "capacitor"]
# hosts = ["localhost", "brick1100"]

[host]
# Origin reported to embedded pages for messages posted by the native host.
# origin = "capacitor://localhost"
"#
}
