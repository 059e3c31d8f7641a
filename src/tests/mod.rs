mod test_from_toml;
