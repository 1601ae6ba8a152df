use crate::config::Config;

/// Print the resolved configuration in config-file form, with the token
/// redacted.
pub(crate) fn handle_show(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = Config::default_config_path() {
        println!("# config file: {}", path.display());
        println!();
    }

    println!("[source]");
    println!("accounts = {:?}", config.source.accounts);
    println!("api_url = {:?}", config.source.api_url);
    println!();

    println!("[gitlab]");
    println!("url = {:?}", config.gitlab_url());
    match config.gitlab.group {
        Some(ref group) => println!("group = {:?}", group),
        None => println!("# group not set"),
    }
    match config.gitlab.token {
        Some(_) => println!("token = \"(redacted)\""),
        None => println!("# token not set"),
    }
    println!();

    println!("[sync]");
    println!("concurrency = {}", config.sync.concurrency);
    println!("mirror_dir = {:?}", config.sync.mirror_dir);
    println!("dry_run = {}", config.sync.dry_run);

    Ok(())
}
