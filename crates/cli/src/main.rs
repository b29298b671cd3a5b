use palletstore_cli::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    palletstore_observability::init(&config.log);

    let stdout = std::io::stdout();
    palletstore_cli::run(&config, &mut stdout.lock())
}
