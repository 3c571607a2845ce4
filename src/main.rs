use clap::Parser;
use docs_home::domain::ports::PageDataSource;
use docs_home::utils::error::ErrorSeverity;
use docs_home::utils::{logger, validation::Validate};
use docs_home::{CliConfig, DocsError, HomePage, LocalStorage, SiteConfig, SiteRenderer};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.log_format, cli.verbose);

    tracing::info!("🚀 Starting docs-home");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &cli);

    let source = cli.page_data_source(&config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        if let Err(e) = perform_dry_run(&config, &source) {
            exit_with(&e);
        }
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let renderer = SiteRenderer::new(storage, source, config.document_meta(), config.page_options())
        .with_filename(config.filename());

    match renderer.run() {
        Ok(output_path) => {
            tracing::info!("✅ Home page rendered successfully!");
            println!("✅ Home page rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &DocsError) -> ! {
    tracing::error!(
        "❌ docs-home failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn display_config_summary(config: &SiteConfig, cli: &CliConfig) {
    println!("📋 Configuration Summary:");
    println!("  Title: {}", config.site.title);
    println!("  Output: {}/{}", config.output_path(), config.filename());
    println!(
        "  Path prefix: {}",
        config.site.path_prefix.as_deref().unwrap_or("(none)")
    );
    println!("  Layout policy: {:?}", config.layout_policy());

    if let Some(query) = &cli.query {
        println!("  Page data: {}", query);
    }
    if let Some(padding) = &cli.content_padding {
        println!("  Content padding override: {}", padding);
    }
    if cli.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run<D: PageDataSource>(config: &SiteConfig, source: &D) -> docs_home::Result<()> {
    let data = source.page_data()?;
    println!("🔍 Dry Run Analysis:");
    match data.layout() {
        Some(layout) => println!("  Content padding: {}", layout.content_padding),
        None => println!("  ⚠️ No layout supplied ({:?} policy)", config.layout_policy()),
    }

    let page = HomePage::new(data, config.page_options());
    page.layout()?;

    println!("{}", serde_json::to_string_pretty(&page.summary())?);
    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}
