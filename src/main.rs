use clap::Parser;
use small_compare::utils::{logger, validation::Validate};
use small_compare::{
    CliConfig, CompareEngine, CompareError, Design, PrefixCountComparator, WeightedComparator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-compare CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Argument validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

        println!("Usage: small-compare [OPTIONS] <STRING1> <STRING2>");
        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(1);
    }

    let json_output = config.json;

    // 依選擇的規則建立引擎並執行比較
    let report = match config.design {
        Design::Weighted => CompareEngine::new(WeightedComparator, config).run(),
        Design::PrefixCount => CompareEngine::new(PrefixCountComparator, config).run(),
    };

    if json_output {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(CompareError::SerializationError)?;
        println!("{}", rendered);
    } else if report.equivalent {
        println!("✅ The strings are considered the same.");
    } else {
        println!("❌ The strings are different.");
    }

    tracing::info!("✅ Comparison completed");

    Ok(())
}
