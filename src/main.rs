use calc_weather::utils::{logger, validation::Validate};
use calc_weather::{
    CalcWeatherError, Calculator, CliConfig, Command, ReqwestFetcher, WeatherClient,
    WeatherSettings,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 讀取設定檔 (若有指定)
    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => {
            // 設定檔無法讀取時，僅依命令列旗標初始化日誌
            logger::init_logger(config.verbose, config.log_json);
            exit_with(&e)
        }
    };

    // 初始化日誌，命令列旗標優先
    let logging = file.as_ref().map(|f| f.logging()).unwrap_or_default();
    let verbose = config.verbose || logging.verbose.unwrap_or(false);
    logger::init_logger(verbose, config.log_json || logging.json.unwrap_or(false));

    if verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config, file.as_ref()).await {
        exit_with(&e);
    }
}

async fn run(
    config: &CliConfig,
    file: Option<&calc_weather::TomlConfig>,
) -> calc_weather::Result<()> {
    let calc = Calculator::new();

    match &config.command {
        Command::Add { a, b } => println!("{}", calc.add(*a, *b)),
        Command::Subtract { a, b } => println!("{}", calc.subtract(*a, *b)),
        Command::Multiply { a, b } => println!("{}", calc.multiply(*a, *b)),
        Command::Divide { a, b } => println!("{}", calc.divide(*a, *b)?),
        Command::Weather { city } => {
            let settings = WeatherSettings::resolve(file, config.overrides());
            settings.validate()?;

            let client = WeatherClient::new(ReqwestFetcher::from_config(&settings)?);
            tracing::info!("Fetching weather for {}", city);
            let weather = client.get_weather(city).await?;
            println!("{}", serde_json::to_string_pretty(&weather)?);
        }
    }

    Ok(())
}

fn exit_with(e: &CalcWeatherError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code())
}
