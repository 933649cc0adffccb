use address_lookup::config::cli::{Command, OutputFormat};
use address_lookup::config::toml_config::LogFormat;
use address_lookup::utils::{logger, validation::Validate};
use address_lookup::{
    AddressClient, AddressError, CliConfig, District, EnvConfig, LookupService, Province, TomlConfig,
    Ward,
};
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    match cli.log_format(file.as_ref()) {
        LogFormat::Json => logger::init_json_logger(cli.verbose(file.as_ref())),
        LogFormat::Compact => logger::init_cli_logger(cli.verbose(file.as_ref())),
    }

    let env = match EnvConfig::from_env() {
        Ok(env) => env,
        Err(e) => fail(e),
    };

    let settings = cli.resolve_settings(file.as_ref(), &env);
    if let Err(e) = settings.validate() {
        fail(e);
    }
    tracing::debug!("Directory settings: {:?}", settings);

    let client = match AddressClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => fail(e),
    };
    let service = LookupService::new(client);

    let outcome = match &cli.command {
        Command::Provinces => service
            .provinces()
            .await
            .map(|items| render(&items, cli.format)),
        Command::Districts { province_code } => service
            .districts(province_code)
            .await
            .map(|items| render(&items, cli.format)),
        Command::Wards { province_code } => service
            .wards(province_code)
            .await
            .map(|items| render(&items, cli.format)),
        Command::Search { query } => service
            .search(query)
            .await
            .map(|found| to_pretty_json(&found)),
    };

    match outcome {
        Ok(output) => {
            println!("{}", output?);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

/// `code<TAB>name` line for the tsv output.
trait Row {
    fn row(&self) -> String;
}

macro_rules! impl_row {
    ($($ty:ty),*) => {
        $(impl Row for $ty {
            fn row(&self) -> String {
                format!("{}\t{}", self.code, self.name)
            }
        })*
    };
}

impl_row!(Province, District, Ward);

fn render<T: Serialize + Row>(items: &[T], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(items),
        OutputFormat::Tsv => Ok(items.iter().map(Row::row).collect::<Vec<_>>().join("\n")),
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn fail(e: AddressError) -> ! {
    tracing::error!(
        "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e {
        AddressError::Upstream { .. } => 2,
        AddressError::Network(_) => 3,
        AddressError::Parse(_) => 4,
        _ => 1,
    };
    std::process::exit(exit_code);
}
